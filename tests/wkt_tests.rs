mod test_utils;

use pr_quadtree::{Coordinate, Position, Quadtree, Region};
use test_utils::{bounding_region, get_random_rects, read_test_case, sorted};

fn get_results_brute_force(query: &Region, coords: &[Coordinate]) -> Vec<Coordinate> {
    sorted(
        coords
            .iter()
            .copied()
            .filter(|c| query.contains(c.x, c.y))
            .collect(),
    )
}

fn get_results_quadtree(query: &Region, tree: &Quadtree<&Coordinate>) -> Vec<Coordinate> {
    let result = tree
        .get_in_rect(query.x_min(), query.y_min(), query.x_max(), query.y_max())
        .unwrap();
    sorted(result.iter().map(|c| c.coordinate()).collect())
}

#[test]
fn test_wkt_point_sets() {
    for test_case in &["grid", "clustered", "coincident"] {
        let coords = read_test_case(test_case);
        println!("{} has {} points", test_case, coords.len());
        let universe = bounding_region(&coords, 1.);

        for &max_depth in &[0, 3, 8] {
            let mut tree = Quadtree::new(universe, max_depth);
            for c in &coords {
                tree.add(c).unwrap();
            }
            assert_eq!(tree.len(), coords.len());
            assert!(tree.height() <= max_depth);

            for c in &coords {
                assert!(
                    tree.get_at(c.x, c.y).iter().any(|p| std::ptr::eq(*p, c)),
                    "{} depth {}: {} not found at its own position",
                    test_case,
                    max_depth,
                    c
                );
            }

            for (query_idx, query) in get_random_rects(universe, 100, 192).iter().enumerate() {
                assert_eq!(
                    get_results_brute_force(query, &coords),
                    get_results_quadtree(query, &tree),
                    "{} depth {}: query {} {}",
                    test_case,
                    max_depth,
                    query_idx,
                    query
                );
            }
        }
    }
}

#[test]
fn test_wkt_coincident_points_share_a_bucket() {
    let coords = read_test_case("coincident");
    let universe = Region::from_origin(-15., 50., 8., 120.5);
    let mut tree = Quadtree::new(universe, 6);
    for c in &coords {
        tree.add(c).unwrap();
    }
    assert_eq!(tree.get_at(3.5, 10.).len(), 3);
    assert_eq!(tree.get_at(10., 68.25).len(), 2);
    assert_eq!(tree.height(), 6);
}

#[test]
fn test_wkt_remove_everything() {
    let coords = read_test_case("clustered");
    let universe = bounding_region(&coords, 0.);
    let mut tree = Quadtree::new(universe, 10);
    let empty = tree.structure();
    for c in &coords {
        tree.add(c).unwrap();
    }
    for c in coords.iter().rev() {
        tree.remove(&c).unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.structure(), empty);
}
