#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

use pr_quadtree::from_wkt::parse_points;
use pr_quadtree::{Coordinate, Region};

//// Utility functions

pub(crate) fn read_test_case(name: &str) -> Vec<Coordinate> {
    let filename = format!("tests/testdata/{}.wkt", name);
    let filepath = Path::new(env!("CARGO_MANIFEST_DIR")).join(Path::new(&filename));
    let contents = fs::read_to_string(Path::new(&filepath)).unwrap();

    contents
        .split("\n\n")
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| parse_points(chunk).unwrap())
        .flatten()
        .collect()
}

/// Smallest region holding every coordinate, grown by `margin` on each side.
pub(crate) fn bounding_region(coords: &[Coordinate], margin: f64) -> Region {
    let (mut x_min, mut y_min) = (f64::INFINITY, f64::INFINITY);
    let (mut x_max, mut y_max) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for c in coords {
        x_min = x_min.min(c.x);
        y_min = y_min.min(c.y);
        x_max = x_max.max(c.x);
        y_max = y_max.max(c.y);
    }
    Region::new(
        Coordinate::new(x_min - margin, y_min - margin),
        Coordinate::new(x_max + margin, y_max + margin),
    )
}

pub(crate) fn get_random_points(rect: Region, n: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Coordinate::new(
            rng.gen_range(rect.x_min(), rect.x_max()),
            rng.gen_range(rect.y_min(), rect.y_max()),
        ));
    }

    results
}

pub(crate) fn get_random_rects(rect: Region, n: usize, seed: u64) -> Vec<Region> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Region::new(
            Coordinate::new(
                rng.gen_range(rect.x_min(), rect.x_max()),
                rng.gen_range(rect.y_min(), rect.y_max()),
            ),
            Coordinate::new(
                rng.gen_range(rect.x_min(), rect.x_max()),
                rng.gen_range(rect.y_min(), rect.y_max()),
            ),
        ));
    }

    results
}

pub(crate) fn sorted(mut coords: Vec<Coordinate>) -> Vec<Coordinate> {
    coords.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap()
            .then(a.y.partial_cmp(&b.y).unwrap())
    });
    coords
}
