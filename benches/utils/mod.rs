#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use pr_quadtree::{Coordinate, Region};

//// Utility functions

pub(crate) fn get_universe() -> Region {
    Region::from_origin(-180., 360., -90., 180.)
}

pub(crate) fn get_random_points(rect: Region, n: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        results.push(Coordinate::new(
            rng.gen_range(rect.x_min(), rect.x_max()),
            rng.gen_range(rect.y_min(), rect.y_max()),
        ));
    }

    results
}

pub(crate) fn get_random_rects(rect: Region, n: usize, size: f64, seed: u64) -> Vec<Region> {
    get_random_points(rect, n, seed)
        .into_iter()
        .map(|c| Region::new(c, Coordinate::new(c.x + size, c.y + size)))
        .collect()
}
