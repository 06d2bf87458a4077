use std::fmt;

use crate::{Coordinate, QuadtreeError, Result};

/// One of the four children of a split region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    /// Child order used everywhere: NW, NE, SW, SE.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    pub fn index(self) -> usize {
        match self {
            Quadrant::NorthWest => 0,
            Quadrant::NorthEast => 1,
            Quadrant::SouthWest => 2,
            Quadrant::SouthEast => 3,
        }
    }
}

/// A closed axis-aligned rectangle with `x_min <= x_max` and `y_min <= y_max`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Region {
    pub fn new(p1: Coordinate, p2: Coordinate) -> Self {
        Region {
            x_min: p1.x.min(p2.x),
            y_min: p1.y.min(p2.y),
            x_max: p1.x.max(p2.x),
            y_max: p1.y.max(p2.y),
        }
    }

    /// Region spanning `left..left + width` horizontally and
    /// `bottom..bottom + height` vertically.
    pub fn from_origin(left: f64, width: f64, bottom: f64, height: f64) -> Self {
        Region::new(
            Coordinate::new(left, bottom),
            Coordinate::new(left + width, bottom + height),
        )
    }

    /// Build a region from explicit bounds, rejecting inverted (or NaN) ones.
    pub fn try_from_bounds(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        if x1 <= x2 && y1 <= y2 {
            Ok(Region {
                x_min: x1,
                y_min: y1,
                x_max: x2,
                y_max: y2,
            })
        } else {
            Err(QuadtreeError::BadRect { x1, y1, x2, y2 })
        }
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> Coordinate {
        Coordinate {
            x: (self.x_max + self.x_min) / 2.,
            y: (self.y_max + self.y_min) / 2.,
        }
    }

    /// Inclusive on every edge. NaN coordinates are never contained.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x_min <= x && x <= self.x_max && self.y_min <= y && y <= self.y_max
    }

    /// Regions that only touch along an edge or a corner intersect.
    pub fn intersects(&self, other: &Region) -> bool {
        self.x_min <= other.x_max
            && self.x_max >= other.x_min
            && self.y_min <= other.y_max
            && self.y_max >= other.y_min
    }

    /// Pick the child a coordinate descends into.
    ///
    /// Ties on the midpoint go east and north, at every level.
    pub fn quadrant(&self, x: f64, y: f64) -> Quadrant {
        let mid = self.center();
        match (x >= mid.x, y >= mid.y) {
            (false, true) => Quadrant::NorthWest,
            (true, true) => Quadrant::NorthEast,
            (false, false) => Quadrant::SouthWest,
            (true, false) => Quadrant::SouthEast,
        }
    }

    /// The four child regions, indexed by `Quadrant::index`.
    pub fn split(&self) -> [Region; 4] {
        let mid = self.center();
        [
            Region {
                x_min: self.x_min,
                y_min: mid.y,
                x_max: mid.x,
                y_max: self.y_max,
            },
            Region {
                x_min: mid.x,
                y_min: mid.y,
                x_max: self.x_max,
                y_max: self.y_max,
            },
            Region {
                x_min: self.x_min,
                y_min: self.y_min,
                x_max: mid.x,
                y_max: mid.y,
            },
            Region {
                x_min: mid.x,
                y_min: self.y_min,
                x_max: self.x_max,
                y_max: mid.y,
            },
        ]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
