use thiserror::Error;

use crate::Region;

/// Failures reported by tree operations. None of them modify the tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadtreeError {
    #[error("point ({x}, {y}) lies outside the universe {universe}")]
    OutOfBound { x: f64, y: f64, universe: Region },

    #[error("point is not tracked by the tree")]
    BadSearch,

    #[error("query rectangle ({x1}, {y1}) - ({x2}, {y2}) has inverted bounds")]
    BadRect { x1: f64, y1: f64, x2: f64, y2: f64 },

    #[error("WKT error: {0}")]
    Wkt(String),
}

pub type Result<T> = std::result::Result<T, QuadtreeError>;
