mod coordinate;
mod error;
pub mod from_wkt;
mod node;
mod point;
mod quadtree;
mod region;
mod structure;

pub use coordinate::Coordinate;
pub use error::{QuadtreeError, Result};
pub use point::{PointHandle, Position, Relocate};
pub use quadtree::{Quadtree, DEPTH_LIMIT};
pub use region::{Quadrant, Region};
pub use structure::{NodeInfo, NodeKind};
