//! A point-region quadtree over a fixed universe.
//!
//! The tree stores handles to caller-owned points. Leaves above `max_depth`
//! hold at most one point and split when a second one arrives; leaves at
//! `max_depth` accumulate any number of points. Removal collapses every
//! subtree left with at most one point, so `add` followed by `remove` restores
//! the previous shape exactly.

use std::fmt;

use log::debug;

use crate::node::{Node, Route};
use crate::{NodeInfo, PointHandle, QuadtreeError, Region, Result};

/// Deepest level the tree will ever split to. Larger `max_depth` values are
/// clamped to it, which bounds the recursion of every node operation.
pub const DEPTH_LIMIT: usize = 128;

#[derive(Debug)]
pub struct Quadtree<H> {
    universe: Region,
    max_depth: usize,
    size: usize,
    root: Node<H>,
}

impl<H: PointHandle> Quadtree<H> {
    /// An empty tree. With `max_depth == 0` the root never splits.
    ///
    /// `max_depth` is clamped to `DEPTH_LIMIT`.
    pub fn new(universe: Region, max_depth: usize) -> Self {
        if max_depth > DEPTH_LIMIT {
            debug!("Clamping max depth {} to {}", max_depth, DEPTH_LIMIT);
        }
        let max_depth = max_depth.min(DEPTH_LIMIT);
        Quadtree {
            universe,
            max_depth,
            size: 0,
            root: Node::new_leaf(universe, 0),
        }
    }

    pub fn universe(&self) -> Region {
        self.universe
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Depth of the deepest node; 0 while the root is a leaf.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Drop every handle and return to a single empty root leaf.
    pub fn clear(&mut self) {
        self.root = Node::new_leaf(self.universe, 0);
        self.size = 0;
    }

    pub fn add(&mut self, point: H) -> Result<()> {
        self.check_bounds(point.x(), point.y())?;
        self.root.insert(point, self.max_depth);
        self.size += 1;
        Ok(())
    }

    /// Remove the handle identical to `point` and return the tracked copy.
    pub fn remove(&mut self, point: &H) -> Result<H> {
        let removed = self.detach(point)?;
        self.size -= 1;
        Ok(removed)
    }

    /// Re-file a point whose coordinates the caller has just changed.
    ///
    /// The new coordinates are checked first, so an `OutOfBound` failure
    /// leaves the point tracked where it was.
    pub fn update(&mut self, point: &H) -> Result<()> {
        self.check_bounds(point.x(), point.y())?;
        let handle = self.detach(point)?;
        self.root.insert(handle, self.max_depth);
        Ok(())
    }

    /// Whether the tree tracks this exact point.
    pub fn contains(&self, point: &H) -> bool {
        let (x, y) = (point.x(), point.y());
        (self.universe.contains(x, y) && self.root.contains(point, Route::Descend { x, y }))
            || self.root.contains(point, Route::Scan)
    }

    /// The points sharing the leaf that `(x, y)` falls in.
    ///
    /// Empty outside the universe. The leaf may hold points at other
    /// coordinates than `(x, y)`.
    pub fn get_at(&self, x: f64, y: f64) -> &[H] {
        if !self.universe.contains(x, y) {
            return &[];
        }
        self.root.leaf_containing(x, y)
    }

    /// Every point inside `[x1, x2] x [y1, y2]`, edges included.
    pub fn get_in_rect(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Vec<H>> {
        let query = Region::try_from_bounds(x1, y1, x2, y2).map_err(|e| {
            debug!("Rejected range query: {}", e);
            e
        })?;
        Ok(self.query(&query))
    }

    /// Every point inside `query`, in NW, NE, SW, SE traversal order.
    pub fn query(&self, query: &Region) -> Vec<H> {
        let mut results = Vec::new();
        self.root.collect(query, &mut results);
        results
    }

    /// Pre-order listing of every node, children in NW, NE, SW, SE order.
    pub fn structure(&self) -> Vec<NodeInfo> {
        self.root.structure()
    }

    fn check_bounds(&self, x: f64, y: f64) -> Result<()> {
        if self.universe.contains(x, y) {
            Ok(())
        } else {
            debug!("Rejected point ({}, {}) outside {}", x, y, self.universe);
            Err(QuadtreeError::OutOfBound {
                x,
                y,
                universe: self.universe,
            })
        }
    }

    /// Take the handle out of its leaf. Descends on the current coordinates
    /// first and scans the whole tree only if that leaf does not hold it.
    fn detach(&mut self, point: &H) -> Result<H> {
        let (x, y) = (point.x(), point.y());
        if self.universe.contains(x, y) {
            if let Some(handle) = self.root.remove(point, Route::Descend { x, y }) {
                return Ok(handle);
            }
        }
        debug!("Point not at its leaf for ({}, {}), scanning the tree", x, y);
        self.root
            .remove(point, Route::Scan)
            .ok_or(QuadtreeError::BadSearch)
    }
}

impl<H: PointHandle> fmt::Display for Quadtree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "quadtree universe={} max_depth={} points={}",
            self.universe, self.max_depth, self.size
        )?;
        for info in self.structure() {
            writeln!(f, "{}", info)?;
        }
        Ok(())
    }
}
