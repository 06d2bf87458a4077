//! The recursive cell of the quadtree.
//!
//! A node is either a leaf holding point handles or an internal node owning
//! exactly four children in `Quadrant` order. A leaf above the depth ceiling
//! holds at most one point; a leaf at the ceiling is an unbounded bucket.
//! Every internal node has at least two points somewhere below it, which is
//! what lets removal collapse a subtree as soon as its count drops to one.

use log::trace;

use crate::{NodeInfo, NodeKind, PointHandle, Region};

/// How removal finds the leaf holding a handle.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Route {
    /// Follow the quadrant of a coordinate down to a single leaf.
    Descend { x: f64, y: f64 },
    /// Visit every leaf.
    Scan,
}

#[derive(Debug)]
enum Content<H> {
    Leaf(Vec<H>),
    Internal(Box<[Node<H>; 4]>),
}

#[derive(Debug)]
pub(crate) struct Node<H> {
    region: Region,
    depth: usize,
    content: Content<H>,
}

impl<H: PointHandle> Node<H> {
    pub(crate) fn new_leaf(region: Region, depth: usize) -> Self {
        Node {
            region,
            depth,
            content: Content::Leaf(Vec::new()),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.content, Content::Leaf(_))
    }

    /// Number of points in this subtree.
    pub(crate) fn len(&self) -> usize {
        match &self.content {
            Content::Leaf(points) => points.len(),
            Content::Internal(children) => children.iter().map(Node::len).sum(),
        }
    }

    /// The point must already be known to lie inside the root's region.
    pub(crate) fn insert(&mut self, point: H, max_depth: usize) {
        match &mut self.content {
            Content::Internal(children) => {
                let quadrant = self.region.quadrant(point.x(), point.y());
                children[quadrant.index()].insert(point, max_depth);
            }
            Content::Leaf(points) if points.is_empty() || self.depth >= max_depth => {
                points.push(point);
            }
            Content::Leaf(_) => {
                self.subdivide(max_depth);
                self.insert(point, max_depth);
            }
        }
    }

    fn subdivide(&mut self, max_depth: usize) {
        let [nw, ne, sw, se] = self.region.split();
        let depth = self.depth + 1;
        let children = Box::new([
            Node::new_leaf(nw, depth),
            Node::new_leaf(ne, depth),
            Node::new_leaf(sw, depth),
            Node::new_leaf(se, depth),
        ]);
        trace!("Splitting leaf at depth {} {}", self.depth, self.region);
        let previous = std::mem::replace(&mut self.content, Content::Internal(children));
        if let Content::Leaf(points) = previous {
            for point in points {
                self.insert(point, max_depth);
            }
        }
    }

    /// Remove the handle identical to `point`, collapsing every ancestor whose
    /// subtree is left with at most one point.
    pub(crate) fn remove(&mut self, point: &H, route: Route) -> Option<H> {
        let removed = match &mut self.content {
            Content::Leaf(points) => {
                let index = points.iter().position(|p| p.same_point(point))?;
                return Some(points.remove(index));
            }
            Content::Internal(children) => match route {
                Route::Descend { x, y } => {
                    children[self.region.quadrant(x, y).index()].remove(point, route)
                }
                Route::Scan => children
                    .iter_mut()
                    .find_map(|child| child.remove(point, route)),
            },
        };
        if removed.is_some() {
            self.try_merge();
        }
        removed
    }

    fn try_merge(&mut self) {
        let points = match &mut self.content {
            Content::Internal(children)
                if children.iter().all(Node::is_leaf)
                    && children.iter().map(Node::len).sum::<usize>() <= 1 =>
            {
                children
                    .iter_mut()
                    .flat_map(Node::take_points)
                    .collect()
            }
            _ => return,
        };
        trace!("Merging children at depth {} {}", self.depth, self.region);
        self.content = Content::Leaf(points);
    }

    fn take_points(&mut self) -> Vec<H> {
        match &mut self.content {
            Content::Leaf(points) => std::mem::take(points),
            Content::Internal(_) => Vec::new(),
        }
    }

    pub(crate) fn contains(&self, point: &H, route: Route) -> bool {
        match &self.content {
            Content::Leaf(points) => points.iter().any(|p| p.same_point(point)),
            Content::Internal(children) => match route {
                Route::Descend { x, y } => {
                    children[self.region.quadrant(x, y).index()].contains(point, route)
                }
                Route::Scan => children.iter().any(|child| child.contains(point, route)),
            },
        }
    }

    /// The points of the leaf a coordinate descends into.
    pub(crate) fn leaf_containing(&self, x: f64, y: f64) -> &[H] {
        let mut node = self;
        loop {
            match &node.content {
                Content::Leaf(points) => return points,
                Content::Internal(children) => {
                    node = &children[node.region.quadrant(x, y).index()];
                }
            }
        }
    }

    /// Append every point inside `query`, visiting children NW, NE, SW, SE.
    pub(crate) fn collect(&self, query: &Region, results: &mut Vec<H>) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if !node.region.intersects(query) {
                continue;
            }
            match &node.content {
                Content::Leaf(points) => results.extend(
                    points
                        .iter()
                        .filter(|p| query.contains(p.x(), p.y()))
                        .cloned(),
                ),
                Content::Internal(children) => stack.extend(children.iter().rev()),
            }
        }
    }

    /// Pre-order snapshot of the subtree, children in `Quadrant` order.
    pub(crate) fn structure(&self) -> Vec<NodeInfo> {
        let mut infos = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            let (kind, point_count) = match &node.content {
                Content::Leaf(points) => (NodeKind::Leaf, points.len()),
                Content::Internal(children) => {
                    stack.extend(children.iter().rev());
                    (NodeKind::Internal, 0)
                }
            };
            infos.push(NodeInfo {
                kind,
                depth: node.depth,
                region: node.region,
                point_count,
            });
        }
        infos
    }

    /// Depth of the deepest node in the subtree.
    pub(crate) fn height(&self) -> usize {
        match &self.content {
            Content::Leaf(_) => self.depth,
            Content::Internal(children) => children
                .iter()
                .map(Node::height)
                .max()
                .unwrap_or(self.depth),
        }
    }
}
