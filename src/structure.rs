use std::fmt;

use crate::Region;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Internal,
}

/// One node of a structural snapshot, as produced by `Quadtree::structure`.
///
/// `point_count` is the number of points held directly, so it is always zero
/// for internal nodes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeInfo {
    pub kind: NodeKind,
    pub depth: usize,
    pub region: Region,
    pub point_count: usize,
}

impl NodeInfo {
    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf
    }
}

impl fmt::Display for NodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = self.depth * 2;
        match self.kind {
            NodeKind::Internal => write!(
                f,
                "{:indent$}internal depth={} {}",
                "",
                self.depth,
                self.region,
                indent = indent
            ),
            NodeKind::Leaf => write!(
                f,
                "{:indent$}leaf depth={} {} points={}",
                "",
                self.depth,
                self.region,
                self.point_count,
                indent = indent
            ),
        }
    }
}
