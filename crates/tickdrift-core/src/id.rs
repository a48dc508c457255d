//! Identity types for simulated nodes

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node identity - dense index in `0..node_count`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const ZERO: NodeId = NodeId(0);

    #[inline]
    pub fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Position of this node in per-node vectors
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Self {
        NodeId(index as u32)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_index_roundtrip() {
        let id = NodeId::from_index(7);
        assert_eq!(id, NodeId::new(7));
        assert_eq!(id.index(), 7);
    }

    #[test]
    fn test_node_id_formatting() {
        let id = NodeId::new(3);
        assert_eq!(format!("{}", id), "3");
        assert_eq!(format!("{:?}", id), "Node(3)");
    }

    #[test]
    fn test_node_id_ordering() {
        assert!(NodeId::new(1) < NodeId::new(2));
        assert_eq!(NodeId::default(), NodeId::ZERO);
    }
}
