//! Round-robin reporting schedule

use tickdrift_core::NodeId;

/// Node that reports in `slot`: `slot mod node_count`
///
/// `node_count` must be non-zero.
#[inline]
pub fn reporting_node(slot: u64, node_count: usize) -> NodeId {
    debug_assert!(node_count > 0);
    NodeId::from_index((slot % node_count as u64) as usize)
}

/// Every node except the reporting one, ascending
pub fn comparison_nodes(reporting: NodeId, node_count: usize) -> impl Iterator<Item = NodeId> {
    (0..node_count)
        .map(NodeId::from_index)
        .filter(move |&id| id != reporting)
}

/// Schedule bound to a fixed node count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundRobin {
    node_count: usize,
}

impl RoundRobin {
    pub fn new(node_count: usize) -> Self {
        RoundRobin { node_count }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    #[inline]
    pub fn reporting_node(&self, slot: u64) -> NodeId {
        reporting_node(slot, self.node_count)
    }

    pub fn comparison_nodes(&self, slot: u64) -> impl Iterator<Item = NodeId> {
        comparison_nodes(self.reporting_node(slot), self.node_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reporting_node_cycles() {
        let schedule = RoundRobin::new(4);
        let order: Vec<u32> = (0..9).map(|s| schedule.reporting_node(s).0).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_comparison_nodes_exclude_reporter() {
        let schedule = RoundRobin::new(4);
        let others: Vec<u32> = schedule.comparison_nodes(6).map(|n| n.0).collect();
        assert_eq!(others, vec![0, 1, 3]);
    }

    #[test]
    fn test_pair_has_single_comparison_node() {
        let schedule = RoundRobin::new(2);
        for slot in 0..10 {
            let others: Vec<NodeId> = schedule.comparison_nodes(slot).collect();
            assert_eq!(others.len(), 1);
            assert_ne!(others[0], schedule.reporting_node(slot));
        }
    }

    proptest! {
        #[test]
        fn prop_reporting_node_is_slot_mod_count(slot in 0u64..u64::MAX, count in 2usize..64) {
            prop_assert_eq!(reporting_node(slot, count).0 as u64, slot % count as u64);
        }

        #[test]
        fn prop_comparison_set_size(slot in 0u64..10_000, count in 2usize..64) {
            let reporter = reporting_node(slot, count);
            let others: Vec<NodeId> = comparison_nodes(reporter, count).collect();
            prop_assert_eq!(others.len(), count - 1);
            prop_assert!(!others.contains(&reporter));
        }
    }
}
