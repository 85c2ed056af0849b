//! The Graph derived from a [`Grid`](crate::Grid) and the search over it

mod node_id;
pub use node_id::*;

mod node;
pub use node::Node;

mod node_map;
pub use node_map::NodeMap;

mod solver_config;
pub use solver_config::{Selection, SolverConfig};

mod dijkstra;
pub use dijkstra::{dijkstra_search, ShortestPaths};

pub use crate::path::Path;

use std::cmp::Ordering;

/// A candidate in the BinaryHeap. Cheaper comes first, then the lower id.
#[derive(PartialEq, Eq)]
struct Element<Id>(Id, crate::Cost);
impl<Id: Ord> PartialOrd for Element<Id> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl<Id: Ord> Ord for Element<Id> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.cmp(&self.1).then_with(|| rhs.0.cmp(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::Element;
    use crate::Cost;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_order() {
        let mut heap: BinaryHeap<_> = [(3u32, 5.0), (1, 7.0), (2, 5.0), (0, 9.0), (4, 4.5)]
            .into_iter()
            .map(|(id, cost)| Element(id, Cost::new(cost).unwrap()))
            .collect();
        let order: Vec<u32> = std::iter::from_fn(|| heap.pop().map(|Element(id, _)| id)).collect();
        assert_eq!(order, vec![4, 2, 3, 1, 0]);
    }
}
