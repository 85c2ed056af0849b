use super::Node;
use crate::{neighbors::Neighborhood, Cost, Grid, NodeID};

use log::debug;

/// The Graph derived from a [`Grid`]: one [`Node`] per Cell, indexed by its [`NodeID`].
///
/// Every edge points from a Node to one of its neighbors and costs as much as the
/// neighbor's Cell. The Graph never changes after it was built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeMap {
	nodes: Vec<Node>,
}

impl NodeMap {
	/// Builds the Graph of `grid` using its [`ManhattanNeighborhood`](crate::neighbors::ManhattanNeighborhood)
	///
	/// ```
	/// # use grid_dijkstra::{Grid, graph::NodeMap};
	/// let grid = Grid::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
	/// let nodes = NodeMap::from_grid(&grid);
	/// let edges = |id| -> Vec<_> {
	///     nodes.edges(id).iter().map(|&(to, cost)| (to, cost.get())).collect()
	/// };
	///
	/// assert_eq!(edges(0), vec![(1, 2.0), (2, 3.0)]);
	/// // nobody may step back onto the root
	/// assert_eq!(edges(1), vec![(3, 4.0)]);
	/// assert_eq!(edges(3), vec![(1, 2.0), (2, 3.0)]);
	/// ```
	pub fn from_grid(grid: &Grid) -> NodeMap {
		NodeMap::with_neighborhood(grid, &grid.neighborhood())
	}

	/// Builds the Graph of `grid`, connecting Nodes according to `neighborhood`
	pub fn with_neighborhood<N: Neighborhood>(grid: &Grid, neighborhood: &N) -> NodeMap {
		let count = grid.node_count();
		let mut nodes = Vec::with_capacity(count);
		let mut all_neighbors = vec![];

		for id in 0..count as NodeID {
			let mut node = Node::new(id, grid.coordinate_of(id), grid.cost(id));

			all_neighbors.clear();
			neighborhood.get_all_neighbors(id, &mut all_neighbors);
			node.edges = all_neighbors
				.iter()
				.map(|&other_id| (other_id, grid.cost(other_id)))
				.collect();

			nodes.push(node);
		}

		let map = NodeMap { nodes };
		debug!(
			"built Graph with {} Nodes and {} edges",
			map.len(),
			map.edge_count()
		);
		map
	}

	/// The number of Nodes
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// `true` if there are no Nodes
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// The total number of edges
	pub fn edge_count(&self) -> usize {
		self.nodes.iter().map(|node| node.edges.len()).sum()
	}

	/// `true` if `id` belongs to this Graph
	pub fn contains(&self, id: NodeID) -> bool {
		(id as usize) < self.nodes.len()
	}

	/// The outgoing edges of a Node as `(neighbor, cost)`
	pub fn edges(&self, id: NodeID) -> &[(NodeID, Cost)] {
		&self[id].edges
	}

	/// Iterates over all Nodes in ascending id order
	pub fn iter(&self) -> impl Iterator<Item = (NodeID, &Node)> + '_ {
		self.nodes.iter().map(|node| (node.id, node))
	}
}

use std::ops::Index;
impl Index<NodeID> for NodeMap {
	type Output = Node;
	#[track_caller]
	fn index(&self, index: NodeID) -> &Node {
		&self.nodes[index as usize]
	}
}
