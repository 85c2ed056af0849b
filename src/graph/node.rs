use crate::{Cost, NodeID, Point};

/// A Cell of the Grid as a Node of the Graph
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
	/// the row-major index of the Cell
	pub id: NodeID,
	/// the position of the Cell
	pub pos: Point,
	/// the Cost of stepping onto this Node
	pub walk_cost: Cost,
	/// `(neighbor, cost of stepping onto neighbor)`, sorted by the neighbor's id
	pub edges: Vec<(NodeID, Cost)>,
}

impl Node {
	/// Creates a Node without any edges
	pub fn new(id: NodeID, pos: Point, walk_cost: Cost) -> Node {
		Node {
			id,
			pos,
			walk_cost,
			edges: Vec::new(),
		}
	}
}
