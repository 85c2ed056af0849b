//! The rule that decides which Cells of a Grid are connected

use crate::{NodeID, Point, ROOT};
use std::fmt::Debug;

/// Defines how a Path can move between the Nodes of a Grid.
///
/// Nodes are identified by their row-major [`NodeID`], so a Neighborhood also owns the
/// translation between NodeIDs and [`Point`]s.
///
/// Implementors only have to provide [`are_neighbors`](Neighborhood::are_neighbors). The
/// default [`get_all_neighbors`](Neighborhood::get_all_neighbors) scans every Node in
/// ascending order, which is correct but `O(n)` per call.
pub trait Neighborhood: Clone + Debug {
	/// The number of Nodes in the Grid
	fn node_count(&self) -> usize;

	/// `true` if a Path may step from `from` directly onto `to`.
	///
	/// This relation does not have to be symmetric.
	fn are_neighbors(&self, from: NodeID, to: NodeID) -> bool;

	/// Appends all Nodes reachable from `id` in one step to `target`, in ascending order.
	fn get_all_neighbors(&self, id: NodeID, target: &mut Vec<NodeID>) {
		let count = self.node_count() as NodeID;
		target.extend((0..count).filter(|&other| other != id && self.are_neighbors(id, other)));
	}
}

/// A Neighborhood for Agents moving along the 4 cardinal directions, where the [`ROOT`]
/// can be left but never entered.
///
/// ```no_code
/// A: Agent, o: reachable in one step, R: Root
///   o         R   o
///   |           <-|
/// o-A-o       o---A
///   |             |
///   o             o
/// ```
///
/// Coordinates are `(x, y)` = (column, row), and NodeIDs are assigned in row-major order:
/// `id = y * width + x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
	width: usize,
	height: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `width` and `height` are the size of the Grid to move on.
	pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { width, height }
	}

	/// The Point of a Node
	///
	/// ```
	/// # use grid_dijkstra::neighbors::ManhattanNeighborhood;
	/// let neighborhood = ManhattanNeighborhood::new(3, 2);
	/// assert_eq!(neighborhood.coordinate_of(4), (1, 1));
	/// ```
	pub fn coordinate_of(&self, id: NodeID) -> Point {
		let id = id as usize;
		debug_assert!(id < self.width * self.height, "NodeID {} out of range", id);
		(id % self.width, id / self.width)
	}

	/// The Node at a Point, or `None` if the Point is outside of the Grid
	pub fn index_of(&self, (x, y): Point) -> Option<NodeID> {
		if x < self.width && y < self.height {
			Some((y * self.width + x) as NodeID)
		} else {
			None
		}
	}
}

impl Neighborhood for ManhattanNeighborhood {
	fn node_count(&self) -> usize {
		self.width * self.height
	}

	fn are_neighbors(&self, from: NodeID, to: NodeID) -> bool {
		if to == ROOT {
			return false;
		}
		let (ax, ay) = self.coordinate_of(from);
		let (bx, by) = self.coordinate_of(to);
		ax.abs_diff(bx) + ay.abs_diff(by) == 1
	}

	fn get_all_neighbors(&self, id: NodeID, target: &mut Vec<NodeID>) {
		let (width, height) = (self.width as isize, self.height as isize);
		let (x, y) = self.coordinate_of(id);

		// sorted so that the resulting ids are ascending
		let iter = [(0isize, -1isize), (-1, 0), (1, 0), (0, 1)]
			.iter()
			.map(|(dx, dy)| (x as isize + dx, y as isize + dy))
			.filter(|&(x, y)| x >= 0 && y >= 0 && x < width && y < height)
			.map(|(x, y)| (y * width + x) as NodeID)
			.filter(|&other| other != ROOT);

		target.extend(iter);
	}
}

#[cfg(test)]
fn scan_neighbors<N: Neighborhood>(neighborhood: &N, id: NodeID) -> Vec<NodeID> {
	(0..neighborhood.node_count() as NodeID)
		.filter(|&other| other != id && neighborhood.are_neighbors(id, other))
		.collect()
}

#[test]
fn test_manhattan_get_all_neighbors() {
	let neighborhood = ManhattanNeighborhood::new(5, 5);
	let mut neighbors = vec![];
	neighborhood.get_all_neighbors(10, &mut neighbors);
	assert_eq!(neighbors, vec![5, 11, 15]);
}

#[test]
fn test_manhattan_matches_full_scan() {
	for (width, height) in [(1, 1), (1, 4), (4, 1), (3, 3), (5, 2)] {
		let neighborhood = ManhattanNeighborhood::new(width, height);
		for id in 0..neighborhood.node_count() as NodeID {
			let mut neighbors = vec![];
			neighborhood.get_all_neighbors(id, &mut neighbors);
			assert_eq!(neighbors, scan_neighbors(&neighborhood, id), "node {}", id);
		}
	}
}

#[test]
fn test_root_is_never_entered() {
	let neighborhood = ManhattanNeighborhood::new(4, 3);
	for id in 1..neighborhood.node_count() as NodeID {
		assert!(!neighborhood.are_neighbors(id, ROOT));
	}
	assert!(neighborhood.are_neighbors(ROOT, 1));
	assert!(neighborhood.are_neighbors(ROOT, 4));
	assert!(!neighborhood.are_neighbors(ROOT, 5));
}

#[test]
fn test_no_wrap_around_rows() {
	let neighborhood = ManhattanNeighborhood::new(3, 3);
	// (2, 0) and (0, 1) are consecutive ids but not adjacent
	assert!(!neighborhood.are_neighbors(2, 3));
	assert!(!neighborhood.are_neighbors(3, 2));
}

#[test]
fn test_coordinates_round_trip() {
	let neighborhood = ManhattanNeighborhood::new(4, 3);
	for id in 0..neighborhood.node_count() as NodeID {
		assert_eq!(neighborhood.index_of(neighborhood.coordinate_of(id)), Some(id));
	}
	assert_eq!(neighborhood.index_of((4, 0)), None);
	assert_eq!(neighborhood.index_of((0, 3)), None);
}
