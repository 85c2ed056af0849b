use super::*;
use crate::{Cost, Error, NodeID};

use log::{debug, trace};
use std::collections::BinaryHeap;
use std::time::Instant;

/// The result of a [`dijkstra_search`]: the Cost of reaching every Node from the root, and one
/// cheapest Path for every reached Node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths {
	root: NodeID,
	distances: Vec<Option<Cost>>,
	paths: NodeIDMap<Path<NodeID>>,
}

impl ShortestPaths {
	/// The Node the search started at
	pub fn root(&self) -> NodeID {
		self.root
	}

	/// The Cost of the cheapest Path to `id`, or `None` if `id` was not reached
	pub fn distance(&self, id: NodeID) -> Option<Cost> {
		self.distances.get(id as usize).copied().flatten()
	}

	/// The distance of every Node, indexed by NodeID. `None` marks unreached Nodes.
	pub fn distances(&self) -> &[Option<Cost>] {
		&self.distances
	}

	/// The recorded Path to `id`.
	///
	/// The root never has a recorded Path, and neither do unreached Nodes.
	/// Use [`route_to`](ShortestPaths::route_to) to get the trivial Path for the root.
	pub fn path(&self, id: NodeID) -> Option<&Path<NodeID>> {
		self.paths.get(&id)
	}

	/// All recorded Paths
	pub fn paths(&self) -> &NodeIDMap<Path<NodeID>> {
		&self.paths
	}

	/// The number of Nodes with a finite distance, including the root
	pub fn reached_count(&self) -> usize {
		self.distances.iter().filter(|dist| dist.is_some()).count()
	}

	/// The Path from the root to `id`: the single-step Path `[root]` with Cost 0 if `id` is the
	/// root itself, the recorded Path otherwise, or `None` if `id` was not reached.
	pub fn route_to(&self, id: NodeID) -> Option<Path<NodeID>> {
		if id == self.root {
			Some(Path::new(vec![self.root], Cost::ZERO))
		} else {
			self.path(id).cloned()
		}
	}
}

struct Search<'a> {
	nodes: &'a NodeMap,
	distances: Vec<Option<Cost>>,
	visited: Vec<bool>,
	paths: NodeIDMap<Path<NodeID>>,
}

impl<'a> Search<'a> {
	fn new(nodes: &'a NodeMap, root: NodeID) -> Search<'a> {
		let mut distances = vec![None; nodes.len()];
		distances[root as usize] = Some(Cost::ZERO);
		Search {
			nodes,
			distances,
			visited: vec![false; nodes.len()],
			paths: NodeIDMap::default(),
		}
	}

	/// The unvisited Node with the lowest distance. The first one found wins ties.
	fn select_linear(&self) -> Option<NodeID> {
		let mut best: Option<(usize, Cost)> = None;
		for (id, dist) in self.distances.iter().enumerate() {
			if self.visited[id] {
				continue;
			}
			if let Some(dist) = *dist {
				if best.map_or(true, |(_, best_dist)| dist < best_dist) {
					best = Some((id, dist));
				}
			}
		}
		best.map(|(id, _)| id as NodeID)
	}

	fn visit(
		&mut self,
		current_id: NodeID,
		mut on_improved: impl FnMut(NodeID, Cost),
	) -> Result<(), Error> {
		self.visited[current_id as usize] = true;
		let current_cost = match self.distances[current_id as usize] {
			Some(cost) => cost,
			None => return Ok(()),
		};
		trace!("visiting {} at distance {}", current_id, current_cost);

		let nodes = self.nodes;
		for &(other_id, delta_cost) in nodes.edges(current_id) {
			let other_cost = current_cost
				.checked_add(delta_cost)
				.ok_or(Error::CostOverflow(other_id))?;
			if let Some(prev_cost) = self.distances[other_id as usize] {
				if prev_cost <= other_cost {
					continue;
				}
			}
			self.distances[other_id as usize] = Some(other_cost);

			let path = match self.paths.get(&current_id) {
				Some(prev) => prev.extended(other_id, other_cost),
				None => Path::new(vec![current_id, other_id], other_cost),
			};
			self.paths.insert(other_id, path);

			on_improved(other_id, other_cost);
		}
		Ok(())
	}

	fn run_linear(&mut self) -> Result<(), Error> {
		for _ in 0..self.nodes.len() {
			let Some(current_id) = self.select_linear() else {
				break;
			};
			self.visit(current_id, |_, _| {})?;
		}
		Ok(())
	}

	fn run_heap(&mut self, root: NodeID) -> Result<(), Error> {
		let mut next = BinaryHeap::new();
		next.push(Element(root, Cost::ZERO));

		while let Some(Element(current_id, current_cost)) = next.pop() {
			if self.visited[current_id as usize]
				|| self.distances[current_id as usize] != Some(current_cost)
			{
				continue;
			}
			self.visit(current_id, |other_id, other_cost| {
				next.push(Element(other_id, other_cost))
			})?;
		}
		Ok(())
	}
}

/// Searches the Graph from `config.root` using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// Every round the unvisited Node with the lowest distance is visited (the lowest NodeID among
/// equally cheap Nodes), and its neighbors are relaxed. A neighbor's distance and Path are only
/// replaced by a strictly cheaper one, so among several equally cheap Paths the first one found
/// is kept. The search stops once every reachable Node has been visited.
///
/// Each recorded Path starts at the root and ends at its Node. The root itself never gets a
/// recorded Path.
///
/// ## Examples
/// ```
/// # use grid_dijkstra::{Cost, Grid, SolverConfig, graph::{NodeMap, dijkstra_search}};
/// let grid = Grid::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let nodes = NodeMap::from_grid(&grid);
///
/// let result = dijkstra_search(&nodes, SolverConfig::default()).unwrap();
///
/// let distances: Vec<_> = result.distances().iter().map(|d| d.map(Cost::get)).collect();
/// assert_eq!(distances, vec![Some(0.0), Some(2.0), Some(3.0), Some(6.0)]);
/// assert_eq!(result.path(3).unwrap(), &vec![0, 1, 3]);
/// assert!(result.path(0).is_none());
/// ```
///
/// ## Errors
/// - [`Error::UnknownNode`] if the root is not part of the Graph
/// - [`Error::CostOverflow`] if the Cost of a Path grows too large to be represented
pub fn dijkstra_search(nodes: &NodeMap, config: SolverConfig) -> Result<ShortestPaths, Error> {
	let root = config.root;
	if !nodes.contains(root) {
		return Err(Error::UnknownNode(root));
	}
	let start_time = Instant::now();

	let mut search = Search::new(nodes, root);
	match config.selection {
		Selection::LinearScan => search.run_linear()?,
		Selection::BinaryHeap => search.run_heap(root)?,
	}

	let result = ShortestPaths {
		root,
		distances: search.distances,
		paths: search.paths,
	};
	debug!(
		"searched {} of {} Nodes from {} using {:?} in {:?}",
		result.reached_count(),
		nodes.len(),
		root,
		config.selection,
		start_time.elapsed()
	);
	Ok(result)
}
