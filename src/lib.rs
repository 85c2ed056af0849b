#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find the cheapest Path across a weighted Grid.
//!
//! ## Introduction
//! Every Cell of the Grid has a [`Cost`], which has to be paid for stepping onto it. Costs can
//! be any finite, non-negative number, fractions included. Starting at
//! the top-left Cell, this crate finds the cheapest way to reach any other Cell by moving
//! up, down, left or right, and can draw the result onto the Grid.
//!
//! The Grid is first turned into a Graph with one Node per Cell, numbered row by row
//! (`id = y * width + x`). Each Node has an edge to each of its 4 neighbors that costs as much
//! as the neighbor's Cell. The top-left Cell is the [`ROOT`]: it is where every search starts,
//! and no edge ever leads back onto it.
//!
//! A [Dijkstra search](graph::dijkstra_search) over that Graph then yields the Cost of every
//! reachable Node together with one cheapest Path to it. Between equally cheap Paths, the one
//! going through lower NodeIDs first is kept, so results are deterministic.
//!
//! ## Examples
//! Finding a Route:
//! ```
//! use grid_dijkstra::{find_route, Cost, Grid, SolverConfig};
//!
//! let grid = Grid::new(vec![
//!     vec![1, 1, 9],
//!     vec![9, 1, 9],
//!     vec![9, 1, 1],
//! ]).unwrap();
//!
//! let route = find_route(&grid, (2, 2), SolverConfig::default()).unwrap();
//!
//! assert_eq!(route.cost(), Cost::from(4u32));
//! assert_eq!(route, vec![0, 1, 4, 7, 8]);
//! ```
//! Note that the Cost of the root Cell is never paid, since Paths only pay for the Cells they
//! step onto.
//!
//! Drawing it:
//! ```
//! # use grid_dijkstra::{find_route, Grid, SolverConfig};
//! use grid_dijkstra::Report;
//! #
//! # let grid = Grid::new(vec![
//! #     vec![1, 1, 9],
//! #     vec![9, 1, 9],
//! #     vec![9, 1, 1],
//! # ]).unwrap();
//! #
//! # let route = find_route(&grid, (2, 2), SolverConfig::default()).unwrap();
//! let report = Report::new(&grid, &route);
//!
//! assert_eq!(report.picture(), &["xxo", "oxo", "oxx"]);
//! ```
//!
//! ### Reusing a search
//! [`find_route`] builds the Graph and searches it for a single target. To look up several
//! targets, keep the [`ShortestPaths`](graph::ShortestPaths):
//! ```
//! use grid_dijkstra::{Cost, Grid, SolverConfig, graph::{NodeMap, dijkstra_search}};
//!
//! let grid = Grid::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! let nodes = NodeMap::from_grid(&grid);
//! let result = dijkstra_search(&nodes, SolverConfig::default()).unwrap();
//!
//! assert_eq!(result.distance(3).map(Cost::get), Some(6.0));
//! assert_eq!(result.route_to(0).unwrap(), vec![0]);
//! ```
//!
//! ### Configuration
//! The [`SolverConfig`] chooses the root and how the next Node is picked. Large Grids should
//! use [`SolverConfig::LARGE_GRID`], which keeps the candidates in a BinaryHeap instead of
//! scanning all Nodes every round. Both produce identical results.

/// The Type used to reference a Node in the Graph
pub type NodeID = u32;

/// A shorthand for Points on the grid: `(x, y)`, i.e. `(column, row)`
pub type Point = (usize, usize);

/// The Node every search starts at by default: the top-left Cell.
///
/// No edge of the Graph leads onto this Node.
pub const ROOT: NodeID = 0;

mod cost;
pub use self::cost::Cost;

mod error;
pub use self::error::Error;

mod grid;
pub use self::grid::Grid;

mod input;
pub use self::input::Input;

mod path;
pub use self::path::Path;

mod report;
pub use self::report::Report;

pub mod graph;
pub use self::graph::{Selection, SolverConfig};

pub mod neighbors;

use log::debug;

/// Builds the Graph of `grid`, searches it and returns the cheapest Path to `target`.
///
/// The returned Path starts at the root and ends at `target`. If `target` is the root, the
/// Path consists of the root alone and costs nothing.
///
/// ## Errors
/// - [`Error::UnknownCoordinate`] if `target` is outside of `grid`
/// - [`Error::UnknownNode`] if `config.root` is outside of `grid`
/// - [`Error::CostOverflow`] if a Path Cost grows too large to be represented
/// - [`Error::UnreachableTarget`] if no Path leads to `target`
pub fn find_route(grid: &Grid, target: Point, config: SolverConfig) -> Result<Path<NodeID>, Error> {
	let target_id = grid
		.index_of(target)
		.ok_or(Error::UnknownCoordinate(target))?;

	let nodes = graph::NodeMap::from_grid(grid);
	let result = graph::dijkstra_search(&nodes, config)?;

	let route = result
		.route_to(target_id)
		.ok_or(Error::UnreachableTarget(target))?;
	debug!(
		"route to {:?} has {} steps and costs {}",
		target,
		route.len(),
		route.cost()
	);
	Ok(route)
}

/// The commonly used types
pub mod prelude {
	pub use crate::{
		find_route,
		graph::{dijkstra_search, NodeMap, Selection, ShortestPaths, SolverConfig},
		neighbors::{ManhattanNeighborhood, Neighborhood},
		Cost, Error, Grid, Input, NodeID, Path, Point, Report, ROOT,
	};
}
