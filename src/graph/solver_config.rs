use crate::{NodeID, ROOT};

/// How [`dijkstra_search`](crate::graph::dijkstra_search) picks the next Node to visit.
///
/// Both strategies visit the Nodes in exactly the same order (cheapest first, lowest
/// NodeID among equally cheap ones) and therefore produce identical results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Selection {
	/// Scan all unvisited Nodes every round. `O(n²)`, but without any allocation beyond the
	/// distance table. Fine for small Grids.
	#[default]
	LinearScan,
	/// Keep the candidates in a [`BinaryHeap`](std::collections::BinaryHeap). `O(E log V)`.
	BinaryHeap,
}

/// Options for configuring a search
///
/// Default options:
/// ```
/// # use grid_dijkstra::{SolverConfig, Selection};
/// assert_eq!(
/// 	SolverConfig {
/// 		root: 0,
/// 		selection: Selection::LinearScan,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
	/// The Node every Path starts at (defaults to [`ROOT`])
	///
	/// Any Node can be used, but the Graph never leads back onto [`ROOT`], so with a different
	/// root the top-left Cell becomes unreachable.
	pub root: NodeID,
	/// How the next Node is picked (defaults to [`Selection::LinearScan`])
	pub selection: Selection,
}

impl SolverConfig {
	/// a SolverConfig meant for Grids with many Cells
	///
	/// Values:
	/// ```
	/// # use grid_dijkstra::{SolverConfig, Selection};
	/// assert_eq!(
	/// 	SolverConfig {
	/// 		root: 0,
	/// 		selection: Selection::BinaryHeap,
	/// 	},
	/// 	SolverConfig::LARGE_GRID
	/// );
	/// ```
	pub const LARGE_GRID: SolverConfig = SolverConfig {
		root: ROOT,
		selection: Selection::BinaryHeap,
	};

	/// The default config with a different [`Selection`]
	pub fn with_selection(selection: Selection) -> SolverConfig {
		SolverConfig {
			selection,
			..Default::default()
		}
	}
}

impl Default for SolverConfig {
	fn default() -> SolverConfig {
		SolverConfig {
			root: ROOT,
			selection: Selection::LinearScan,
		}
	}
}
