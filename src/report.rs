use crate::{Cost, Grid, NodeID, Path, Point};

use std::fmt;

/// The printable outcome of a search: the Path as Points, its Cost, and a picture of the Grid
/// with the Path drawn on it.
///
/// ```
/// # use grid_dijkstra::{find_route, Grid, Report, SolverConfig};
/// let grid = Grid::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let route = find_route(&grid, (1, 1), SolverConfig::default()).unwrap();
///
/// let report = Report::new(&grid, &route);
/// assert_eq!(
/// 	report.to_string(),
/// 	"Path: (0, 0) -> (1, 0) -> (1, 1)\nCost: 6\nxx\nox\n"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
	path: Path<Point>,
	picture: Vec<String>,
}

impl Report {
	/// Marks a Cell on the Path
	pub const PATH: char = 'x';
	/// Marks every other Cell
	pub const EMPTY: char = 'o';

	/// Draws `route` onto an empty copy of `grid`
	///
	/// ## Panics
	/// If a step of `route` is not a Node of `grid`
	#[track_caller]
	pub fn new(grid: &Grid, route: &Path<NodeID>) -> Report {
		let path = route.map(|&id| grid.coordinate_of(id));

		let mut picture = vec![vec![Report::EMPTY; grid.width()]; grid.height()];
		for &(x, y) in path.iter() {
			picture[y][x] = Report::PATH;
		}

		Report {
			path,
			picture: picture.into_iter().map(String::from_iter).collect(),
		}
	}

	/// The Points of the Path, from the root to the target
	pub fn path(&self) -> &Path<Point> {
		&self.path
	}

	/// The total Cost of the Path
	pub fn cost(&self) -> Cost {
		self.path.cost()
	}

	/// One String per row of the Grid
	pub fn picture(&self) -> &[String] {
		&self.picture
	}
}

impl fmt::Display for Report {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Path: ")?;
		for (i, (x, y)) in self.path.iter().enumerate() {
			if i > 0 {
				write!(f, " -> ")?;
			}
			write!(f, "({}, {})", x, y)?;
		}
		writeln!(f)?;
		writeln!(f, "Cost: {}", self.cost())?;
		for row in self.picture.iter() {
			writeln!(f, "{}", row)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn draws_the_path() {
		let grid = Grid::new(vec![vec![1, 1, 9], vec![9, 1, 9], vec![9, 1, 1]]).unwrap();
		let route = Path::new(vec![0, 1, 4, 7, 8], Cost::from(4u32));
		let report = Report::new(&grid, &route);

		assert_eq!(report.picture(), &["xxo", "oxo", "oxx"]);
		assert_eq!(report.path(), &vec![(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)]);
		assert_eq!(report.cost(), Cost::from(4u32));
	}

	#[test]
	fn root_only() {
		let grid = Grid::new(vec![vec![3, 3, 3]]).unwrap();
		let report = Report::new(&grid, &Path::new(vec![0], Cost::ZERO));

		assert_eq!(report.to_string(), "Path: (0, 0)\nCost: 0\nxoo\n");
	}

	#[test]
	fn fractional_cost() {
		let grid = Grid::new(vec![vec![0.5, 1.25]]).unwrap();
		let report = Report::new(&grid, &Path::new(vec![0, 1], Cost::new(1.25).unwrap()));

		assert_eq!(report.to_string(), "Path: (0, 0) -> (1, 0)\nCost: 1.25\nxx\n");
	}

	#[test]
	#[should_panic]
	fn step_outside_the_grid() {
		let grid = Grid::new(vec![vec![1, 1], vec![1, 1]]).unwrap();
		Report::new(&grid, &Path::new(vec![0, 1, 4], Cost::from(2u32)));
	}
}
