use crate::{neighbors::ManhattanNeighborhood, Cost, Error, NodeID, Point};

/// A rectangular Grid of traversal Costs.
///
/// A Grid can only be created through [`Grid::new`], which guarantees that it has at least one
/// Cell, that all rows have the same length and that every Cost is a finite, non-negative number.
///
/// ```
/// # use grid_dijkstra::{Cost, Grid, Error};
/// let grid = Grid::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(grid.size(), (3, 2));
/// assert_eq!(grid.cost_at((2, 1)), Some(Cost::from(6u32)));
///
/// let grid = Grid::new(vec![vec![0.5, 1.25]]).unwrap();
/// assert_eq!(grid.cost_at((1, 0)), Cost::new(1.25));
///
/// assert!(matches!(
/// 	Grid::new(vec![vec![1, 2], vec![3]]),
/// 	Err(Error::InvalidGridShape { row: 1, found: 1, expected: 2 })
/// ));
/// assert!(matches!(
/// 	Grid::new(vec![vec![1.0, -2.0]]),
/// 	Err(Error::InvalidCost { point: (1, 0), .. })
/// ));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
	width: usize,
	height: usize,
	costs: Vec<Cost>,
}

impl Grid {
	/// Validates `rows` and flattens them into a Grid
	pub fn new<T: Into<f64>>(rows: Vec<Vec<T>>) -> Result<Grid, Error> {
		let width = rows.first().map_or(0, Vec::len);
		if width == 0 {
			return Err(Error::EmptyGrid);
		}
		if let Some((row, found)) = rows
			.iter()
			.map(Vec::len)
			.enumerate()
			.find(|&(_, len)| len != width)
		{
			return Err(Error::InvalidGridShape {
				row,
				found,
				expected: width,
			});
		}
		let height = rows.len();
		let cells = width * height;
		if cells - 1 > NodeID::MAX as usize {
			return Err(Error::GridTooLarge(cells));
		}

		let costs = rows
			.into_iter()
			.flatten()
			.enumerate()
			.map(|(i, value)| {
				let value = value.into();
				Cost::new(value).ok_or(Error::InvalidCost {
					point: (i % width, i / width),
					value,
				})
			})
			.collect::<Result<_, _>>()?;

		Ok(Grid {
			width,
			height,
			costs,
		})
	}

	/// The number of columns
	pub fn width(&self) -> usize {
		self.width
	}
	/// The number of rows
	pub fn height(&self) -> usize {
		self.height
	}
	/// `(width, height)`
	pub fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}
	/// The number of Cells, which is also the number of Nodes in the derived Graph
	pub fn node_count(&self) -> usize {
		self.costs.len()
	}

	/// The 4-connected Neighborhood matching the size of this Grid
	pub fn neighborhood(&self) -> ManhattanNeighborhood {
		ManhattanNeighborhood::new(self.width, self.height)
	}

	/// The Point of a Node. See [`ManhattanNeighborhood::coordinate_of`]
	pub fn coordinate_of(&self, id: NodeID) -> Point {
		self.neighborhood().coordinate_of(id)
	}

	/// The Node at a Point, or `None` if the Point is outside of the Grid
	pub fn index_of(&self, point: Point) -> Option<NodeID> {
		self.neighborhood().index_of(point)
	}

	/// The Cost of entering a Node
	///
	/// ## Panics
	/// if `id` is not part of the Grid
	pub fn cost(&self, id: NodeID) -> Cost {
		self.costs[id as usize]
	}

	/// The Cost of entering the Cell at `point`
	pub fn cost_at(&self, point: Point) -> Option<Cost> {
		self.index_of(point).map(|id| self.cost(id))
	}

	/// Iterates over the rows from top to bottom
	pub fn rows(&self) -> impl Iterator<Item = &[Cost]> + '_ {
		self.costs.chunks(self.width)
	}
}

impl<T: Into<f64>> TryFrom<Vec<Vec<T>>> for Grid {
	type Error = Error;

	fn try_from(rows: Vec<Vec<T>>) -> Result<Grid, Error> {
		Grid::new(rows)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_empty() {
		assert!(matches!(Grid::new(Vec::<Vec<f64>>::new()), Err(Error::EmptyGrid)));
		assert!(matches!(
			Grid::new(vec![Vec::<f64>::new(), vec![]]),
			Err(Error::EmptyGrid)
		));
	}

	#[test]
	fn rejects_jagged() {
		let result = Grid::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9, 10]]);
		assert!(matches!(
			result,
			Err(Error::InvalidGridShape {
				row: 2,
				found: 4,
				expected: 3
			})
		));
	}

	#[test]
	fn row_major_layout() {
		let grid = Grid::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
		assert_eq!(grid.node_count(), 6);
		assert_eq!(grid.coordinate_of(0), (0, 0));
		assert_eq!(grid.coordinate_of(2), (2, 0));
		assert_eq!(grid.coordinate_of(3), (0, 1));
		assert_eq!(grid.index_of((1, 1)), Some(4));
		assert_eq!(grid.index_of((3, 0)), None);
		assert_eq!(grid.cost(4), Cost::from(5u32));
		assert_eq!(grid.cost_at((0, 2)), None);

		let rows: Vec<Vec<f64>> = grid
			.rows()
			.map(|row| row.iter().map(|c| c.get()).collect())
			.collect();
		assert_eq!(rows, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
	}

	#[test]
	fn fractional_costs() {
		let grid = Grid::new(vec![vec![1.5, 2.25], vec![0.0, 4.5]]).unwrap();
		assert_eq!(grid.cost_at((1, 0)).map(Cost::get), Some(2.25));
		assert_eq!(grid.cost_at((0, 1)), Some(Cost::ZERO));
	}

	#[test]
	fn rejects_invalid_costs() {
		for (value, point) in [(-1.0, (1, 1)), (f64::NAN, (1, 1)), (f64::INFINITY, (1, 1))] {
			let result = Grid::new(vec![vec![1.0, 2.0], vec![3.0, value]]);
			match result {
				Err(Error::InvalidCost { point: found, .. }) => assert_eq!(found, point),
				other => panic!("expected InvalidCost, got {:?}", other),
			}
		}
		let result = Grid::new(vec![vec![f64::NEG_INFINITY, 2.0]]);
		assert!(matches!(result, Err(Error::InvalidCost { point: (0, 0), .. })));
	}

	#[test]
	fn index_round_trip() {
		let grid = Grid::new(vec![vec![0; 7]; 5]).unwrap();
		for id in 0..grid.node_count() as NodeID {
			assert_eq!(grid.index_of(grid.coordinate_of(id)), Some(id));
		}
	}
}
