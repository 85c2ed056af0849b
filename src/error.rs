use crate::{NodeID, Point};
use std::{error, fmt, io};

/// Everything that can go wrong between reading the input and finding a Route
#[derive(Debug)]
pub enum Error {
	/// The input file could not be read
	Io(io::Error),
	/// The input is not a valid `{ "board": [[..]], "target": [x, y] }` record
	Parse(serde_json::Error),
	/// The Grid has no rows, or its rows have no cells
	EmptyGrid,
	/// A row of the Grid has a different length than the first row
	InvalidGridShape {
		/// index of the offending row
		row: usize,
		/// length of that row
		found: usize,
		/// length of the first row
		expected: usize,
	},
	/// The Grid has more cells than a [`NodeID`] can address
	GridTooLarge(usize),
	/// A Cell's Cost is negative, NaN or infinite
	InvalidCost {
		/// position of the Cell
		point: Point,
		/// the rejected value
		value: f64,
	},
	/// The Cost of a Path to the Node is too large to be represented
	CostOverflow(NodeID),
	/// The Point lies outside of the Grid
	UnknownCoordinate(Point),
	/// The NodeID does not belong to the Graph
	UnknownNode(NodeID),
	/// No Path from the root reaches the Point
	UnreachableTarget(Point),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::Io(e) => write!(f, "Failed to read input: {}", e),
			Error::Parse(e) => write!(f, "Failed to parse input: {}", e),
			Error::EmptyGrid => write!(f, "Grid has no cells"),
			Error::InvalidGridShape {
				row,
				found,
				expected,
			} => write!(
				f,
				"Found inconsistent column number({}) in row {}, expect {} columns according to the first row",
				found, row, expected
			),
			Error::GridTooLarge(cells) => write!(
				f,
				"Grid has {} cells, at most {} are supported",
				cells,
				NodeID::MAX as u64 + 1
			),
			Error::InvalidCost {
				point: (x, y),
				value,
			} => write!(
				f,
				"Cell ({}, {}) has invalid cost {}, expect a finite non-negative number",
				x, y, value
			),
			Error::CostOverflow(id) => {
				write!(f, "Cost of the Path to Node {} is too large to be represented", id)
			}
			Error::UnknownCoordinate((x, y)) => {
				write!(f, "Coordinate ({}, {}) is outside of the Grid", x, y)
			}
			Error::UnknownNode(id) => write!(f, "Node {} is not part of the Graph", id),
			Error::UnreachableTarget((x, y)) => {
				write!(f, "No Path reaches the target ({}, {})", x, y)
			}
		}
	}
}

impl error::Error for Error {
	fn source(&self) -> Option<&(dyn error::Error + 'static)> {
		match self {
			Error::Io(e) => Some(e),
			Error::Parse(e) => Some(e),
			_ => None,
		}
	}
}

impl From<io::Error> for Error {
	fn from(e: io::Error) -> Error {
		Error::Io(e)
	}
}

impl From<serde_json::Error> for Error {
	fn from(e: serde_json::Error) -> Error {
		Error::Parse(e)
	}
}
