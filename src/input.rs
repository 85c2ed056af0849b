use crate::{Error, Grid, Point};

use serde::Deserialize;
use std::{fs::File, io::BufReader, io::Read, path::Path, str::FromStr};

/// The content of an input file:
/// ```json
/// { "board": [[1, 2], [3, 4]], "target": [1, 1] }
/// ```
/// `target` is `[x, y]`, i.e. column first. Costs may have fractions. Unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Input {
	/// the rows of the Grid, checked by [`into_parts`](Input::into_parts)
	pub board: Vec<Vec<f64>>,
	/// the Cell the Path should lead to
	pub target: Point,
}

impl Input {
	/// Reads an Input from a JSON file
	pub fn read(path: impl AsRef<Path>) -> Result<Input, Error> {
		let file = File::open(path)?;
		Input::from_reader(BufReader::new(file))
	}

	/// Reads an Input from any JSON source
	pub fn from_reader<R: Read>(reader: R) -> Result<Input, Error> {
		Ok(serde_json::from_reader(reader)?)
	}

	/// Validates the board
	///
	/// ## Errors
	/// Everything [`Grid::new`] rejects
	pub fn into_parts(self) -> Result<(Grid, Point), Error> {
		Ok((Grid::new(self.board)?, self.target))
	}
}

impl FromStr for Input {
	type Err = Error;

	fn from_str(s: &str) -> Result<Input, Error> {
		Ok(serde_json::from_str(s)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Cost;

	#[test]
	fn parse() {
		let input: Input = r#"{ "board": [[1, 2], [3, 4]], "target": [1, 0], "comment": "ok" }"#
			.parse()
			.unwrap();
		assert_eq!(input.board, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
		assert_eq!(input.target, (1, 0));

		let (grid, target) = input.into_parts().unwrap();
		assert_eq!(grid.size(), (2, 2));
		assert_eq!(grid.cost_at(target), Cost::new(2.0));
	}

	#[test]
	fn fractional_board() {
		let input: Input = r#"{ "board": [[1.5, 2.25], [3.0, 4.5]], "target": [1, 1] }"#
			.parse()
			.unwrap();
		let (grid, target) = input.into_parts().unwrap();
		assert_eq!(grid.cost_at(target), Cost::new(4.5));
		assert_eq!(grid.cost_at((1, 0)), Cost::new(2.25));
	}

	#[test]
	fn negative_cost_is_rejected() {
		let input: Input = r#"{ "board": [[1, -2]], "target": [1, 0] }"#.parse().unwrap();
		assert!(matches!(
			input.into_parts(),
			Err(Error::InvalidCost {
				point: (1, 0),
				..
			})
		));
	}

	#[test]
	fn non_numeric_cost_is_rejected() {
		let result = r#"{ "board": [[1, "x"]], "target": [1, 0] }"#.parse::<Input>();
		assert!(matches!(result, Err(Error::Parse(_))));
	}

	#[test]
	fn missing_target_is_rejected() {
		let result = r#"{ "board": [[1, 2]] }"#.parse::<Input>();
		assert!(matches!(result, Err(Error::Parse(_))));
	}

	#[test]
	fn jagged_board_is_rejected() {
		let input: Input = r#"{ "board": [[1, 2], [3]], "target": [0, 0] }"#.parse().unwrap();
		assert!(matches!(
			input.into_parts(),
			Err(Error::InvalidGridShape { row: 1, .. })
		));
	}

	#[test]
	fn missing_file() {
		let result = Input::read("does/not/exist.json");
		assert!(matches!(result, Err(Error::Io(_))));
	}

	#[test]
	fn from_reader() {
		let json = br#"{ "board": [[5]], "target": [0, 0] }"#;
		let input = Input::from_reader(&json[..]).unwrap();
		assert_eq!(input.board, vec![vec![5.0]]);
	}
}
