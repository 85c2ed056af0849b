use crate::Cost;

use std::sync::Arc;

/// A Path between two Nodes, together with the Cost of walking it.
///
/// The steps are stored in an immutable shared slice: cloning a Path is cheap, and
/// [`extended`](Path::extended) always builds a fresh sequence instead of touching the
/// original, so two Paths never observe each other's changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
	path: Arc<[P]>,
	cost: Cost,
}

impl<P> Path<P> {
	/// Creates a Path from its steps and total Cost
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path {
			path: path.into(),
			cost,
		}
	}

	/// The total Cost of the Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// The number of steps, including both ends
	pub fn len(&self) -> usize {
		self.path.len()
	}

	/// `true` if the Path has no steps
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// The first step
	pub fn first(&self) -> Option<&P> {
		self.path.first()
	}

	/// The last step
	pub fn last(&self) -> Option<&P> {
		self.path.last()
	}

	/// The steps as a slice
	pub fn as_slice(&self) -> &[P] {
		&self.path
	}

	/// Returns an Iterator over the Path
	pub fn iter(&self) -> std::slice::Iter<'_, P> {
		self.path.iter()
	}

	/// A new Path that walks this one and then steps onto `next`, with a total Cost of `cost`
	pub fn extended(&self, next: P, cost: Cost) -> Path<P>
	where
		P: Clone,
	{
		let mut steps = Vec::with_capacity(self.path.len() + 1);
		steps.extend_from_slice(&self.path);
		steps.push(next);
		Path::new(steps, cost)
	}

	/// Converts every step, keeping the Cost
	pub fn map<Q>(&self, f: impl FnMut(&P) -> Q) -> Path<Q> {
		Path::new(self.path.iter().map(f).collect(), self.cost)
	}
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.path[index]
	}
}

impl<'a, P> IntoIterator for &'a Path<P> {
	type Item = &'a P;
	type IntoIter = std::slice::Iter<'a, P>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
	fn eq(&self, rhs: &Vec<P>) -> bool {
		*self.path == **rhs
	}
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
	fn eq(&self, rhs: &&'a [P]) -> bool {
		*self.path == **rhs
	}
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {}", p)?;
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Path;
	use crate::Cost;

	#[test]
	fn index() {
		let path = Path::new(vec![4, 2, 0], Cost::from(42u32));

		assert_eq!(path[0], 4);
		assert_eq!(path[1], 2);
		assert_eq!(path[2], 0);
	}

	#[test]
	fn extended_leaves_original_untouched() {
		let path = Path::new(vec![0, 1], Cost::from(3u32));
		let longer = path.extended(4, Cost::from(7u32));
		let other = path.extended(2, Cost::new(5.5).unwrap());

		assert_eq!(path, vec![0, 1]);
		assert_eq!(path.cost(), Cost::from(3u32));
		assert_eq!(longer, vec![0, 1, 4]);
		assert_eq!(longer.cost(), Cost::from(7u32));
		assert_eq!(other.cost().get(), 5.5);
		assert_eq!(other, vec![0, 1, 2]);
	}

	#[test]
	fn map_keeps_cost() {
		let path = Path::new(vec![1, 2, 3], Cost::from(9u32));
		let doubled = path.map(|&step| step * 2);
		assert_eq!(doubled, vec![2, 4, 6]);
		assert_eq!(doubled.cost(), path.cost());
	}

	#[test]
	fn display() {
		let path = Path::new(vec![4, 2, 0], Cost::from(42u32));
		assert_eq!(&format!("{}", path), "Path[Cost = 42]: 4 -> 2 -> 0");

		let path = Path::new(vec![4, 2], Cost::new(1.25).unwrap());
		assert_eq!(&format!("{}", path), "Path[Cost = 1.25]: 4 -> 2");
	}

	#[test]
	fn display_empty() {
		let path = Path::new(Vec::<i32>::new(), Cost::ZERO);

		assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
	}
}
