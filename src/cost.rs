use std::cmp::Ordering;
use std::fmt;

/// The Cost of stepping onto a Cell, or of walking a whole Path.
///
/// A Cost is always a finite, non-negative number, which makes it totally ordered:
/// ```
/// # use grid_dijkstra::Cost;
/// assert!(Cost::new(1.5).unwrap() < Cost::from(2u32));
/// assert_eq!(Cost::new(-0.0), Some(Cost::ZERO));
///
/// assert_eq!(Cost::new(-1.0), None);
/// assert_eq!(Cost::new(f64::NAN), None);
/// assert_eq!(Cost::new(f64::INFINITY), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cost(f64);

impl Cost {
	/// Nothing to pay
	pub const ZERO: Cost = Cost(0.0);

	/// `None` if `value` is negative, NaN or infinite
	pub fn new(value: f64) -> Option<Cost> {
		if value.is_finite() && value >= 0.0 {
			// turns -0.0 into 0.0
			Some(Cost(value + 0.0))
		} else {
			None
		}
	}

	/// The raw value
	pub fn get(self) -> f64 {
		self.0
	}

	/// `self + rhs`, or `None` if the sum is too large to be represented
	pub fn checked_add(self, rhs: Cost) -> Option<Cost> {
		Cost::new(self.0 + rhs.0)
	}
}

impl From<u32> for Cost {
	fn from(value: u32) -> Cost {
		Cost(f64::from(value))
	}
}

impl From<Cost> for f64 {
	fn from(cost: Cost) -> f64 {
		cost.0
	}
}

impl Eq for Cost {}

impl Ord for Cost {
	fn cmp(&self, rhs: &Cost) -> Ordering {
		self.0.total_cmp(&rhs.0)
	}
}

impl PartialOrd for Cost {
	fn partial_cmp(&self, rhs: &Cost) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}

impl fmt::Display for Cost {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
