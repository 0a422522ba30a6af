//! Pure token matchers over a single line of play text.
//!
//! Every matcher returns the normalized value together with the byte span it
//! was read from, or `None`. Malformed input never panics or errors.

mod clock;
mod down_distance;
mod markers;
mod names;
mod yardage;

pub use clock::{clock, clock_quarter, CLOCK_MARKER};
pub use down_distance::down_and_distance;
pub use markers::{kick_result, penalty, recovered_by, Marker};
pub use names::{formation, leading_actor, player_names};
pub use yardage::{kick_distance, return_yards, spot_after, yards};

use std::ops::Range;

/// A normalized token and where it sits in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<T> {
	pub value: T,
	pub start: usize,
	pub end: usize,
}

impl<T> Match<T> {
	pub fn new(value: T, start: usize, end: usize) -> Self {
		Self { value, start, end }
	}

	pub fn span(&self) -> Range<usize> {
		self.start..self.end
	}
}

impl<T> From<(T, regex::Match<'_>)> for Match<T> {
	fn from((value, m): (T, regex::Match<'_>)) -> Self {
		Match::new(value, m.start(), m.end())
	}
}
