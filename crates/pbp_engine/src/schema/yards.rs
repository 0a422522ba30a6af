use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed yardage. Range checking is left to the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Yards(pub i32);

impl Yards {
	/// Realistic bound for a single play; anything outside is flagged.
	pub const MAX_ABS: i32 = 99;

	pub fn value(self) -> i32 {
		self.0
	}

	pub fn is_realistic(self) -> bool {
		(-Self::MAX_ABS..=Self::MAX_ABS).contains(&self.0)
	}
}

impl From<i32> for Yards {
	fn from(value: i32) -> Self {
		Yards(value)
	}
}

impl fmt::Display for Yards {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.0 == 0 {
			write!(f, "no gain")
		} else {
			write!(f, "{} yards", self.0)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_realistic_range() {
		assert!(Yards(99).is_realistic());
		assert!(Yards(-99).is_realistic());
		assert!(!Yards(100).is_realistic());
		assert!(!Yards(-100).is_realistic());
	}

	#[test]
	fn test_display() {
		assert_eq!(Yards(0).to_string(), "no gain");
		assert_eq!(Yards(-3).to_string(), "-3 yards");
	}
}
