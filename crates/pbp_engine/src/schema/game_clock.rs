use crate::error::QuarterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of one regulation period in seconds.
pub const PERIOD_SECONDS: u16 = 15 * 60;

/// Period of play. 1-4 are regulation quarters, 5 and up are overtime periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quarter(pub(crate) u8);

impl Quarter {
	pub const FIRST: Quarter = Quarter(1);
	pub const SECOND: Quarter = Quarter(2);
	pub const THIRD: Quarter = Quarter(3);
	pub const FOURTH: Quarter = Quarter(4);
	pub const FIRST_OVERTIME: Quarter = Quarter(5);

	pub fn new(number: u8) -> Result<Self, QuarterError> {
		if number == 0 {
			Err(QuarterError::invalid_quarter_error("0"))
		} else {
			Ok(Quarter(number))
		}
	}

	pub fn number(self) -> u8 {
		self.0
	}

	pub fn is_overtime(self) -> bool {
		self.0 >= 5
	}

	/// Regulation half (1 or 2); overtime periods report 3.
	pub fn half(self) -> u8 {
		match self.0 {
			0..=2 => 1,
			3 | 4 => 2,
			_ => 3,
		}
	}

	pub fn next(self) -> Self {
		Quarter(self.0.saturating_add(1))
	}
}

impl Default for Quarter {
	fn default() -> Self {
		Quarter::FIRST
	}
}

impl fmt::Display for Quarter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			1 => write!(f, "1st"),
			2 => write!(f, "2nd"),
			3 => write!(f, "3rd"),
			4 => write!(f, "4th"),
			5 => write!(f, "OT"),
			n => write!(f, "{}OT", n - 4),
		}
	}
}

impl FromStr for Quarter {
	type Err = QuarterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s.trim().to_lowercase();
		match normalized.as_str() {
			"1st" | "first" | "1" => Ok(Quarter::FIRST),
			"2nd" | "second" | "2" => Ok(Quarter::SECOND),
			"3rd" | "third" | "3" => Ok(Quarter::THIRD),
			"4th" | "fourth" | "4" => Ok(Quarter::FOURTH),
			"ot" | "overtime" => Ok(Quarter::FIRST_OVERTIME),
			other => {
				// "2OT", "3OT", ...
				let count = other
					.strip_suffix("ot")
					.and_then(|n| n.parse::<u8>().ok())
					.filter(|n| *n >= 1)
					.ok_or_else(|| QuarterError::invalid_quarter_error(s))?;
				Ok(Quarter(count.saturating_add(4)))
			}
		}
	}
}

/// Game clock normalized to seconds remaining in the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameClock(u16);

impl GameClock {
	/// No range check; the validator reports clocks beyond a full period.
	pub fn from_seconds(seconds_remaining: u16) -> Self {
		GameClock(seconds_remaining)
	}

	pub fn seconds_remaining(self) -> u16 {
		self.0
	}

	pub fn minutes(self) -> u16 {
		self.0 / 60
	}

	pub fn seconds(self) -> u16 {
		self.0 % 60
	}

	pub fn is_within_period(self) -> bool {
		self.0 <= PERIOD_SECONDS
	}
}

impl fmt::Display for GameClock {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:02}:{:02}", self.minutes(), self.seconds())
	}
}
