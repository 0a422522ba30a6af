use crate::error::YardLineError;
use crate::schema::{Side, Teams};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest legal field position (one yard off the possessing team's own goal line).
pub const OWN_GOAL_LINE: i32 = 1;
/// Opponent goal line. Reaching it is a touchdown.
pub const OPPONENT_GOAL_LINE: i32 = 100;
pub const MIDFIELD: i32 = 50;

/// A yard line as printed in play text: `UWL31`, `CMU 9`, or a bare `50`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YardLine {
	pub team: Option<String>,
	pub line: u8,
}

impl YardLine {
	pub fn new(team: Option<String>, line: u8) -> Result<Self, YardLineError> {
		if line > 50 {
			return Err(YardLineError::OutOfRange { line });
		}
		Ok(Self { team, line })
	}

	/// Converts to the 1-100 scale of `possession`. `None` when the team
	/// abbreviation belongs to neither side.
	///
	/// No clamping: a printed `UWL0` yields 0 and is left for the validator.
	pub fn to_field_position(&self, possession: Side, teams: &Teams) -> Option<i32> {
		let line = i32::from(self.line);
		match &self.team {
			None if line == MIDFIELD => Some(MIDFIELD),
			None => None,
			Some(abbreviation) => {
				let side = teams.side_of(abbreviation)?;
				if side == possession {
					Some(line)
				} else {
					Some(OPPONENT_GOAL_LINE - line)
				}
			}
		}
	}
}

impl fmt::Display for YardLine {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.team {
			Some(team) => write!(f, "{}{:02}", team, self.line),
			None => write!(f, "{}", self.line),
		}
	}
}

impl FromStr for YardLine {
	type Err = YardLineError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let compact: String = s.split_whitespace().collect();
		let split_at = compact.find(|c: char| c.is_ascii_digit()).ok_or_else(|| YardLineError::InvalidFormat(s.to_string()))?;
		let (team, digits) = compact.split_at(split_at);

		if !team.chars().all(|c| c.is_ascii_alphabetic()) {
			return Err(YardLineError::InvalidFormat(s.to_string()));
		}

		let line = digits.parse::<u8>().map_err(|_| YardLineError::InvalidFormat(s.to_string()))?;
		let team = (!team.is_empty()).then(|| team.to_uppercase());
		YardLine::new(team, line)
	}
}

/// The same spot seen from the other team, kept inside the field of play.
pub fn flip(field_position: i32) -> i32 {
	(OPPONENT_GOAL_LINE - field_position).clamp(OWN_GOAL_LINE, OPPONENT_GOAL_LINE - 1)
}
