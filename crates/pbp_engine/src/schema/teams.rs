use crate::error::TeamError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two teams in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
	Away,
	Home,
}

impl Side {
	pub fn opponent(self) -> Self {
		match self {
			Side::Away => Side::Home,
			Side::Home => Side::Away,
		}
	}
}

impl fmt::Display for Side {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Side::Away => write!(f, "away"),
			Side::Home => write!(f, "home"),
		}
	}
}

impl FromStr for Side {
	type Err = TeamError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"away" | "visitor" | "visitors" => Ok(Side::Away),
			"home" => Ok(Side::Home),
			_ => Err(TeamError::InvalidSide(s.to_string())),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
	/// Abbreviation used in yard-line references, e.g. `UWL` in `at UWL31`.
	pub abbreviation: String,
	pub name: String,
}

impl TeamInfo {
	pub fn new(abbreviation: impl Into<String>, name: impl Into<String>) -> Result<Self, TeamError> {
		let abbreviation = abbreviation.into().trim().to_uppercase();
		if abbreviation.is_empty() {
			return Err(TeamError::EmptyAbbreviation);
		}
		Ok(Self { abbreviation, name: name.into() })
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
	pub away: TeamInfo,
	pub home: TeamInfo,
}

impl Teams {
	pub fn new(away: TeamInfo, home: TeamInfo) -> Self {
		Self { away, home }
	}

	pub fn get(&self, side: Side) -> &TeamInfo {
		match side {
			Side::Away => &self.away,
			Side::Home => &self.home,
		}
	}

	pub fn abbreviation(&self, side: Side) -> &str {
		&self.get(side).abbreviation
	}

	/// Resolves an abbreviation (case-insensitive) to its side.
	pub fn side_of(&self, abbreviation: &str) -> Option<Side> {
		if self.away.abbreviation.eq_ignore_ascii_case(abbreviation) {
			Some(Side::Away)
		} else if self.home.abbreviation.eq_ignore_ascii_case(abbreviation) {
			Some(Side::Home)
		} else {
			None
		}
	}
}

impl Default for Teams {
	fn default() -> Self {
		Self {
			away: TeamInfo {
				abbreviation: "AWAY".to_string(),
				name: "Away".to_string(),
			},
			home: TeamInfo {
				abbreviation: "HOME".to_string(),
				name: "Home".to_string(),
			},
		}
	}
}

/// Running score for both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
	pub away: u16,
	pub home: u16,
}

impl Score {
	pub fn new(away: u16, home: u16) -> Self {
		Self { away, home }
	}

	pub fn of(&self, side: Side) -> u16 {
		match side {
			Side::Away => self.away,
			Side::Home => self.home,
		}
	}

	pub fn add(&mut self, side: Side, points: u16) {
		match side {
			Side::Away => self.away = self.away.saturating_add(points),
			Side::Home => self.home = self.home.saturating_add(points),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn teams() -> Teams {
		Teams::new(TeamInfo::new("uwl", "Wis.-La Crosse").unwrap(), TeamInfo::new("CMU", "Carnegie Mellon").unwrap())
	}

	#[test]
	fn test_side_from_str() {
		assert_eq!(Side::from_str("away"), Ok(Side::Away));
		assert_eq!(Side::from_str("HOME"), Ok(Side::Home));
		assert_eq!(Side::from_str("neutral"), Err(TeamError::InvalidSide("neutral".to_string())));
		assert_eq!(Side::Away.opponent(), Side::Home);
	}

	#[test]
	fn test_side_of_abbreviation() {
		let teams = teams();
		assert_eq!(teams.side_of("UWL"), Some(Side::Away));
		assert_eq!(teams.side_of("cmu"), Some(Side::Home));
		assert_eq!(teams.side_of("BAY"), None);
		assert_eq!(teams.abbreviation(Side::Away), "UWL");
	}

	#[test]
	fn test_empty_abbreviation_rejected() {
		assert_eq!(TeamInfo::new("  ", "Nobody"), Err(TeamError::EmptyAbbreviation));
	}

	#[test]
	fn test_score_add() {
		let mut score = Score::new(10, 0);
		score.add(Side::Away, 3);
		score.add(Side::Home, 6);
		assert_eq!(score, Score::new(13, 6));
		assert_eq!(score.of(Side::Home), 6);
	}
}
