use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayType {
	Rush,
	Pass,
	Punt,
	Kickoff,
	FieldGoal,
	Pat,
	Penalty,
	Timeout,
	Safety,
	Unknown,
}

impl PlayType {
	pub fn as_str(self) -> &'static str {
		match self {
			PlayType::Rush => "RUSH",
			PlayType::Pass => "PASS",
			PlayType::Punt => "PUNT",
			PlayType::Kickoff => "KICKOFF",
			PlayType::FieldGoal => "FIELD_GOAL",
			PlayType::Pat => "PAT",
			PlayType::Penalty => "PENALTY",
			PlayType::Timeout => "TIMEOUT",
			PlayType::Safety => "SAFETY",
			PlayType::Unknown => "UNKNOWN",
		}
	}
}

impl fmt::Display for PlayType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_matches_serde_tag() {
		let play_types = [
			PlayType::Rush,
			PlayType::Pass,
			PlayType::Punt,
			PlayType::Kickoff,
			PlayType::FieldGoal,
			PlayType::Pat,
			PlayType::Penalty,
			PlayType::Timeout,
			PlayType::Safety,
			PlayType::Unknown,
		];
		for play_type in play_types {
			let json = serde_json::to_string(&play_type).unwrap();
			assert_eq!(json, format!("\"{}\"", play_type));
		}
	}
}
