use crate::error::EngineError;
use crate::schema::{Side, TeamInfo, Teams, OPPONENT_GOAL_LINE, OWN_GOAL_LINE};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How drives are numbered in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveNumbering {
	/// 1, 2, 3... across both teams.
	#[default]
	Cumulative,
	/// Each team counts its own drives from 1.
	PerTeam,
}

impl FromStr for DriveNumbering {
	type Err = EngineError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().replace('-', "_").as_str() {
			"cumulative" => Ok(DriveNumbering::Cumulative),
			"per_team" | "perteam" => Ok(DriveNumbering::PerTeam),
			_ => Err(EngineError::invalid_config(format!("unknown drive numbering: {}", s))),
		}
	}
}

/// Which team a defensive or special-teams score records as in possession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefensiveScorePossession {
	/// The team that snapped or kicked the ball.
	#[default]
	Offense,
	/// The team that scored.
	Defense,
}

impl FromStr for DefensiveScorePossession {
	type Err = EngineError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"offense" => Ok(DefensiveScorePossession::Offense),
			"defense" => Ok(DefensiveScorePossession::Defense),
			_ => Err(EngineError::invalid_config(format!("unknown defensive score possession: {}", s))),
		}
	}
}

/// Game-level settings for one engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
	pub teams: Teams,
	/// Receiver of the opening kickoff.
	pub opening_possession: Side,
	/// Receiver of the second-half kickoff. Defaults to the opening kicker.
	pub second_half_receiver: Option<Side>,
	pub starting_field_position: i32,
	pub touchback_field_position: i32,
	pub drive_numbering: DriveNumbering,
	pub defensive_score_possession: DefensiveScorePossession,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			teams: Teams::default(),
			opening_possession: Side::Away,
			second_half_receiver: None,
			starting_field_position: 25,
			touchback_field_position: 25,
			drive_numbering: DriveNumbering::default(),
			defensive_score_possession: DefensiveScorePossession::default(),
		}
	}
}

impl EngineConfig {
	pub fn new(away: TeamInfo, home: TeamInfo) -> Self {
		Self {
			teams: Teams::new(away, home),
			..Self::default()
		}
	}

	pub fn with_opening_possession(mut self, side: Side) -> Self {
		self.opening_possession = side;
		self
	}

	pub fn with_second_half_receiver(mut self, side: Side) -> Self {
		self.second_half_receiver = Some(side);
		self
	}

	pub fn with_starting_field_position(mut self, field_position: i32) -> Self {
		self.starting_field_position = field_position;
		self
	}

	pub fn with_touchback_field_position(mut self, field_position: i32) -> Self {
		self.touchback_field_position = field_position;
		self
	}

	pub fn with_drive_numbering(mut self, numbering: DriveNumbering) -> Self {
		self.drive_numbering = numbering;
		self
	}

	pub fn with_defensive_score_possession(mut self, possession: DefensiveScorePossession) -> Self {
		self.defensive_score_possession = possession;
		self
	}

	pub fn second_half_receiver(&self) -> Side {
		self.second_half_receiver.unwrap_or_else(|| self.opening_possession.opponent())
	}

	pub fn validate(&self) -> Result<(), EngineError> {
		let away = &self.teams.away.abbreviation;
		let home = &self.teams.home.abbreviation;
		if away.trim().is_empty() || home.trim().is_empty() {
			return Err(EngineError::invalid_config("team abbreviations must not be empty"));
		}
		if away.eq_ignore_ascii_case(home) {
			return Err(EngineError::invalid_config(format!("both teams use abbreviation {}", away)));
		}

		let playable = OWN_GOAL_LINE..OPPONENT_GOAL_LINE;
		if !playable.contains(&self.starting_field_position) {
			return Err(EngineError::invalid_config(format!("starting field position {} is outside 1-99", self.starting_field_position)));
		}
		if !playable.contains(&self.touchback_field_position) {
			return Err(EngineError::invalid_config(format!("touchback field position {} is outside 1-99", self.touchback_field_position)));
		}
		Ok(())
	}
}
