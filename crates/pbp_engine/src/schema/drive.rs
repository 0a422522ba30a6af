use crate::schema::{GameClock, Quarter, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriveEndReason {
	Touchdown,
	FieldGoal,
	Punt,
	Turnover,
	TurnoverOnDowns,
	EndOfHalf,
	SafetyConceded,
}

impl fmt::Display for DriveEndReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			DriveEndReason::Touchdown => "TOUCHDOWN",
			DriveEndReason::FieldGoal => "FIELD_GOAL",
			DriveEndReason::Punt => "PUNT",
			DriveEndReason::Turnover => "TURNOVER",
			DriveEndReason::TurnoverOnDowns => "TURNOVER_ON_DOWNS",
			DriveEndReason::EndOfHalf => "END_OF_HALF",
			DriveEndReason::SafetyConceded => "SAFETY_CONCEDED",
		};
		f.write_str(label)
	}
}

/// One uninterrupted possession. `plays` holds `TrackedPlay::id`s in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drive {
	pub number: u32,
	pub team: Side,
	pub plays: Vec<usize>,
	pub start_quarter: Quarter,
	pub end_quarter: Quarter,
	pub start_clock: Option<GameClock>,
	pub play_count: usize,
	pub net_yards: i32,
	pub start_field_position: i32,
	pub end_field_position: i32,
	pub end_reason: DriveEndReason,
}
