use crate::schema::Side;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Points {
	One,
	Two,
	Three,
	Six,
}

impl Points {
	pub fn value(self) -> u16 {
		match self {
			Points::One => 1,
			Points::Two => 2,
			Points::Three => 3,
			Points::Six => 6,
		}
	}

	/// Every legal single-play score increase.
	pub fn is_legal_delta(delta: u16) -> bool {
		matches!(delta, 1 | 2 | 3 | 6)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoringEventType {
	Touchdown,
	/// Interception, fumble or blocked-kick return scored by the non-possessing team.
	DefensiveTouchdown,
	FieldGoal,
	ExtraPoint,
	TwoPointConversion,
	Safety,
}

impl ScoringEventType {
	pub fn points(self) -> Points {
		match self {
			ScoringEventType::Touchdown | ScoringEventType::DefensiveTouchdown => Points::Six,
			ScoringEventType::FieldGoal => Points::Three,
			ScoringEventType::ExtraPoint => Points::One,
			ScoringEventType::TwoPointConversion | ScoringEventType::Safety => Points::Two,
		}
	}
}

/// A resolved score attached to a tracked play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPlay {
	pub event_type: ScoringEventType,
	/// Team credited with the points.
	pub team: Side,
	pub points: Points,
}

impl ScoringPlay {
	pub fn new(event_type: ScoringEventType, team: Side) -> Self {
		Self {
			event_type,
			team,
			points: event_type.points(),
		}
	}

	pub fn touchdown(team: Side) -> Self {
		ScoringPlay::new(ScoringEventType::Touchdown, team)
	}

	pub fn defensive_touchdown(team: Side) -> Self {
		ScoringPlay::new(ScoringEventType::DefensiveTouchdown, team)
	}

	pub fn field_goal(team: Side) -> Self {
		ScoringPlay::new(ScoringEventType::FieldGoal, team)
	}

	pub fn safety(team: Side) -> Self {
		ScoringPlay::new(ScoringEventType::Safety, team)
	}

	pub fn is_touchdown(&self) -> bool {
		matches!(self.event_type, ScoringEventType::Touchdown | ScoringEventType::DefensiveTouchdown)
	}
}
