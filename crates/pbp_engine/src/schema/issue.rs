use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
	/// Record kept and flagged.
	Warning,
	/// Record dropped from the output.
	Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
	UnclassifiedPlay,
	DownDistanceContradiction,
	FieldPositionMismatch,
	UnknownTeamAbbreviation,
	YardsOutOfRange,
	ClockOutOfRange,
	ClockRegression,
	FieldPositionOutOfRange,
	InvalidDown,
	InvalidQuarter,
	QuarterRegression,
	QuarterSkipped,
	ScoreRegression,
	IllegalScoreDelta,
	DriveMembership,
}

impl ReasonCode {
	pub fn as_str(self) -> &'static str {
		match self {
			ReasonCode::UnclassifiedPlay => "UNCLASSIFIED_PLAY",
			ReasonCode::DownDistanceContradiction => "DOWN_DISTANCE_CONTRADICTION",
			ReasonCode::FieldPositionMismatch => "FIELD_POSITION_MISMATCH",
			ReasonCode::UnknownTeamAbbreviation => "UNKNOWN_TEAM_ABBREVIATION",
			ReasonCode::YardsOutOfRange => "YARDS_OUT_OF_RANGE",
			ReasonCode::ClockOutOfRange => "CLOCK_OUT_OF_RANGE",
			ReasonCode::ClockRegression => "CLOCK_REGRESSION",
			ReasonCode::QuarterSkipped => "QUARTER_SKIPPED",
			ReasonCode::FieldPositionOutOfRange => "FIELD_POSITION_OUT_OF_RANGE",
			ReasonCode::InvalidDown => "INVALID_DOWN",
			ReasonCode::InvalidQuarter => "INVALID_QUARTER",
			ReasonCode::QuarterRegression => "QUARTER_REGRESSION",
			ReasonCode::ScoreRegression => "SCORE_REGRESSION",
			ReasonCode::IllegalScoreDelta => "ILLEGAL_SCORE_DELTA",
			ReasonCode::DriveMembership => "DRIVE_MEMBERSHIP",
		}
	}
}

impl fmt::Display for ReasonCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One entry in the issue log. Appended once, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseIssue {
	pub severity: Severity,
	pub reason: ReasonCode,
	/// `TrackedPlay::id` of the offending record, if it is a play.
	pub play_id: Option<usize>,
	pub raw_text: String,
	pub detail: String,
}

impl ParseIssue {
	pub fn warning(reason: ReasonCode, play_id: Option<usize>, raw_text: impl Into<String>, detail: impl Into<String>) -> Self {
		Self {
			severity: Severity::Warning,
			reason,
			play_id,
			raw_text: raw_text.into(),
			detail: detail.into(),
		}
	}

	pub fn rejected(reason: ReasonCode, play_id: Option<usize>, raw_text: impl Into<String>, detail: impl Into<String>) -> Self {
		Self {
			severity: Severity::Rejected,
			reason,
			play_id,
			raw_text: raw_text.into(),
			detail: detail.into(),
		}
	}

	pub fn is_rejection(&self) -> bool {
		self.severity == Severity::Rejected
	}
}

impl fmt::Display for ParseIssue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let severity = match self.severity {
			Severity::Warning => "WARNING",
			Severity::Rejected => "REJECTED",
		};
		write!(f, "[{}] {}: {} ({})", severity, self.reason, self.detail, self.raw_text)
	}
}
