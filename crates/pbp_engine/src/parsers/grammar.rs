use crate::schema::PlayType;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Play-text shapes, most specific first. The first grammar whose required
/// tokens all match a line wins, so variant order is significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grammar {
	Timeout,
	PenaltyNoPlay,
	TwoPointAttempt,
	ExtraPoint,
	BlockedFieldGoal,
	FieldGoal,
	MuffedKickoff,
	OnsideKick,
	Kickoff,
	BlockedPunt,
	Punt,
	Safety,
	Sack,
	Interception,
	Pass,
	Kneel,
	Rush,
	Penalty,
}

const KICKOFF: &str = r"(?i)\bkick\s*off\b|\bkicks\s+off\b|\bkicks\s+\d+\s+yards?\b";
const FIELD_GOAL: &str = r"(?i:\bfield\s+goal\b)|\bFG\b";
const PUNT: &str = r"(?i)\bpunt(?:s|ed)?\b";

impl Grammar {
	/// Cascade order.
	pub const ALL: [Grammar; 18] = [
		Grammar::Timeout,
		Grammar::PenaltyNoPlay,
		Grammar::TwoPointAttempt,
		Grammar::ExtraPoint,
		Grammar::BlockedFieldGoal,
		Grammar::FieldGoal,
		Grammar::MuffedKickoff,
		Grammar::OnsideKick,
		Grammar::Kickoff,
		Grammar::BlockedPunt,
		Grammar::Punt,
		Grammar::Safety,
		Grammar::Sack,
		Grammar::Interception,
		Grammar::Pass,
		Grammar::Kneel,
		Grammar::Rush,
		Grammar::Penalty,
	];

	/// Every pattern must match for the grammar to apply.
	fn required_tokens(self) -> &'static [&'static str] {
		match self {
			Grammar::Timeout => &[r"(?i)\btime\s*out\b"],
			Grammar::PenaltyNoPlay => &[r"(?i)\bpenalty\b", r"(?i)\bno\s+play\b"],
			Grammar::TwoPointAttempt => &[r"(?i)\b(?:two|2)[\s-]point\b"],
			Grammar::ExtraPoint => &[r"(?i:\bextra\s+point\b|\bkick\s+attempt\b|\bpoint\s+after\b)|\bPAT\b"],
			Grammar::BlockedFieldGoal => &[FIELD_GOAL, r"(?i)\bblocked\b"],
			Grammar::FieldGoal => &[FIELD_GOAL],
			Grammar::MuffedKickoff => &[KICKOFF, r"(?i)\bmuff(?:ed|s)?\b"],
			Grammar::OnsideKick => &[r"(?i)\bon-?side\b"],
			Grammar::Kickoff => &[KICKOFF],
			Grammar::BlockedPunt => &[PUNT, r"(?i)\bblocked\b"],
			Grammar::Punt => &[PUNT],
			Grammar::Safety => &[r"(?i)\bsafety\b"],
			Grammar::Sack => &[r"(?i)\bsack(?:ed|s)?\b"],
			Grammar::Interception => &[r"(?i)\bpass\b", r"(?i)\bintercept(?:ed|ion|s)?\b"],
			Grammar::Pass => &[r"(?i)\bpass(?:es|ed)?\s+(?:complete|incomplete|attempt|intercepted|to|short|deep|left|right|middle|thrown|caught|for|from)\b"],
			Grammar::Kneel => &[r"(?i)\bkneel(?:s|ed)?\b|\bkneel\s+down\b"],
			Grammar::Rush => &[r"(?i)\brush(?:es|ed)?\b|\bruns?\b|\bscrambles?\b|\b(?:left|right|up\s+the)\s+(?:end|tackle|guard|middle)\b"],
			Grammar::Penalty => &[r"(?i)\bpenalty\b"],
		}
	}

	fn regexes(self) -> &'static [Regex] {
		&GRAMMAR_REGEXES[self as usize]
	}

	/// Whether every required token is present.
	pub fn matches(self, text: &str) -> bool {
		self.regexes().iter().all(|re| re.is_match(text))
	}

	/// Byte offset where the first required token starts; the actor precedes it.
	pub fn verb_start(self, text: &str) -> Option<usize> {
		self.regexes().first().and_then(|re| re.find(text)).map(|m| m.start())
	}

	/// First grammar in cascade order that matches.
	pub fn resolve(text: &str) -> Option<Grammar> {
		Grammar::ALL.into_iter().find(|grammar| grammar.matches(text))
	}

	pub fn play_type(self) -> PlayType {
		match self {
			Grammar::Timeout => PlayType::Timeout,
			Grammar::PenaltyNoPlay | Grammar::Penalty => PlayType::Penalty,
			Grammar::TwoPointAttempt | Grammar::ExtraPoint => PlayType::Pat,
			Grammar::BlockedFieldGoal | Grammar::FieldGoal => PlayType::FieldGoal,
			Grammar::MuffedKickoff | Grammar::OnsideKick | Grammar::Kickoff => PlayType::Kickoff,
			Grammar::BlockedPunt | Grammar::Punt => PlayType::Punt,
			Grammar::Safety => PlayType::Safety,
			Grammar::Sack | Grammar::Interception | Grammar::Pass => PlayType::Pass,
			Grammar::Kneel | Grammar::Rush => PlayType::Rush,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Grammar::Timeout => "TIMEOUT",
			Grammar::PenaltyNoPlay => "PENALTY_NO_PLAY",
			Grammar::TwoPointAttempt => "TWO_POINT_ATTEMPT",
			Grammar::ExtraPoint => "EXTRA_POINT",
			Grammar::BlockedFieldGoal => "BLOCKED_FIELD_GOAL",
			Grammar::FieldGoal => "FIELD_GOAL",
			Grammar::MuffedKickoff => "MUFFED_KICKOFF",
			Grammar::OnsideKick => "ONSIDE_KICK",
			Grammar::Kickoff => "KICKOFF",
			Grammar::BlockedPunt => "BLOCKED_PUNT",
			Grammar::Punt => "PUNT",
			Grammar::Safety => "SAFETY",
			Grammar::Sack => "SACK",
			Grammar::Interception => "INTERCEPTION",
			Grammar::Pass => "PASS",
			Grammar::Kneel => "KNEEL",
			Grammar::Rush => "RUSH",
			Grammar::Penalty => "PENALTY",
		}
	}
}

impl fmt::Display for Grammar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

static GRAMMAR_REGEXES: Lazy<Vec<Vec<Regex>>> = Lazy::new(|| {
	Grammar::ALL
		.iter()
		.map(|grammar| grammar.required_tokens().iter().map(|pattern| Regex::new(pattern).unwrap()).collect())
		.collect()
});
