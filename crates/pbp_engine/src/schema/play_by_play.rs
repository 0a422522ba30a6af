use crate::parsers::Grammar;
use crate::schema::{GameClock, PlayType, Quarter, Score, ScoringPlay, Side, YardLine, Yards};
use serde::{Deserialize, Serialize};

/// One clock-delimited chunk of source text and the period it was extracted under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPlayUnit {
	pub quarter: Quarter,
	pub text: String,
}

impl RawPlayUnit {
	pub fn new(quarter: Quarter, text: impl Into<String>) -> Self {
		Self { quarter, text: text.into() }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Formation {
	Shotgun,
	NoHuddle,
	NoHuddleShotgun,
	Pistol,
	UnderCenter,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Penalty {
	/// Abbreviation of the penalized team, when printed.
	pub team: Option<String>,
	pub yards: Option<u8>,
	pub declined: bool,
}

/// Outcome markers read straight off the play text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayFlags {
	pub sack: bool,
	pub interception: bool,
	pub fumble: bool,
	pub fumble_lost: bool,
	pub incomplete: bool,
	pub touchdown: bool,
	pub safety: bool,
	pub touchback: bool,
	pub blocked: bool,
	pub muffed: bool,
	pub onside: bool,
	pub no_play: bool,
	pub fair_catch: bool,
	pub turnover_on_downs: bool,
}

/// Classifier output for one `RawPlayUnit`. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayCandidate {
	pub play_type: PlayType,
	/// The grammar that won the cascade; `None` for `UNKNOWN`.
	pub grammar: Option<Grammar>,
	pub quarter: Quarter,
	pub clock: Option<GameClock>,
	pub down: Option<u8>,
	pub distance: Option<u8>,
	pub goal_to_go: bool,
	pub line_of_scrimmage: Option<YardLine>,
	/// Ball spot printed after the action (`to the CMU20`).
	pub spot: Option<YardLine>,
	pub yards: Option<Yards>,
	pub kick_distance: Option<i32>,
	pub return_yards: Option<i32>,
	pub actors: Vec<String>,
	pub formation: Option<Formation>,
	/// GOOD / NO GOOD for kicks and conversion attempts.
	pub success: Option<bool>,
	pub penalty: Option<Penalty>,
	pub recovered_by: Option<String>,
	pub flags: PlayFlags,
	pub raw_text: String,
}

impl PlayCandidate {
	/// Candidate for text that matched no grammar: the raw text and nothing else.
	pub fn unknown(unit: &RawPlayUnit) -> Self {
		Self::empty(PlayType::Unknown, None, unit)
	}

	pub(crate) fn empty(play_type: PlayType, grammar: Option<Grammar>, unit: &RawPlayUnit) -> Self {
		Self {
			play_type,
			grammar,
			quarter: unit.quarter,
			clock: None,
			down: None,
			distance: None,
			goal_to_go: false,
			line_of_scrimmage: None,
			spot: None,
			yards: None,
			kick_distance: None,
			return_yards: None,
			actors: Vec::new(),
			formation: None,
			success: None,
			penalty: None,
			recovered_by: None,
			flags: PlayFlags::default(),
			raw_text: unit.text.clone(),
		}
	}

	pub fn is_classified(&self) -> bool {
		self.play_type != PlayType::Unknown
	}
}

/// How the offense lost the ball without kicking it away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Turnover {
	Interception,
	FumbleLost,
	Downs,
	MissedFieldGoal,
	BlockedKick,
	/// Onside or muffed kickoff recovered by the kicking team.
	KickRecovered,
}

/// A candidate enriched with everything only the play sequence can supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedPlay {
	/// Position in the input sequence.
	pub id: usize,
	pub candidate: PlayCandidate,
	pub quarter: Quarter,
	pub clock: Option<GameClock>,
	/// Team in possession when the play began.
	pub possession: Side,
	/// 1-100 from `possession`'s own goal line.
	pub field_position_start: i32,
	pub field_position_end: i32,
	pub scoring: Option<ScoringPlay>,
	pub turnover: Option<Turnover>,
	/// Team in possession for the next play.
	pub possession_after: Side,
	/// Score after the play resolved.
	pub score: Score,
}

impl TrackedPlay {
	pub fn play_type(&self) -> PlayType {
		self.candidate.play_type
	}

	pub fn yards(&self) -> Option<i32> {
		self.candidate.yards.map(Yards::value)
	}

	pub fn down(&self) -> Option<u8> {
		self.candidate.down
	}

	pub fn success(&self) -> Option<bool> {
		self.candidate.success
	}

	pub fn changes_possession(&self) -> bool {
		self.possession != self.possession_after
	}
}
