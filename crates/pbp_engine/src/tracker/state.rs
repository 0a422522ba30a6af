use crate::config::EngineConfig;
use crate::schema::{GameClock, Quarter, Score, Side};
use serde::{Deserialize, Serialize};

/// Everything carried from one play to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
	pub quarter: Quarter,
	pub clock: Option<GameClock>,
	/// Team with the ball for the next snap.
	pub possession: Side,
	/// Ball spot on `possession`'s 1-100 scale.
	pub field_position: i32,
	pub score: Score,
	/// Team that kicks the next kickoff.
	pub kicking_team: Side,
	/// Down the next scrimmage play should be, when it can be predicted.
	pub expected_down: Option<u8>,
	/// Id given to the next tracked play.
	pub next_play_id: usize,
}

impl GameState {
	pub fn new(config: &EngineConfig) -> Self {
		Self {
			quarter: Quarter::FIRST,
			clock: None,
			possession: config.opening_possession,
			field_position: config.starting_field_position,
			score: Score::default(),
			kicking_team: config.opening_possession.opponent(),
			expected_down: None,
			next_play_id: 0,
		}
	}

	pub fn with_score(mut self, score: Score) -> Self {
		self.score = score;
		self
	}

	pub fn with_possession(mut self, side: Side, field_position: i32) -> Self {
		self.possession = side;
		self.field_position = field_position;
		self
	}

	pub fn with_quarter(mut self, quarter: Quarter) -> Self {
		self.quarter = quarter;
		self
	}

	/// Hands the ball to the second-half receiver when play crosses into the
	/// third quarter. Entering overtime forgets the down sequence only.
	pub(crate) fn enter_period(&self, quarter: Quarter, config: &EngineConfig) -> Self {
		let mut next = self.clone();
		if quarter.half() == self.quarter.half() {
			return next;
		}

		next.expected_down = None;
		if self.quarter.half() == 1 && quarter.half() == 2 {
			let receiver = config.second_half_receiver();
			next.possession = receiver;
			next.kicking_team = receiver.opponent();
			next.field_position = config.starting_field_position;
		}
		next
	}
}
