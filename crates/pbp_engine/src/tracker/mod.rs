//! Game state tracking as a pure transition:
//! `(GameState, PlayCandidate) -> (GameState, TrackedPlay, issues)`.

mod state;

pub use state::GameState;

use crate::config::{DefensiveScorePossession, EngineConfig};
use crate::parsers::Grammar;
use crate::schema::{
	flip, ParseIssue, PlayCandidate, PlayType, ReasonCode, ScoringPlay, ScoringEventType, Side, TrackedPlay, Turnover, YardLine, Yards, OPPONENT_GOAL_LINE,
	OWN_GOAL_LINE,
};

/// Kickoffs are taken from the kicking team's 35.
const KICKOFF_SPOT: i32 = 35;

/// Result of feeding one candidate through the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
	pub state: GameState,
	pub play: TrackedPlay,
	/// Contradictions resolved in favour of the candidate's explicit values.
	pub issues: Vec<ParseIssue>,
}

/// How one play resolved, before it is folded into the next state.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Outcome {
	possession: Side,
	start: i32,
	end: i32,
	scoring: Option<ScoringPlay>,
	turnover: Option<Turnover>,
	possession_after: Side,
	/// Spot for the next snap on `possession_after`'s scale.
	next_field_position: i32,
	kicking_team: Side,
	expected_down: Option<u8>,
}

/// Resolves one candidate against the state left by the previous play.
///
/// Never fails. Explicit spots and downs printed in the text win over the
/// tracked values, and every disagreement is returned as a warning.
pub fn advance(state: &GameState, candidate: &PlayCandidate, config: &EngineConfig) -> Transition {
	let id = state.next_play_id;
	let quarter = candidate.quarter;
	let clock = candidate.clock.or(state.clock);
	let base = state.enter_period(quarter, config);

	let mut resolver = Resolver {
		id,
		state: &base,
		candidate,
		config,
		issues: Vec::new(),
	};
	let outcome = resolver.resolve();
	let issues = resolver.issues;

	let mut score = base.score;
	if let Some(scoring) = outcome.scoring {
		score.add(scoring.team, scoring.points.value());
	}

	let play = TrackedPlay {
		id,
		candidate: candidate.clone(),
		quarter,
		clock,
		possession: outcome.possession,
		field_position_start: outcome.start,
		field_position_end: outcome.end,
		scoring: outcome.scoring,
		turnover: outcome.turnover,
		possession_after: outcome.possession_after,
		score,
	};

	let state = GameState {
		quarter,
		clock,
		possession: outcome.possession_after,
		field_position: outcome.next_field_position,
		score,
		kicking_team: outcome.kicking_team,
		expected_down: outcome.expected_down,
		next_play_id: id + 1,
	};

	Transition { state, play, issues }
}

struct Resolver<'a> {
	id: usize,
	state: &'a GameState,
	candidate: &'a PlayCandidate,
	config: &'a EngineConfig,
	issues: Vec<ParseIssue>,
}

impl Resolver<'_> {
	fn resolve(&mut self) -> Outcome {
		match self.candidate.play_type {
			PlayType::Rush | PlayType::Pass | PlayType::Safety => self.scrimmage(),
			PlayType::Punt => self.punt(),
			PlayType::Kickoff => self.kickoff(),
			PlayType::FieldGoal => self.field_goal(),
			PlayType::Pat => self.conversion(),
			PlayType::Penalty => self.penalty(),
			PlayType::Timeout => self.dead_ball(self.state.expected_down),
			PlayType::Unknown => self.dead_ball(None),
		}
	}

	fn warn(&mut self, reason: ReasonCode, detail: String) {
		self.issues.push(ParseIssue::warning(reason, Some(self.id), self.candidate.raw_text.as_str(), detail));
	}

	/// Converts a printed yard line to `side`'s scale, warning on unknown teams.
	fn explicit(&mut self, line: Option<&YardLine>, side: Side) -> Option<i32> {
		let line = line?;
		let field_position = line.to_field_position(side, &self.config.teams);
		if field_position.is_none() {
			self.warn(ReasonCode::UnknownTeamAbbreviation, format!("yard line {} names neither team", line));
		}
		field_position
	}

	fn side_of(&mut self, abbreviation: Option<&str>) -> Option<Side> {
		let abbreviation = abbreviation?;
		let side = self.config.teams.side_of(abbreviation);
		if side.is_none() {
			self.warn(ReasonCode::UnknownTeamAbbreviation, format!("team {} is neither side", abbreviation));
		}
		side
	}

	/// Snap spot: the printed line of scrimmage when present, else the tracked spot.
	fn line_of_scrimmage(&mut self, offense: Side) -> i32 {
		let tracked = self.state.field_position;
		let candidate = self.candidate;
		match self.explicit(candidate.line_of_scrimmage.as_ref(), offense) {
			Some(explicit) if explicit != tracked => {
				self.warn(ReasonCode::FieldPositionMismatch, format!("tracked line of scrimmage {} but text says {}", tracked, explicit));
				explicit
			}
			Some(explicit) => explicit,
			None => tracked,
		}
	}

	fn check_down(&mut self) {
		let (Some(expected), Some(down)) = (self.state.expected_down, self.candidate.down) else {
			return;
		};
		if (1..=4).contains(&down) && down != expected {
			self.warn(ReasonCode::DownDistanceContradiction, format!("expected down {} but text says {}", expected, down));
		}
	}

	fn accepted_penalty(&self) -> bool {
		self.candidate.penalty.as_ref().is_some_and(|penalty| !penalty.declined)
	}

	fn yards_to_go(&self, start: i32) -> Option<i32> {
		if self.candidate.goal_to_go {
			Some(OPPONENT_GOAL_LINE - start)
		} else {
			self.candidate.distance.map(i32::from)
		}
	}

	fn recovered_by(&mut self) -> Option<Side> {
		let candidate = self.candidate;
		self.side_of(candidate.recovered_by.as_deref())
	}

	fn return_yards(&self) -> i32 {
		self.candidate.return_yards.unwrap_or(0)
	}

	fn dead_ball(&self, expected_down: Option<u8>) -> Outcome {
		let possession = self.state.possession;
		Outcome {
			possession,
			start: self.state.field_position,
			end: self.state.field_position,
			scoring: None,
			turnover: None,
			possession_after: possession,
			next_field_position: self.state.field_position,
			kicking_team: self.state.kicking_team,
			expected_down,
		}
	}

	fn touchdown(&self, offense: Side, start: i32) -> Outcome {
		Outcome {
			possession: offense,
			start,
			end: OPPONENT_GOAL_LINE,
			scoring: Some(ScoringPlay::touchdown(offense)),
			turnover: None,
			possession_after: offense,
			next_field_position: OPPONENT_GOAL_LINE,
			kicking_team: offense,
			expected_down: None,
		}
	}

	/// Score by the team without the ball. `start` is on `offense`'s scale.
	fn defensive_touchdown(&self, offense: Side, start: i32, turnover: Option<Turnover>) -> Outcome {
		let scorer = offense.opponent();
		let (possession, start, end) = match self.config.defensive_score_possession {
			DefensiveScorePossession::Offense => (offense, start, OWN_GOAL_LINE),
			DefensiveScorePossession::Defense => (scorer, flip(start), OPPONENT_GOAL_LINE),
		};
		Outcome {
			possession,
			start,
			end,
			scoring: Some(ScoringPlay::defensive_touchdown(scorer)),
			turnover,
			possession_after: scorer,
			next_field_position: OPPONENT_GOAL_LINE,
			kicking_team: scorer,
			expected_down: None,
		}
	}

	/// Ball downed or carried out behind `offense`'s own goal line.
	fn safety(&self, offense: Side, start: i32) -> Outcome {
		let defense = offense.opponent();
		Outcome {
			possession: offense,
			start,
			end: OWN_GOAL_LINE,
			scoring: Some(ScoringPlay::safety(defense)),
			turnover: None,
			possession_after: defense,
			next_field_position: self.config.touchback_field_position,
			kicking_team: offense,
			expected_down: None,
		}
	}

	/// The defense takes over. `ball` is where the offense lost it, on the offense's scale.
	fn change_of_possession(&mut self, offense: Side, start: i32, ball: i32, turnover: Turnover) -> Outcome {
		let defense = offense.opponent();
		if self.candidate.flags.touchdown {
			return self.defensive_touchdown(offense, start, Some(turnover));
		}

		let takeover = if self.candidate.flags.touchback {
			self.config.touchback_field_position
		} else {
			let candidate = self.candidate;
			self.explicit(candidate.spot.as_ref(), defense).unwrap_or_else(|| flip(ball) + self.return_yards())
		};
		if takeover >= OPPONENT_GOAL_LINE {
			return self.defensive_touchdown(offense, start, Some(turnover));
		}
		let takeover = if takeover < OWN_GOAL_LINE { self.config.touchback_field_position } else { takeover };

		Outcome {
			possession: offense,
			start,
			end: flip(takeover),
			scoring: None,
			turnover: Some(turnover),
			possession_after: defense,
			next_field_position: takeover,
			kicking_team: self.state.kicking_team,
			expected_down: None,
		}
	}

	fn scrimmage(&mut self) -> Outcome {
		let offense = self.state.possession;
		let defense = offense.opponent();
		self.check_down();
		let start = self.line_of_scrimmage(offense);
		let yards = self.candidate.yards.map_or(0, Yards::value);
		let flags = self.candidate.flags;

		if flags.interception {
			return self.change_of_possession(offense, start, start + yards, Turnover::Interception);
		}
		if flags.fumble_lost || (flags.fumble && self.recovered_by() == Some(defense)) {
			return self.change_of_possession(offense, start, start + yards, Turnover::FumbleLost);
		}

		let tracked_end = start + yards;
		let candidate = self.candidate;
		let end = match self.explicit(candidate.spot.as_ref(), offense) {
			Some(explicit) if explicit != tracked_end && (OWN_GOAL_LINE..OPPONENT_GOAL_LINE).contains(&explicit) => {
				self.warn(ReasonCode::FieldPositionMismatch, format!("{} yards from {} ends at {} but text says {}", yards, start, tracked_end, explicit));
				explicit
			}
			_ => tracked_end,
		};

		if flags.touchdown || end >= OPPONENT_GOAL_LINE {
			return self.touchdown(offense, start);
		}
		if flags.safety || end < OWN_GOAL_LINE {
			return self.safety(offense, start);
		}

		let gained = end - start;
		let to_go = self.yards_to_go(start);
		let penalty = self.accepted_penalty();
		let down = self.candidate.down.filter(|down| (1..=4).contains(down));

		if down == Some(4) && !penalty && (flags.turnover_on_downs || to_go.is_some_and(|to_go| gained < to_go)) {
			return Outcome {
				possession: offense,
				start,
				end,
				scoring: None,
				turnover: Some(Turnover::Downs),
				possession_after: defense,
				next_field_position: flip(end),
				kicking_team: self.state.kicking_team,
				expected_down: None,
			};
		}

		let expected_down = match (down, to_go) {
			(Some(_), Some(to_go)) if !penalty && gained >= to_go => Some(1),
			(Some(down), Some(_)) if !penalty && down < 4 => Some(down + 1),
			_ => None,
		};

		Outcome {
			possession: offense,
			start,
			end,
			scoring: None,
			turnover: None,
			possession_after: offense,
			next_field_position: end,
			kicking_team: self.state.kicking_team,
			expected_down,
		}
	}

	fn punt(&mut self) -> Outcome {
		let kicker = self.state.possession;
		let receiver = kicker.opponent();
		self.check_down();
		let start = self.line_of_scrimmage(kicker);
		let flags = self.candidate.flags;
		let recovered_by = self.recovered_by();

		if flags.safety && !flags.touchdown {
			return self.safety(kicker, start);
		}
		if flags.blocked || self.candidate.grammar == Some(Grammar::BlockedPunt) {
			if recovered_by == Some(kicker) && !flags.touchdown {
				return self.kicking_team_keeps(kicker, start, start);
			}
			return self.change_of_possession(kicker, start, start, Turnover::BlockedKick);
		}

		let landing = start + self.candidate.kick_distance.unwrap_or(0);
		if flags.muffed && recovered_by == Some(kicker) {
			return self.kicking_team_keeps(kicker, start, landing);
		}
		if flags.touchdown {
			return self.defensive_touchdown(kicker, start, None);
		}

		let takeover = self.kick_takeover(receiver, flip(landing) + self.return_yards());
		Outcome {
			possession: kicker,
			start,
			end: flip(takeover),
			scoring: None,
			turnover: None,
			possession_after: receiver,
			next_field_position: takeover,
			kicking_team: self.state.kicking_team,
			expected_down: None,
		}
	}

	/// Receiver's takeover spot for a kick: touchback, printed spot, or the
	/// fallback computed from distance and return.
	fn kick_takeover(&mut self, receiver: Side, fallback: i32) -> i32 {
		let touchback = self.config.touchback_field_position;
		if self.candidate.flags.touchback {
			return touchback;
		}
		let candidate = self.candidate;
		let takeover = self.explicit(candidate.spot.as_ref(), receiver).unwrap_or(fallback);
		if takeover < OWN_GOAL_LINE {
			touchback
		} else {
			takeover.min(OPPONENT_GOAL_LINE - 1)
		}
	}

	/// Punt or blocked kick recovered by the team that kicked it.
	fn kicking_team_keeps(&mut self, kicker: Side, start: i32, fallback: i32) -> Outcome {
		let candidate = self.candidate;
		let end = self.explicit(candidate.spot.as_ref(), kicker).unwrap_or(fallback).clamp(OWN_GOAL_LINE, OPPONENT_GOAL_LINE - 1);
		Outcome {
			possession: kicker,
			start,
			end,
			scoring: None,
			turnover: None,
			possession_after: kicker,
			next_field_position: end,
			kicking_team: self.state.kicking_team,
			expected_down: None,
		}
	}

	fn kickoff(&mut self) -> Outcome {
		let kicker = self.state.kicking_team;
		let receiver = kicker.opponent();
		let flags = self.candidate.flags;
		let catch = self
			.candidate
			.kick_distance
			.map_or(self.config.touchback_field_position, |distance| (OPPONENT_GOAL_LINE - KICKOFF_SPOT - distance).clamp(OWN_GOAL_LINE, OPPONENT_GOAL_LINE - 1));

		if self.recovered_by() == Some(kicker) {
			if flags.touchdown {
				return self.defensive_touchdown(receiver, catch, Some(Turnover::KickRecovered));
			}
			let candidate = self.candidate;
			let kicker_spot = self
				.explicit(candidate.spot.as_ref(), kicker)
				.unwrap_or_else(|| flip(catch))
				.clamp(OWN_GOAL_LINE, OPPONENT_GOAL_LINE - 1);
			return Outcome {
				possession: receiver,
				start: flip(kicker_spot),
				end: flip(kicker_spot),
				scoring: None,
				turnover: Some(Turnover::KickRecovered),
				possession_after: kicker,
				next_field_position: kicker_spot,
				kicking_team: kicker,
				expected_down: None,
			};
		}

		if flags.touchdown {
			return self.touchdown(receiver, catch);
		}

		let takeover = self.kick_takeover(receiver, catch + self.return_yards());
		Outcome {
			possession: receiver,
			start: takeover,
			end: takeover,
			scoring: None,
			turnover: None,
			possession_after: receiver,
			next_field_position: takeover,
			kicking_team: kicker,
			expected_down: None,
		}
	}

	fn field_goal(&mut self) -> Outcome {
		let offense = self.state.possession;
		let defense = offense.opponent();
		self.check_down();
		let start = self.line_of_scrimmage(offense);

		if self.candidate.flags.blocked || self.candidate.grammar == Some(Grammar::BlockedFieldGoal) {
			return self.change_of_possession(offense, start, start, Turnover::BlockedKick);
		}

		if self.candidate.success == Some(true) {
			return Outcome {
				possession: offense,
				start,
				end: start,
				scoring: Some(ScoringPlay::field_goal(offense)),
				turnover: None,
				possession_after: defense,
				next_field_position: self.config.touchback_field_position,
				kicking_team: offense,
				expected_down: None,
			};
		}

		Outcome {
			possession: offense,
			start,
			end: start,
			scoring: None,
			turnover: Some(Turnover::MissedFieldGoal),
			possession_after: defense,
			next_field_position: flip(start),
			kicking_team: self.state.kicking_team,
			expected_down: None,
		}
	}

	/// Extra point or two-point try. Snapped from the carried spot.
	fn conversion(&mut self) -> Outcome {
		let mut outcome = self.dead_ball(None);
		if self.candidate.success == Some(true) {
			let event_type = match self.candidate.grammar {
				Some(Grammar::TwoPointAttempt) => ScoringEventType::TwoPointConversion,
				_ => ScoringEventType::ExtraPoint,
			};
			outcome.scoring = Some(ScoringPlay::new(event_type, outcome.possession));
		}
		outcome
	}

	fn penalty(&mut self) -> Outcome {
		let offense = self.state.possession;
		let start = self.line_of_scrimmage(offense);
		let penalty = self.candidate.penalty.clone().filter(|penalty| !penalty.declined);

		let end = match penalty {
			Some(penalty) => {
				let yards = i32::from(penalty.yards.unwrap_or(0));
				match self.side_of(penalty.team.as_deref()) {
					Some(side) if side == offense => start - yards,
					Some(_) => start + yards,
					None => start,
				}
			}
			None => start,
		}
		.clamp(OWN_GOAL_LINE, OPPONENT_GOAL_LINE - 1);

		Outcome {
			possession: offense,
			start,
			end,
			scoring: None,
			turnover: None,
			possession_after: offense,
			next_field_position: end,
			kicking_team: self.state.kicking_team,
			expected_down: None,
		}
	}
}
