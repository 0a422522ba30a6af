use crate::parsers::Grammar;
use crate::patterns::{self, Marker};
use crate::schema::{PlayCandidate, PlayFlags, RawPlayUnit, Yards};

/// Classifies one unit of play text.
///
/// Always yields exactly one candidate. Text that no grammar accepts comes
/// back as `UNKNOWN` with only the raw text filled in.
pub fn classify(unit: &RawPlayUnit) -> PlayCandidate {
	let text = unit.text.as_str();
	let Some(grammar) = Grammar::resolve(text) else {
		return PlayCandidate::unknown(unit);
	};

	let mut candidate = PlayCandidate::empty(grammar.play_type(), Some(grammar), unit);

	candidate.clock = patterns::clock(text).map(|m| m.value);
	if let Some(m) = patterns::clock_quarter(text) {
		candidate.quarter = m.value;
	}

	let header = patterns::down_and_distance(text);
	let header_end = header.as_ref().map_or(0, |m| m.end);
	if let Some(m) = header {
		candidate.down = Some(m.value.down);
		candidate.distance = m.value.distance;
		candidate.goal_to_go = m.value.goal_to_go;
		candidate.line_of_scrimmage = m.value.line_of_scrimmage;
	}

	let verb_start = grammar.verb_start(text).unwrap_or(header_end).max(header_end);
	candidate.spot = patterns::spot_after(text, verb_start).map(|m| m.value);

	candidate.flags = extract_flags(text);
	extract_yards(grammar, text, &mut candidate);
	candidate.actors = extract_actors(text, verb_start);
	candidate.formation = patterns::formation(text).map(|m| m.value);
	candidate.penalty = patterns::penalty(text).map(|m| m.value);
	candidate.recovered_by = patterns::recovered_by(text).map(|m| m.value);

	if matches!(grammar, Grammar::TwoPointAttempt | Grammar::ExtraPoint | Grammar::FieldGoal | Grammar::BlockedFieldGoal) {
		candidate.success = patterns::kick_result(text)
			.map(|m| m.value)
			.or_else(|| (grammar == Grammar::TwoPointAttempt && candidate.flags.incomplete).then_some(false));
	}

	candidate
}

fn extract_yards(grammar: Grammar, text: &str, candidate: &mut PlayCandidate) {
	match grammar {
		Grammar::Kickoff | Grammar::OnsideKick | Grammar::MuffedKickoff | Grammar::Punt | Grammar::BlockedPunt => {
			candidate.kick_distance = patterns::kick_distance(text).map(|m| m.value);
			candidate.yards = candidate.kick_distance.map(Yards);
			candidate.return_yards = patterns::return_yards(text).map(|m| m.value);
		}
		Grammar::FieldGoal | Grammar::BlockedFieldGoal => {
			candidate.kick_distance = patterns::kick_distance(text).map(|m| m.value);
			candidate.return_yards = patterns::return_yards(text).map(|m| m.value);
		}
		Grammar::Interception => {
			candidate.yards = Some(Yards(0));
			candidate.return_yards = patterns::return_yards(text).map(|m| m.value);
		}
		Grammar::Timeout | Grammar::PenaltyNoPlay | Grammar::Penalty | Grammar::ExtraPoint => {}
		Grammar::TwoPointAttempt | Grammar::Safety | Grammar::Sack | Grammar::Pass | Grammar::Kneel | Grammar::Rush => {
			candidate.yards = patterns::yards(text).map(|m| m.value);
			if candidate.flags.fumble {
				candidate.return_yards = patterns::return_yards(text).map(|m| m.value);
			}
		}
	}
}

/// The player in front of the verb first, then everyone else in order of appearance.
fn extract_actors(text: &str, verb_start: usize) -> Vec<String> {
	let mut actors: Vec<String> = Vec::new();
	if let Some(m) = patterns::leading_actor(text, verb_start) {
		actors.push(m.value);
	}
	for m in patterns::player_names(text) {
		if !actors.contains(&m.value) {
			actors.push(m.value);
		}
	}
	actors
}

fn extract_flags(text: &str) -> PlayFlags {
	PlayFlags {
		sack: Marker::Sack.contains(text),
		interception: Marker::Interception.contains(text),
		fumble: Marker::Fumble.contains(text),
		fumble_lost: Marker::FumbleLost.contains(text),
		incomplete: Marker::Incomplete.contains(text),
		touchdown: Marker::Touchdown.contains(text),
		safety: Marker::Safety.contains(text),
		touchback: Marker::Touchback.contains(text),
		blocked: Marker::Blocked.contains(text),
		muffed: Marker::Muffed.contains(text),
		onside: Marker::Onside.contains(text),
		no_play: Marker::NoPlay.contains(text),
		fair_catch: Marker::FairCatch.contains(text),
		turnover_on_downs: Marker::TurnoverOnDowns.contains(text),
	}
}
