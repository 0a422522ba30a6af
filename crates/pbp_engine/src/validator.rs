use crate::schema::{Drive, ParseIssue, Points, Quarter, ReasonCode, Score, Severity, TrackedPlay, OPPONENT_GOAL_LINE, OWN_GOAL_LINE};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Run summary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
	pub total: usize,
	pub classified: usize,
	/// Plays and drives dropped from the output.
	pub rejected: usize,
	pub warnings: usize,
	/// `classified / total`, 0 for an empty run.
	pub success_rate: f64,
}

/// Output of a validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validation {
	pub plays: Vec<TrackedPlay>,
	pub drives: Vec<Drive>,
	/// Ordered by play id; drive issues last.
	pub issues: Vec<ParseIssue>,
	pub metrics: Metrics,
}

/// Checks every play and drive, drops rejected records and reports metrics.
///
/// `reported` holds issues raised earlier in the pipeline; they are merged
/// into the log unchanged.
#[allow(clippy::cast_precision_loss)]
pub fn validate(plays: Vec<TrackedPlay>, drives: Vec<Drive>, reported: Vec<ParseIssue>) -> Validation {
	let total = plays.len();
	let classified = plays.iter().filter(|play| play.candidate.is_classified()).count();

	let mut issues = reported;
	let mut accepted = Vec::with_capacity(plays.len());
	let mut previous: Option<&TrackedPlay> = None;
	let mut last_quarter: Option<Quarter> = None;

	for play in &plays {
		let play_issues = check_play(play, previous, last_quarter);
		let rejected = play_issues.iter().any(ParseIssue::is_rejection);
		issues.extend(play_issues);

		if !rejected {
			last_quarter = Some(play.quarter);
			accepted.push(play.clone());
		}
		previous = Some(play);
	}
	issues.sort_by_key(|issue| issue.play_id.unwrap_or(usize::MAX));

	let (drives, drive_issues) = check_drives(drives, &accepted);
	let dropped_drives = drive_issues.len();
	issues.extend(drive_issues);

	let warnings = issues.iter().filter(|issue| issue.severity == Severity::Warning).count();
	let metrics = Metrics {
		total,
		classified,
		rejected: (total - accepted.len()) + dropped_drives,
		warnings,
		success_rate: if total == 0 { 0.0 } else { classified as f64 / total as f64 },
	};

	Validation {
		plays: accepted,
		drives,
		issues,
		metrics,
	}
}

fn check_play(play: &TrackedPlay, previous: Option<&TrackedPlay>, last_quarter: Option<Quarter>) -> Vec<ParseIssue> {
	let mut issues = Vec::new();
	let raw = play.candidate.raw_text.as_str();
	let id = Some(play.id);
	let warn = |reason, detail: String| ParseIssue::warning(reason, id, raw, detail);
	let reject = |reason, detail: String| ParseIssue::rejected(reason, id, raw, detail);

	if !play.candidate.is_classified() {
		issues.push(warn(ReasonCode::UnclassifiedPlay, "no play grammar matched".to_string()));
	}

	if let Some(yards) = play.candidate.yards.filter(|yards| !yards.is_realistic()) {
		issues.push(warn(ReasonCode::YardsOutOfRange, format!("{} is outside -99..99", yards.value())));
	}

	if let Some(clock) = play.clock.filter(|clock| !clock.is_within_period()) {
		issues.push(warn(ReasonCode::ClockOutOfRange, format!("{} is longer than a period", clock)));
	}

	if let Some(previous) = previous.filter(|previous| previous.quarter == play.quarter) {
		if let (Some(before), Some(now)) = (previous.clock, play.clock) {
			if now > before {
				issues.push(warn(ReasonCode::ClockRegression, format!("clock went from {} back to {}", before, now)));
			}
		}
	}

	if play.quarter.number() == 0 {
		issues.push(reject(ReasonCode::InvalidQuarter, "quarter must be 1 or later".to_string()));
	} else if let Some(last) = last_quarter {
		if play.quarter < last {
			issues.push(reject(ReasonCode::QuarterRegression, format!("quarter went from {} back to {}", last, play.quarter)));
		} else if play.quarter > last.next() && !play.quarter.is_overtime() {
			issues.push(reject(ReasonCode::QuarterSkipped, format!("quarter jumped from {} to {}", last, play.quarter)));
		}
	}

	for (label, field_position) in [("start", play.field_position_start), ("end", play.field_position_end)] {
		if !(OWN_GOAL_LINE..=OPPONENT_GOAL_LINE).contains(&field_position) {
			issues.push(reject(ReasonCode::FieldPositionOutOfRange, format!("{} field position {} is outside 1-100", label, field_position)));
		}
	}

	if let Some(down) = play.down().filter(|down| !(1..=4).contains(down)) {
		issues.push(reject(ReasonCode::InvalidDown, format!("down {} is not 1-4", down)));
	}

	let before = previous.map_or_else(Score::default, |previous| previous.score);
	if let Some((reason, detail)) = check_score(before, play.score) {
		issues.push(reject(reason, detail));
	}

	issues
}

fn check_score(before: Score, after: Score) -> Option<(ReasonCode, String)> {
	if after.away < before.away || after.home < before.home {
		return Some((ReasonCode::ScoreRegression, format!("score went from {}-{} to {}-{}", before.away, before.home, after.away, after.home)));
	}

	let away = after.away - before.away;
	let home = after.home - before.home;
	let legal = match (away, home) {
		(0, 0) => true,
		(delta, 0) | (0, delta) => Points::is_legal_delta(delta),
		_ => false,
	};
	(!legal).then(|| (ReasonCode::IllegalScoreDelta, format!("score changed by {}-{} in one play", away, home)))
}

/// Removes rejected plays from drives and checks that the accepted plays
/// are partitioned by the drives in order.
fn check_drives(drives: Vec<Drive>, accepted: &[TrackedPlay]) -> (Vec<Drive>, Vec<ParseIssue>) {
	let accepted_ids: HashSet<usize> = accepted.iter().map(|play| play.id).collect();
	let mut expected = accepted.iter().map(|play| play.id).peekable();
	let mut kept = Vec::with_capacity(drives.len());
	let mut issues = Vec::new();

	for mut drive in drives {
		drive.plays.retain(|id| accepted_ids.contains(id));
		if drive.plays.is_empty() {
			continue;
		}
		drive.play_count = drive.plays.len();

		let in_order = drive.plays.iter().all(|id| expected.next_if_eq(id).is_some());
		let same_team = accepted.iter().filter(|play| drive.plays.contains(&play.id)).all(|play| play.possession == drive.team);
		if in_order && same_team {
			kept.push(drive);
		} else {
			issues.push(ParseIssue::rejected(
				ReasonCode::DriveMembership,
				None,
				format!("drive {}", drive.number),
				format!("drive {} does not cover plays {:?} in order for one team", drive.number, drive.plays),
			));
		}
	}

	if let Some(missing) = expected.next() {
		issues.push(ParseIssue::rejected(ReasonCode::DriveMembership, Some(missing), "", format!("play {} belongs to no drive", missing)));
	}

	(kept, issues)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::DriveNumbering;
	use crate::drives;
	use crate::schema::{GameClock, PlayCandidate, PlayType, RawPlayUnit, Side, Yards};

	fn play(id: usize, quarter: u8, seconds: u16) -> TrackedPlay {
		let unit = RawPlayUnit::new(Quarter::new(quarter).unwrap(), format!("play {}", id));
		let mut candidate = PlayCandidate::unknown(&unit);
		candidate.play_type = PlayType::Rush;
		candidate.yards = Some(Yards(4));
		TrackedPlay {
			id,
			candidate,
			quarter: unit.quarter,
			clock: Some(GameClock::from_seconds(seconds)),
			possession: Side::Away,
			field_position_start: 30,
			field_position_end: 34,
			scoring: None,
			turnover: None,
			possession_after: Side::Away,
			score: Score::default(),
		}
	}

	fn run(plays: Vec<TrackedPlay>) -> Validation {
		let drives = drives::aggregate(&plays, DriveNumbering::Cumulative);
		validate(plays, drives, Vec::new())
	}

	fn reasons(validation: &Validation) -> Vec<(Severity, ReasonCode)> {
		validation.issues.iter().map(|issue| (issue.severity, issue.reason)).collect()
	}

	#[test]
	fn test_clean_plays_pass() {
		let validation = run(vec![play(0, 1, 900), play(1, 1, 870), play(2, 2, 900)]);
		assert!(validation.issues.is_empty());
		assert_eq!(validation.plays.len(), 3);
		assert_eq!(validation.metrics.total, 3);
		assert_eq!(validation.metrics.classified, 3);
		assert_eq!(validation.metrics.success_rate, 1.0);
	}

	#[test]
	fn test_unknown_play_is_warning_and_kept() {
		let mut unknown = play(1, 1, 860);
		unknown.candidate.play_type = PlayType::Unknown;

		let validation = run(vec![play(0, 1, 900), unknown]);
		assert_eq!(reasons(&validation), vec![(Severity::Warning, ReasonCode::UnclassifiedPlay)]);
		assert_eq!(validation.plays.len(), 2);
		assert_eq!(validation.metrics.warnings, 1);
		assert_eq!(validation.metrics.success_rate, 0.5);
	}

	#[test]
	fn test_field_position_out_of_range_is_rejected() {
		let mut bad = play(1, 1, 860);
		bad.field_position_start = 0;

		let validation = run(vec![play(0, 1, 900), bad, play(2, 1, 840)]);
		assert_eq!(reasons(&validation), vec![(Severity::Rejected, ReasonCode::FieldPositionOutOfRange)]);
		assert_eq!(validation.plays.iter().map(|p| p.id).collect::<Vec<_>>(), vec![0, 2]);
		assert_eq!(validation.drives[0].plays, vec![0, 2]);
		assert_eq!(validation.drives[0].play_count, 2);
		assert_eq!(validation.metrics.rejected, 1);
		assert_eq!(validation.issues[0].raw_text, "play 1");
	}

	#[test]
	fn test_invalid_down_is_rejected() {
		let mut bad = play(0, 1, 900);
		bad.candidate.down = Some(5);
		assert_eq!(reasons(&run(vec![bad])), vec![(Severity::Rejected, ReasonCode::InvalidDown)]);
	}

	#[test]
	fn test_clock_checks() {
		let validation = run(vec![play(0, 1, 600), play(1, 1, 620), play(2, 2, 960)]);
		assert_eq!(
			reasons(&validation),
			vec![(Severity::Warning, ReasonCode::ClockRegression), (Severity::Warning, ReasonCode::ClockOutOfRange)]
		);
		assert_eq!(validation.plays.len(), 3);
	}

	#[test]
	fn test_quarter_checks() {
		let validation = run(vec![play(0, 2, 600), play(1, 1, 500), play(2, 4, 900), play(3, 3, 900), play(4, 5, 600)]);
		assert_eq!(
			reasons(&validation),
			vec![(Severity::Rejected, ReasonCode::QuarterRegression), (Severity::Rejected, ReasonCode::QuarterSkipped)]
		);
		assert_eq!(validation.plays.iter().map(|p| p.id).collect::<Vec<_>>(), vec![0, 3, 4]);
		assert_eq!(validation.metrics.rejected, 2);
	}

	#[test]
	fn test_skipped_quarter_is_rejected() {
		let validation = run(vec![play(0, 1, 600), play(1, 3, 900), play(2, 1, 500)]);
		assert_eq!(reasons(&validation), vec![(Severity::Rejected, ReasonCode::QuarterSkipped)]);

		let quarters: Vec<u8> = validation.plays.iter().map(|p| p.quarter.number()).collect();
		assert_eq!(quarters, vec![1, 1]);
		assert!(validation.plays.windows(2).all(|pair| pair[1].quarter <= pair[0].quarter.next()));
	}

	#[test]
	fn test_zero_quarter_is_rejected() {
		let mut bad = play(0, 1, 600);
		bad.quarter = serde_json::from_str("0").unwrap();
		assert_eq!(reasons(&run(vec![bad])), vec![(Severity::Rejected, ReasonCode::InvalidQuarter)]);
	}

	#[test]
	fn test_score_checks() {
		let mut touchdown = play(1, 1, 800);
		touchdown.score = Score::new(6, 0);
		let mut regression = play(2, 1, 700);
		regression.score = Score::new(3, 0);
		let mut jump = play(3, 1, 600);
		jump.score = Score::new(3, 4);

		let validation = run(vec![play(0, 1, 900), touchdown, regression, jump]);
		assert_eq!(
			reasons(&validation),
			vec![(Severity::Rejected, ReasonCode::ScoreRegression), (Severity::Rejected, ReasonCode::IllegalScoreDelta)]
		);
	}

	#[test]
	fn test_yards_out_of_range_is_warning() {
		let mut long = play(0, 1, 900);
		long.candidate.yards = Some(Yards(105));
		assert_eq!(reasons(&run(vec![long])), vec![(Severity::Warning, ReasonCode::YardsOutOfRange)]);
	}

	#[test]
	fn test_reported_issues_are_merged() {
		let plays = vec![play(0, 1, 900), play(1, 1, 880)];
		let drives = drives::aggregate(&plays, DriveNumbering::Cumulative);
		let reported = vec![ParseIssue::warning(ReasonCode::FieldPositionMismatch, Some(1), "play 1", "mismatch")];

		let validation = validate(plays, drives, reported);
		assert_eq!(validation.metrics.warnings, 1);
		assert_eq!(validation.issues[0].play_id, Some(1));
	}

	#[test]
	fn test_drive_for_wrong_team_is_rejected() {
		let plays = vec![play(0, 1, 900), play(1, 1, 880)];
		let mut drives = drives::aggregate(&plays, DriveNumbering::Cumulative);
		drives[0].team = Side::Home;

		let validation = validate(plays, drives, Vec::new());
		assert!(validation.drives.is_empty());
		assert_eq!(reasons(&validation), vec![(Severity::Rejected, ReasonCode::DriveMembership)]);
		assert_eq!(validation.metrics.rejected, 1);
		assert_eq!(validation.plays.len(), 2);
	}

	#[test]
	fn test_empty_input() {
		let validation = validate(Vec::new(), Vec::new(), Vec::new());
		assert_eq!(validation.metrics, Metrics::default());
	}
}
