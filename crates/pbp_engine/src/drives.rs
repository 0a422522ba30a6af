use crate::config::DriveNumbering;
use crate::schema::{Drive, DriveEndReason, PlayType, ScoringEventType, Side, TrackedPlay, Turnover};

/// Groups tracked plays into drives.
///
/// A drive starts on the first play, whenever possession differs from the
/// previous play, and whenever the quarter changes.
pub fn aggregate(plays: &[TrackedPlay], numbering: DriveNumbering) -> Vec<Drive> {
	let mut drives = Vec::new();
	let mut numbers = DriveNumbers::new(numbering);
	let mut current: Vec<&TrackedPlay> = Vec::new();

	for play in plays {
		if current.last().is_some_and(|previous| starts_new_drive(previous, play)) {
			drives.push(close(&current, Some(play), &mut numbers));
			current.clear();
		}
		current.push(play);
	}
	if !current.is_empty() {
		drives.push(close(&current, None, &mut numbers));
	}

	drives
}

fn starts_new_drive(previous: &TrackedPlay, play: &TrackedPlay) -> bool {
	play.possession != previous.possession || play.quarter != previous.quarter
}

struct DriveNumbers {
	numbering: DriveNumbering,
	total: u32,
	away: u32,
	home: u32,
}

impl DriveNumbers {
	fn new(numbering: DriveNumbering) -> Self {
		Self {
			numbering,
			total: 0,
			away: 0,
			home: 0,
		}
	}

	fn next(&mut self, team: Side) -> u32 {
		self.total += 1;
		let counter = match team {
			Side::Away => &mut self.away,
			Side::Home => &mut self.home,
		};
		*counter += 1;

		match self.numbering {
			DriveNumbering::Cumulative => self.total,
			DriveNumbering::PerTeam => *counter,
		}
	}
}

/// `next` is the first play of the following drive, if any.
fn close(plays: &[&TrackedPlay], next: Option<&TrackedPlay>, numbers: &mut DriveNumbers) -> Drive {
	let first = plays[0];
	let last = plays[plays.len() - 1];
	let team = first.possession;

	Drive {
		number: numbers.next(team),
		team,
		plays: plays.iter().map(|play| play.id).collect(),
		start_quarter: first.quarter,
		end_quarter: last.quarter,
		start_clock: first.clock,
		play_count: plays.len(),
		net_yards: last.field_position_end - first.field_position_start,
		start_field_position: first.field_position_start,
		end_field_position: last.field_position_end,
		end_reason: end_reason(team, plays, next),
	}
}

/// Reason taken from the last play that decided the drive. Timeouts,
/// penalties and unreadable lines are looked past. When that play decides
/// nothing, the drive ended on how the next one began, or at the end of the
/// period when there is no next drive in the same quarter.
fn end_reason(team: Side, plays: &[&TrackedPlay], next: Option<&TrackedPlay>) -> DriveEndReason {
	let last = plays.iter().rev().find(|play| !matches!(play.play_type(), PlayType::Timeout | PlayType::Penalty | PlayType::Unknown));
	let period = plays.last().map(|play| play.quarter);

	last.and_then(|play| terminal_reason(team, play))
		.or_else(|| next.filter(|next| Some(next.quarter) == period).map(taken_over))
		.unwrap_or(DriveEndReason::EndOfHalf)
}

fn terminal_reason(team: Side, play: &TrackedPlay) -> Option<DriveEndReason> {
	if let Some(scoring) = play.scoring {
		return Some(match scoring.event_type {
			ScoringEventType::Safety => DriveEndReason::SafetyConceded,
			ScoringEventType::FieldGoal => DriveEndReason::FieldGoal,
			ScoringEventType::ExtraPoint | ScoringEventType::TwoPointConversion => DriveEndReason::Touchdown,
			_ if scoring.is_touchdown() && scoring.team == team => DriveEndReason::Touchdown,
			_ => DriveEndReason::Turnover,
		});
	}

	match play.turnover {
		Some(Turnover::Downs) => return Some(DriveEndReason::TurnoverOnDowns),
		Some(_) => return Some(DriveEndReason::Turnover),
		None => {}
	}

	match play.play_type() {
		// A try only follows the same team's touchdown, made or missed.
		PlayType::Pat => Some(DriveEndReason::Touchdown),
		PlayType::Punt if play.changes_possession() => Some(DriveEndReason::Punt),
		_ => None,
	}
}

/// The play that opened the next drive took the ball away, which happens
/// when a return score is credited to the team that scored it.
fn taken_over(next: &TrackedPlay) -> DriveEndReason {
	match next.turnover {
		Some(Turnover::Downs) => DriveEndReason::TurnoverOnDowns,
		None if next.play_type() == PlayType::Punt => DriveEndReason::Punt,
		_ => DriveEndReason::Turnover,
	}
}
