use super::Match;
use crate::schema::{GameClock, Quarter};
use once_cell::sync::Lazy;
use regex::Regex;

/// `(15:00)`, `(4:29)` or `(14:32 - 1st)`.
pub static CLOCK_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d{1,2}):(\d{2})(?:\s*-\s*(1st|2nd|3rd|4th|\d?OT))?\)").unwrap());

/// First clock marker, normalized to seconds remaining in the period.
///
/// Minutes are not range checked here; seconds of 60 or more are not a clock.
pub fn clock(text: &str) -> Option<Match<GameClock>> {
	CLOCK_MARKER.captures_iter(text).find_map(|caps| {
		let whole = caps.get(0)?;
		let minutes = caps[1].parse::<u16>().ok()?;
		let seconds = caps[2].parse::<u16>().ok()?;
		if seconds >= 60 {
			return None;
		}
		Some(Match::from((GameClock::from_seconds(minutes * 60 + seconds), whole)))
	})
}

/// Period printed inside a clock marker, e.g. the `2nd` in `(0:05 - 2nd)`.
pub fn clock_quarter(text: &str) -> Option<Match<Quarter>> {
	CLOCK_MARKER.captures_iter(text).find_map(|caps| {
		let quarter = caps.get(3)?;
		let value = quarter.as_str().parse::<Quarter>().ok()?;
		Some(Match::from((value, quarter)))
	})
}
