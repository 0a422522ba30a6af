use super::Match;
use crate::schema::{DownAndDistance, YardLine};
use once_cell::sync::Lazy;
use regex::Regex;

static DOWN_DISTANCE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"\b(\d)(?i:st|nd|rd|th)\s+(?i:and|&)\s+(\d{1,2}|(?i:goal))\b(?:\s+(?i:at)\s+(?:([A-Z]{2,4})\s?(\d{1,2})\b|(50)\b))?").unwrap()
});

/// First down/distance header, with the line of scrimmage when one follows.
pub fn down_and_distance(text: &str) -> Option<Match<DownAndDistance>> {
	let caps = DOWN_DISTANCE.captures(text)?;
	let whole = caps.get(0)?;

	let down = caps[1].parse::<u8>().ok()?;
	let (distance, goal_to_go) = if caps[2].eq_ignore_ascii_case("goal") {
		(None, true)
	} else {
		(Some(caps[2].parse::<u8>().ok()?), false)
	};

	let line_of_scrimmage = match (caps.get(3), caps.get(4), caps.get(5)) {
		(Some(team), Some(line), _) => line.as_str().parse::<u8>().ok().and_then(|line| YardLine::new(Some(team.as_str().to_string()), line).ok()),
		(_, _, Some(_)) => YardLine::new(None, 50).ok(),
		_ => None,
	};

	Some(Match::from((
		DownAndDistance {
			down,
			distance,
			goal_to_go,
			line_of_scrimmage,
		},
		whole,
	)))
}
