use super::Match;
use crate::schema::{YardLine, Yards};
use once_cell::sync::Lazy;
use regex::Regex;

static INCOMPLETE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bincomplete\b").unwrap());
static FOR_YARDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bfor\s+(-?\d+)\s+yards?\b").unwrap());
static FOR_LOSS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bfor\s+(?:a\s+)?loss\s+of\s+(\d+)\s+yards?\b").unwrap());
static NO_GAIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bfor\s+no\s+gain\b").unwrap());

static KICK_DISTANCE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"(?i)\b(?:punts?|kicks?(?:\s+off)?|kickoff)\s+(\d+)\s+yards?\b|\bfrom\s+(\d+)\s+yards?\b|\b(\d+)\s*-?\s*yards?\s+(?:field\s+goal|fg)\b").unwrap()
});

static RETURN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\breturn(?:s|ed)?\b(?:[^;]{0,60}?\bfor)?\s+(-?\d+)\s+yards?\b").unwrap());

static SPOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?i:to|at)\s+(?i:the\s+)?(?:([A-Z]{2,4})\s?(\d{1,2})\b|(50)\b)").unwrap());

fn parse_signed(m: regex::Match<'_>) -> Option<i32> {
	m.as_str().parse::<i32>().ok()
}

/// Signed yards gained on the play.
///
/// Incomplete passes are zero. `for loss of N yards` is `-N`.
pub fn yards(text: &str) -> Option<Match<Yards>> {
	if let Some(m) = INCOMPLETE.find(text) {
		return Some(Match::from((Yards(0), m)));
	}
	if let Some(caps) = FOR_YARDS.captures(text) {
		let value = parse_signed(caps.get(1)?)?;
		return Some(Match::from((Yards(value), caps.get(0)?)));
	}
	if let Some(caps) = FOR_LOSS.captures(text) {
		let value = parse_signed(caps.get(1)?)?;
		return Some(Match::from((Yards(-value), caps.get(0)?)));
	}
	NO_GAIN.find(text).map(|m| Match::from((Yards(0), m)))
}

/// Distance of a punt, kickoff or field goal attempt.
pub fn kick_distance(text: &str) -> Option<Match<i32>> {
	let caps = KICK_DISTANCE.captures(text)?;
	let value = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3))?;
	Some(Match::from((parse_signed(value)?, caps.get(0)?)))
}

/// Return yardage on a kick or turnover.
pub fn return_yards(text: &str) -> Option<Match<i32>> {
	let caps = RETURN.captures(text)?;
	Some(Match::from((parse_signed(caps.get(1)?)?, caps.get(0)?)))
}

/// Last printed ball spot (`to the CMU20`, `at UWL30`) starting at or after byte `from`.
pub fn spot_after(text: &str, from: usize) -> Option<Match<YardLine>> {
	let tail = text.get(from..)?;
	SPOT.captures_iter(tail)
		.filter_map(|caps| {
			let whole = caps.get(0)?;
			let line = match (caps.get(1), caps.get(2), caps.get(3)) {
				(Some(team), Some(line), _) => YardLine::new(Some(team.as_str().to_string()), line.as_str().parse().ok()?).ok()?,
				(_, _, Some(_)) => YardLine::new(None, 50).ok()?,
				_ => return None,
			};
			Some(Match::new(line, from + whole.start(), from + whole.end()))
		})
		.last()
}
