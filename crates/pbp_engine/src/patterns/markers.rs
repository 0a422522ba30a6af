use super::Match;
use crate::schema::Penalty;
use once_cell::sync::Lazy;
use regex::Regex;

/// Outcome keywords that may appear anywhere in a play line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
	Sack,
	Interception,
	Fumble,
	FumbleLost,
	Incomplete,
	Touchdown,
	Safety,
	Touchback,
	Blocked,
	Muffed,
	Onside,
	NoPlay,
	FairCatch,
	TurnoverOnDowns,
	Declined,
}

impl Marker {
	pub const ALL: [Marker; 15] = [
		Marker::Sack,
		Marker::Interception,
		Marker::Fumble,
		Marker::FumbleLost,
		Marker::Incomplete,
		Marker::Touchdown,
		Marker::Safety,
		Marker::Touchback,
		Marker::Blocked,
		Marker::Muffed,
		Marker::Onside,
		Marker::NoPlay,
		Marker::FairCatch,
		Marker::TurnoverOnDowns,
		Marker::Declined,
	];

	fn pattern(self) -> &'static str {
		match self {
			Marker::Sack => r"(?i)\bsack(?:ed|s)?\b",
			Marker::Interception => r"(?i)\bintercept(?:ed|ion|s)?\b",
			Marker::Fumble => r"(?i)\bfumble[sd]?\b",
			Marker::FumbleLost => r"(?i)\b(?:fumble\s+lost|lost\s+fumble)\b",
			Marker::Incomplete => r"(?i)\bincomplete\b",
			Marker::Touchdown => r"(?i)\btouchdown\b|\bTD\b",
			Marker::Safety => r"(?i)\bsafety\b",
			Marker::Touchback => r"(?i)\btouchback\b",
			Marker::Blocked => r"(?i)\bblocked\b",
			Marker::Muffed => r"(?i)\bmuff(?:ed|s)?\b",
			Marker::Onside => r"(?i)\bon-?side\b",
			Marker::NoPlay => r"(?i)\bno\s+play\b",
			Marker::FairCatch => r"(?i)\bfair\s+catch\b",
			Marker::TurnoverOnDowns => r"(?i)\bturnover\s+on\s+downs\b",
			Marker::Declined => r"(?i)\bdeclined\b",
		}
	}

	fn regex(self) -> &'static Regex {
		&MARKER_REGEXES[self as usize]
	}

	pub fn contains(self, text: &str) -> bool {
		self.regex().is_match(text)
	}
}

static MARKER_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| Marker::ALL.iter().map(|marker| Regex::new(marker.pattern()).unwrap()).collect());

static KICK_RESULT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:(no\s+good|missed|fail(?:ed|s)?|blocked|unsuccessful)|(good|successful|succeeds))\b").unwrap());

static PENALTY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?i:penalty)\b(?:\s+(?i:on))?\s*(?:([A-Z]{2,4})\b)?").unwrap());
static PENALTY_YARDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})\s+yards?\b").unwrap());

static RECOVERED_BY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?i:recovered\s+by)\s+([A-Z]{2,4})\b").unwrap());

/// `true` for GOOD / successful, `false` for NO GOOD / missed / blocked.
pub fn kick_result(text: &str) -> Option<Match<bool>> {
	let caps = KICK_RESULT.captures(text)?;
	let whole = caps.get(0)?;
	Some(Match::from((caps.get(2).is_some(), whole)))
}

/// Penalty details: offending team when printed, first yardage after the
/// keyword and whether it was declined.
pub fn penalty(text: &str) -> Option<Match<Penalty>> {
	let caps = PENALTY.captures(text)?;
	let whole = caps.get(0)?;
	let tail = &text[whole.end()..];

	let value = Penalty {
		team: caps.get(1).map(|m| m.as_str().to_string()),
		yards: PENALTY_YARDS.captures(tail).and_then(|c| c[1].parse().ok()),
		declined: Marker::Declined.contains(tail),
	};
	Some(Match::from((value, whole)))
}

/// Abbreviation of the team that recovered a loose ball.
pub fn recovered_by(text: &str) -> Option<Match<String>> {
	let caps = RECOVERED_BY.captures(text)?;
	let m = caps.get(1)?;
	Some(Match::from((m.as_str().to_string(), m)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_markers() {
		let test_cases = vec![
			("Jones,Ty sacked for loss of 7 yards", Marker::Sack),
			("pass intercepted by Ray,Al at CMU30", Marker::Interception),
			("Smith,John rush for 3 yards, FUMBLE, recovered by CMU", Marker::Fumble),
			("pass incomplete to Doe,Jane", Marker::Incomplete),
			("rush for 12 yards, TOUCHDOWN", Marker::Touchdown),
			("tackled in end zone, SAFETY", Marker::Safety),
			("kickoff 65 yards to the CMU0, Touchback", Marker::Touchback),
			("punt BLOCKED by Lee,Bo", Marker::Blocked),
			("kickoff 60 yards, muffed by Doe,Jane", Marker::Muffed),
			("Doe,Jane onside kick 12 yards", Marker::Onside),
			("PENALTY on UWL, False Start, 5 yards - NO PLAY", Marker::NoPlay),
			("punts 40 yards to the CMU20, fair catch by Lee,Bo", Marker::FairCatch),
			("rush for 1 yard, turnover on downs", Marker::TurnoverOnDowns),
			("PENALTY on CMU, Holding, declined", Marker::Declined),
		];

		for (input, marker) in test_cases {
			assert!(marker.contains(input), "Failed for input: {}", input);
		}
	}

	#[test]
	fn test_markers_respect_word_boundaries() {
		assert!(!Marker::Sack.contains("Sackett,Joe rush for 4 yards"));
		assert!(!Marker::Touchdown.contains("TDavis rush for 4 yards"));
		assert!(!Marker::FumbleLost.contains("FUMBLE, recovered by UWL"));
	}

	#[test]
	fn test_find_reports_span() {
		let text = "rush for 12 yards, TOUCHDOWN";
		let m = Marker::Touchdown.find(text).unwrap();
		assert_eq!(&text[m.span()], "TOUCHDOWN");
	}

	#[test]
	fn test_kick_result() {
		let test_cases = vec![
			("Vera Trejo field goal attempt from 38 yards GOOD", Some(true)),
			("J.Tucker extra point is GOOD, Center-N.Moore", Some(true)),
			("kick attempt NO GOOD", Some(false)),
			("45 yard field goal is No Good, Wide Right", Some(false)),
			("field goal attempt from 52 yards MISSED", Some(false)),
			("TWO-POINT CONVERSION ATTEMPT. pass incomplete. ATTEMPT FAILS.", Some(false)),
			("TWO-POINT CONVERSION ATTEMPT. rush. ATTEMPT SUCCEEDS.", Some(true)),
			("field goal attempt from 44 yards", None),
		];

		for (input, expected) in test_cases {
			assert_eq!(kick_result(input).map(|m| m.value), expected, "Failed for input: {}", input);
		}
	}

	#[test]
	fn test_penalty() {
		let m = penalty("PENALTY on TB-T.Smith, Offensive Holding, 10 yards, enforced at TB 20 - No Play.").unwrap();
		assert_eq!(m.value.team.as_deref(), Some("TB"));
		assert_eq!(m.value.yards, Some(10));
		assert!(!m.value.declined);

		let m = penalty("Smith,John rush for 4 yards. Penalty on CMU, Holding, declined").unwrap();
		assert_eq!(m.value.team.as_deref(), Some("CMU"));
		assert_eq!(m.value.yards, None);
		assert!(m.value.declined);

		assert!(penalty("Smith,John rush for 4 yards").is_none());
	}

	#[test]
	fn test_recovered_by() {
		assert_eq!(recovered_by("FUMBLE, recovered by CMU-J.Doe at UWL30").map(|m| m.value), Some("CMU".to_string()));
		assert_eq!(recovered_by("FUMBLE, RECOVERED by UWL at UWL30").map(|m| m.value), Some("UWL".to_string()));
		assert_eq!(recovered_by("FUMBLE, out of bounds"), None);
	}
}
