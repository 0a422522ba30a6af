use super::Match;
use crate::schema::Formation;
use once_cell::sync::Lazy;
use regex::Regex;

static FORMATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(no\s+huddle\s*-\s*shotgun|no\s+huddle|shotgun|pistol|under\s+center)\b").unwrap());

/// `Smith,John`
static COMMA_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([A-Z][a-z][a-zA-Z'\-]*,[A-Z][a-z][a-zA-Z'\-]*)").unwrap());
/// `K.Cousins`, `J. Tucker`
static INITIAL_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([A-Z]\.\s?[A-Z][a-z][a-zA-Z'\-]*)").unwrap());
/// `Tackle by (HOU D98) Myles Parker`, `complete to Joe Smith`
static BY_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?i:by|to)\s+(?:\([^)]*\)\s*)?([A-Z][a-z][a-zA-Z'\-]*(?:\s[A-Z][a-z][a-zA-Z'\-]*){1,2})\b").unwrap());

const MAX_LEADING_NAME_WORDS: usize = 3;

pub fn formation(text: &str) -> Option<Match<Formation>> {
	let caps = FORMATION.captures(text)?;
	let m = caps.get(1)?;
	let normalized: String = m.as_str().to_lowercase().split_whitespace().collect();
	let value = match normalized.as_str() {
		"nohuddle-shotgun" => Formation::NoHuddleShotgun,
		"nohuddle" => Formation::NoHuddle,
		"shotgun" => Formation::Shotgun,
		"pistol" => Formation::Pistol,
		_ => Formation::UnderCenter,
	};
	Some(Match::from((value, m)))
}

/// Player names in order of appearance, overlapping spans collapsed.
pub fn player_names(text: &str) -> Vec<Match<String>> {
	let mut names: Vec<Match<String>> = Vec::new();

	for re in [&*COMMA_NAME, &*INITIAL_NAME, &*BY_NAME] {
		for caps in re.captures_iter(text) {
			if let Some(m) = caps.get(1) {
				names.push(Match::from((m.as_str().to_string(), m)));
			}
		}
	}

	names.sort_by_key(|m| (m.start, std::cmp::Reverse(m.end)));
	names.dedup_by(|later, earlier| later.start < earlier.end);
	names
}

/// Capitalized words directly before `end`, e.g. `Vera Trejo` in
/// `(04:29) Vera Trejo field goal`. Stops at parentheses, digits or
/// lowercase words.
pub fn leading_actor(text: &str, end: usize) -> Option<Match<String>> {
	let prefix = text.get(..end)?;
	let trimmed_end = prefix.trim_end().len();

	let mut start = trimmed_end;
	let mut words = 0;
	for (offset, word) in word_starts(&prefix[..trimmed_end]).into_iter().rev() {
		let is_name_word = word.chars().next().is_some_and(|c| c.is_ascii_uppercase())
			&& word.chars().all(|c| c.is_ascii_alphabetic() || matches!(c, '.' | ',' | '\'' | '-'))
			&& word.chars().any(|c| c.is_ascii_lowercase());
		if !is_name_word || words == MAX_LEADING_NAME_WORDS {
			break;
		}
		start = offset;
		words += 1;
	}

	(words > 0).then(|| Match::new(prefix[start..trimmed_end].to_string(), start, trimmed_end))
}

fn word_starts(text: &str) -> Vec<(usize, &str)> {
	let mut words = Vec::new();
	let mut word_start = None;
	for (i, c) in text.char_indices() {
		match (c.is_whitespace(), word_start) {
			(true, Some(s)) => {
				words.push((s, &text[s..i]));
				word_start = None;
			}
			(false, None) => word_start = Some(i),
			_ => {}
		}
	}
	if let Some(s) = word_start {
		words.push((s, &text[s..]));
	}
	words
}
