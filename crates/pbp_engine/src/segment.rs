//! Splits extracted page text into `RawPlayUnit`s.

use crate::patterns::{down_and_distance, CLOCK_MARKER};
use crate::schema::{Quarter, RawPlayUnit};
use once_cell::sync::Lazy;
use regex::Regex;

static PERIOD_HEADER: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"(?i)^(?:start\s+of\s+(?:the\s+)?)?(?:(1st|2nd|3rd|4th|first|second|third|fourth)\s+(?:quarter|qtr|period)|(\d?OT|overtime)(?:\s+period)?)$").unwrap()
});

static END_OF_PERIOD: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(?i)^end\s+of\s+(?:the\s+)?(?:1st|2nd|3rd|4th|first|second|third|fourth|\d?ot|overtime|regulation|half|game)\b").unwrap());

static DRIVE_SUMMARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:total\s+\d+\s+plays?\b|time\s+of\s+possession\b|.*\bdrive\s+start(?:s|ed)?\s+at\b)").unwrap());

static TIMEOUT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^time\s*out\b").unwrap());

/// `Carnegie Mellon at 03:34`, a possession marker unless it names a play.
static AT_CLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bat\s+\d{1,2}:\d{2}\b").unwrap());

static PLAY_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:rush|pass|punt|kick|field\s+goal|penalty)").unwrap());

/// One unit per play.
///
/// A line carrying a clock marker or a down/distance header starts a new
/// unit; other lines continue the open one. A header line with no clock is
/// completed by the clock line right after it. Timeout lines are units of
/// their own, and drive summaries and possession markers are dropped.
pub fn split_into_play_units(text: &str) -> Vec<RawPlayUnit> {
	let mut segmenter = Segmenter::default();
	for line in text.lines() {
		segmenter.push_line(line);
	}
	segmenter.finish()
}

#[derive(Default)]
struct Segmenter {
	quarter: Quarter,
	open: Option<OpenUnit>,
	units: Vec<RawPlayUnit>,
}

struct OpenUnit {
	quarter: Quarter,
	text: String,
	has_clock: bool,
}

impl Segmenter {
	fn push_line(&mut self, line: &str) {
		let line = line.trim();
		if line.is_empty() {
			return;
		}

		if let Some(quarter) = period_header(line) {
			self.close();
			self.quarter = quarter;
			return;
		}
		if END_OF_PERIOD.is_match(line) {
			self.close();
			return;
		}

		let has_clock = CLOCK_MARKER.is_match(line);
		let has_header = down_and_distance(line).is_some();
		if !has_clock && !has_header {
			if TIMEOUT_LINE.is_match(line) {
				self.close();
				self.units.push(RawPlayUnit::new(self.quarter, line));
			} else if DRIVE_SUMMARY.is_match(line) || is_possession_marker(line) {
				self.close();
			} else {
				self.continue_with(line);
			}
			return;
		}

		let completes_header = has_clock && !has_header && self.open.as_ref().is_some_and(|open| !open.has_clock);
		if completes_header {
			self.continue_with(line);
			if let Some(open) = self.open.as_mut() {
				open.has_clock = true;
			}
			return;
		}

		self.close();
		self.open = Some(OpenUnit {
			quarter: self.quarter,
			text: line.to_string(),
			has_clock,
		});
	}

	fn continue_with(&mut self, line: &str) {
		match self.open.as_mut() {
			Some(open) => {
				open.text.push(' ');
				open.text.push_str(line);
			}
			None => {
				self.open = Some(OpenUnit {
					quarter: self.quarter,
					text: line.to_string(),
					has_clock: false,
				});
			}
		}
	}

	fn close(&mut self) {
		if let Some(open) = self.open.take() {
			self.units.push(RawPlayUnit::new(open.quarter, open.text));
		}
	}

	fn finish(mut self) -> Vec<RawPlayUnit> {
		self.close();
		self.units
	}
}

fn is_possession_marker(line: &str) -> bool {
	AT_CLOCK.is_match(line) && !PLAY_KEYWORD.is_match(line)
}

fn period_header(line: &str) -> Option<Quarter> {
	let caps = PERIOD_HEADER.captures(line)?;
	caps.get(1).or_else(|| caps.get(2))?.as_str().parse().ok()
}
