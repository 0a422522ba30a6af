use crate::config::EngineConfig;
use crate::drives;
use crate::error::EngineError;
use crate::parsers::classify;
use crate::schema::{Drive, ParseIssue, RawPlayUnit, Score, TrackedPlay};
use crate::segment::split_into_play_units;
use crate::tracker::{self, GameState, Transition};
use crate::validator::{self, Metrics, Validation};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Everything produced for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
	pub plays: Vec<TrackedPlay>,
	pub drives: Vec<Drive>,
	pub issues: Vec<ParseIssue>,
	pub metrics: Metrics,
	/// Score after the last play read, rejected plays included.
	pub final_score: Score,
}

/// Runs the classify, track, aggregate and validate pipeline for a game.
///
/// Holds only configuration; every call to [`GameEngine::process`] starts
/// from a fresh `GameState`, so one engine can serve many games at once.
#[derive(Debug, Clone)]
pub struct GameEngine {
	config: EngineConfig,
}

impl GameEngine {
	pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
		config.validate()?;
		Ok(Self { config })
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	/// Processes one game's units in order.
	///
	/// Fails only when `units` is empty. Problems with individual plays are
	/// reported in `GameReport::issues`.
	#[instrument(skip(self, units), fields(units = units.len()))]
	pub fn process(&self, units: &[RawPlayUnit]) -> Result<GameReport, EngineError> {
		if units.is_empty() {
			return Err(EngineError::EmptyInput);
		}

		let mut state = GameState::new(&self.config);
		let mut plays = Vec::with_capacity(units.len());
		let mut reported = Vec::new();

		for unit in units {
			let candidate = classify(unit);
			debug!("Classified play {} as {} ({:?})", state.next_play_id, candidate.play_type, candidate.grammar);

			let Transition { state: next, play, issues } = tracker::advance(&state, &candidate, &self.config);
			state = next;
			plays.push(play);
			reported.extend(issues);
		}

		let drives = drives::aggregate(&plays, self.config.drive_numbering);
		let Validation { plays, drives, issues, metrics } = validator::validate(plays, drives, reported);

		for issue in issues.iter().filter(|issue| issue.is_rejection()) {
			warn!("Rejected {}: {}", issue.reason, issue.detail);
		}
		info!(
			"Processed {} plays into {} drives: {} classified, {} rejected, {} warnings",
			metrics.total,
			drives.len(),
			metrics.classified,
			metrics.rejected,
			metrics.warnings
		);

		Ok(GameReport {
			plays,
			drives,
			issues,
			metrics,
			final_score: state.score,
		})
	}

	/// Segments raw page text and processes the resulting units.
	pub fn process_text(&self, text: &str) -> Result<GameReport, EngineError> {
		self.process(&split_into_play_units(text))
	}

	/// Processes independent games in parallel. Results keep input order.
	pub fn process_batch(&self, games: &[Vec<RawPlayUnit>]) -> Vec<Result<GameReport, EngineError>> {
		games.par_iter().map(|units| self.process(units)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::{PlayType, Quarter, Side};

	fn units(lines: &[&str]) -> Vec<RawPlayUnit> {
		lines.iter().map(|line| RawPlayUnit::new(Quarter::FIRST, *line)).collect()
	}

	#[test]
	fn test_empty_input_is_an_error() {
		let engine = GameEngine::new(EngineConfig::default()).unwrap();
		assert_eq!(engine.process(&[]), Err(EngineError::EmptyInput));
		assert_eq!(engine.process_text("\n"), Err(EngineError::EmptyInput));
	}

	#[test]
	fn test_invalid_config_is_an_error() {
		let result = GameEngine::new(EngineConfig::default().with_starting_field_position(0));
		assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
	}

	#[test]
	fn test_process_single_rush() {
		let engine = GameEngine::new(EngineConfig::default()).unwrap();
		let report = engine.process(&units(&["(15:00) Washington rushes for 11 yards."])).unwrap();

		assert!(report.issues.is_empty());
		assert_eq!(report.plays.len(), 1);
		assert_eq!(report.plays[0].play_type(), PlayType::Rush);
		assert_eq!(report.plays[0].field_position_end, 36);
		assert_eq!(report.plays[0].possession, Side::Away);
		assert_eq!(report.drives.len(), 1);
	}

	#[test]
	fn test_batch_keeps_games_isolated() {
		let engine = GameEngine::new(EngineConfig::default()).unwrap();
		let games = vec![
			units(&["(15:00) Washington rushes for 11 yards."]),
			Vec::new(),
			units(&["(15:00) Washington rushes for 11 yards.", "(14:30) Washington rushes for 4 yards."]),
		];

		let results = engine.process_batch(&games);
		assert_eq!(results.len(), 3);
		assert_eq!(results[0].as_ref().map(|r| r.plays.len()), Ok(1));
		assert_eq!(results[1], Err(EngineError::EmptyInput));
		assert_eq!(results[2].as_ref().map(|r| r.plays[1].field_position_start), Ok(36));
	}
}
