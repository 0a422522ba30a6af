use crate::config::{Config, InputFormat};
use crate::error::CliError;
use pbp_engine::schema::{RawPlayUnit, TeamInfo};
use pbp_engine::{split_into_play_units, EngineConfig, GameEngine, GameReport};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Engine settings from `--engine-config` when given, otherwise from flags.
pub fn engine_config(config: &Config) -> Result<EngineConfig, CliError> {
	if let Some(path) = &config.engine_config {
		let content = fs::read_to_string(path).map_err(|e| CliError::read_error(path, e))?;
		return Ok(serde_json::from_str(&content)?);
	}

	let away = TeamInfo::new(&config.away_team, &config.away_team)?;
	let home = TeamInfo::new(&config.home_team, &config.home_team)?;
	Ok(EngineConfig::new(away, home)
		.with_opening_possession(config.opening_possession)
		.with_drive_numbering(config.drive_numbering))
}

pub fn read_units(path: &Path, format: InputFormat) -> Result<Vec<RawPlayUnit>, CliError> {
	let content = fs::read_to_string(path).map_err(|e| CliError::read_error(path, e))?;
	let units = match format {
		InputFormat::Text => split_into_play_units(&content),
		InputFormat::Json => serde_json::from_str(&content)?,
	};
	info!("Read {} play units from {}", units.len(), path.display());
	Ok(units)
}

pub fn run(config: &Config) -> Result<GameReport, CliError> {
	let engine = GameEngine::new(engine_config(config)?)?;
	let units = read_units(&config.input_file, config.input_format)?;
	Ok(engine.process(&units)?)
}

/// Pretty JSON to `output`, or stdout.
pub fn write_report(report: &GameReport, output: Option<&Path>) -> Result<(), CliError> {
	let json = serde_json::to_string_pretty(report)?;
	match output {
		Some(path) => fs::write(path, json).map_err(|e| CliError::write_error(path, e)),
		None => {
			let mut stdout = std::io::stdout().lock();
			writeln!(stdout, "{}", json).map_err(CliError::Stdout)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::Parser;
	use pbp_engine::error::EngineError;
	use pbp_engine::schema::{PlayType, Side};
	use pretty_assertions::assert_eq;
	use tempfile::NamedTempFile;

	fn temp_file(content: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(content.as_bytes()).unwrap();
		file
	}

	fn config(args: &[&str]) -> Config {
		Config::try_parse_from(std::iter::once("pbp").chain(args.iter().copied())).unwrap()
	}

	#[test]
	fn test_engine_config_from_flags() {
		let config = config(&["--input-file", "x", "--away-team", "uwl", "--home-team", "CMU", "--opening-possession", "home"]);
		let engine_config = engine_config(&config).unwrap();

		assert_eq!(engine_config.teams.abbreviation(Side::Away), "UWL");
		assert_eq!(engine_config.opening_possession, Side::Home);
	}

	#[test]
	fn test_engine_config_from_file() {
		let file = temp_file(r#"{"opening_possession":"home","touchback_field_position":30}"#);
		let config = config(&["--input-file", "x", "--engine-config", file.path().to_str().unwrap()]);
		let engine_config = engine_config(&config).unwrap();

		assert_eq!(engine_config.opening_possession, Side::Home);
		assert_eq!(engine_config.touchback_field_position, 30);
	}

	#[test]
	fn test_run_text_input() {
		let input = temp_file("1st Quarter\n(15:00) Washington rushes for 11 yards.\n(14:30) Washington rushes for 4 yards.\n");
		let config = config(&["--input-file", input.path().to_str().unwrap()]);
		let report = run(&config).unwrap();

		assert_eq!(report.plays.len(), 2);
		assert_eq!(report.plays[1].field_position_end, 40);
		assert!(report.plays.iter().all(|play| play.play_type() == PlayType::Rush));
	}

	#[test]
	fn test_run_json_input() {
		let input = temp_file(r#"[{"quarter":1,"text":"(07:10) Official review in progress"}]"#);
		let config = config(&["--input-file", input.path().to_str().unwrap(), "--input-format", "json"]);
		let report = run(&config).unwrap();

		assert_eq!(report.plays[0].play_type(), PlayType::Unknown);
		assert_eq!(report.metrics.warnings, 1);
	}

	#[test]
	fn test_run_errors() {
		let missing = config(&["--input-file", "/nonexistent/game.txt"]);
		assert!(matches!(run(&missing), Err(CliError::Read { .. })));

		let empty = temp_file("");
		let config = config(&["--input-file", empty.path().to_str().unwrap()]);
		assert!(matches!(run(&config), Err(CliError::Engine(EngineError::EmptyInput))));
	}

	#[test]
	fn test_write_report_to_file() {
		let input = temp_file("(15:00) Washington rushes for 11 yards.");
		let report = run(&config(&["--input-file", input.path().to_str().unwrap()])).unwrap();
		let output = NamedTempFile::new().unwrap();

		write_report(&report, Some(output.path())).unwrap();
		let written: GameReport = serde_json::from_str(&fs::read_to_string(output.path()).unwrap()).unwrap();
		assert_eq!(written, report);
	}
}
