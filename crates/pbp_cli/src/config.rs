use clap::Parser;
use pbp_engine::schema::Side;
use pbp_engine::DriveNumbering;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct Config {
	/// Play-by-play text, or a JSON array of play units
	#[arg(long, env = "INPUT_FILE")]
	pub input_file: PathBuf,

	/// Report destination; stdout when unset
	#[arg(long, env = "OUTPUT_FILE")]
	pub output_file: Option<PathBuf>,

	#[arg(long, env = "INPUT_FORMAT", default_value = "text")]
	pub input_format: InputFormat,

	/// Away team abbreviation as printed in yard lines
	#[arg(long, env = "AWAY_TEAM", default_value = "AWAY")]
	pub away_team: String,

	/// Home team abbreviation as printed in yard lines
	#[arg(long, env = "HOME_TEAM", default_value = "HOME")]
	pub home_team: String,

	/// Receiver of the opening kickoff
	#[arg(long, env = "OPENING_POSSESSION", default_value = "away")]
	pub opening_possession: Side,

	#[arg(long, env = "DRIVE_NUMBERING", default_value = "cumulative")]
	pub drive_numbering: DriveNumbering,

	/// JSON engine configuration; replaces the team and possession flags
	#[arg(long, env = "ENGINE_CONFIG")]
	pub engine_config: Option<PathBuf>,

	/// Use JSON formatting for tracing
	#[arg(long, env = "LOG_JSON", default_value = "false")]
	pub log_json: bool,

	/// Log filter directives
	#[arg(long, env = "RUST_LOG")]
	pub rust_log: Option<String>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFormat {
	/// Extracted page text, split into plays by clock markers
	Text,
	/// Pre-split `[{"quarter": 1, "text": "..."}]` units
	Json,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = Config::try_parse_from(["pbp", "--input-file", "game.txt"]).unwrap();
		assert_eq!(config.input_file, PathBuf::from("game.txt"));
		assert_eq!(config.input_format, InputFormat::Text);
		assert_eq!(config.opening_possession, Side::Away);
		assert_eq!(config.drive_numbering, DriveNumbering::Cumulative);
		assert!(config.output_file.is_none());
	}

	#[test]
	fn test_flags() {
		let config = Config::try_parse_from([
			"pbp",
			"--input-file",
			"units.json",
			"--input-format",
			"json",
			"--away-team",
			"UWL",
			"--home-team",
			"CMU",
			"--opening-possession",
			"home",
			"--drive-numbering",
			"per-team",
		])
		.unwrap();

		assert_eq!(config.input_format, InputFormat::Json);
		assert_eq!(config.opening_possession, Side::Home);
		assert_eq!(config.drive_numbering, DriveNumbering::PerTeam);
		assert_eq!(config.home_team, "CMU");
	}

	#[test]
	fn test_rejects_unknown_side() {
		assert!(Config::try_parse_from(["pbp", "--input-file", "g.txt", "--opening-possession", "neither"]).is_err());
	}
}
