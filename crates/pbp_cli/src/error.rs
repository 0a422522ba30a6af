use pbp_engine::error::{EngineError, TeamError};
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
	#[error("Failed to read {path}: {source}")]
	Read { path: PathBuf, source: std::io::Error },

	#[error("Failed to write {path}: {source}")]
	Write { path: PathBuf, source: std::io::Error },

	#[error("Failed to write report to stdout: {0}")]
	Stdout(#[source] std::io::Error),

	#[error("Invalid JSON: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid team: {0}")]
	Team(#[from] TeamError),

	#[error(transparent)]
	Engine(#[from] EngineError),
}

impl CliError {
	pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Read { path: path.into(), source }
	}

	pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Write { path: path.into(), source }
	}
}
