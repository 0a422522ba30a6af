use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum QuarterError {
	#[error("Invalid quarter: {quarter}")]
	InvalidQuarter { quarter: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum TeamError {
	#[error("Invalid team side: {0}")]
	InvalidSide(String),

	#[error("Team abbreviation must not be empty")]
	EmptyAbbreviation,
}

#[derive(Debug, Error, PartialEq)]
pub enum YardLineError {
	#[error("Invalid yard line: {0}")]
	InvalidFormat(String),

	#[error("Yard line {line} is outside 0-50")]
	OutOfRange { line: u8 },
}

/// Run-fatal failures. Per-play problems are reported as `ParseIssue`s instead.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
	#[error("No play units were supplied")]
	EmptyInput,

	#[error("Invalid engine configuration: {reason}")]
	InvalidConfig { reason: String },
}

impl QuarterError {
	pub fn invalid_quarter_error(quarter: &str) -> Self {
		QuarterError::InvalidQuarter { quarter: quarter.to_string() }
	}
}

impl EngineError {
	pub fn invalid_config(reason: impl Into<String>) -> Self {
		EngineError::InvalidConfig { reason: reason.into() }
	}
}
