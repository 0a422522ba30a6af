use crate::schema::YardLine;
use serde::{Deserialize, Serialize};

/// Down/distance header, e.g. `1st and 10 at UWL31` or `3rd & Goal at TB 2`.
///
/// `down` is kept as printed; range checking happens in the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownAndDistance {
	pub down: u8,
	/// `None` for goal-to-go; the tracker resolves it from field position.
	pub distance: Option<u8>,
	pub goal_to_go: bool,
	pub line_of_scrimmage: Option<YardLine>,
}
