pub mod config;
pub mod drives;
pub mod engine;
pub mod error;
pub mod parsers;
pub mod patterns;
pub mod schema;
pub mod segment;
pub mod tracker;
pub mod validator;

pub use config::{DefensiveScorePossession, DriveNumbering, EngineConfig};
pub use engine::{GameEngine, GameReport};
pub use error::EngineError;
pub use segment::split_into_play_units;
pub use validator::Metrics;
