pub mod down_and_distance;
pub mod drive;
pub mod field_position;
pub mod game_clock;
pub mod issue;
pub mod play_by_play;
pub mod play_type;
pub mod scoring_events;
pub mod teams;
pub mod yards;

pub use down_and_distance::*;
pub use drive::*;
pub use field_position::*;
pub use game_clock::*;
pub use issue::*;
pub use play_by_play::*;
pub use play_type::*;
pub use scoring_events::*;
pub use teams::*;
pub use yards::*;
