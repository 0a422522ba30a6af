mod grammar;
mod play_parser;

pub use grammar::Grammar;
pub use play_parser::classify;
