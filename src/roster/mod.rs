//! Roster loading and parsing.

mod loader;
pub mod parser;

pub use loader::load;
pub use parser::parse_line;
