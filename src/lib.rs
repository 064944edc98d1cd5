// Crate root library declaration and module exports.
pub mod cli;
pub mod clock;
pub mod config;
pub mod context;
pub mod model;
pub mod store;

pub use model::{ParsedResult, Priority, SmartParser, parse};
