// File: ./src/model/mod.rs
pub mod display;
pub mod item;
pub mod parsed;
pub mod parser;
pub mod patterns;
pub mod vocabulary;

pub use display::{TaskDisplay, format_date_label};
pub use item::{HistoryItem, HistoryType, Task, TaskKind, TaskStatus};
pub use parsed::{ParsedResult, Priority};
pub use parser::{SmartParser, parse};
pub use vocabulary::{Vocabulary, WeekOffset};
