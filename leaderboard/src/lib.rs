//! Ranked match-result records: insertion, ordering, top-10 retention, and
//! a forgiving persistence contract.
//!
//! Persistence never throws into the game: unreadable data loads as an
//! empty table and failed saves are logged and skipped.

pub mod record;
pub mod store;
pub mod table;

pub use record::ScoreRecord;
pub use store::{JsonFileStore, MemStore, ScoreStore};
pub use table::{ScoreTable, Submission, CAPACITY};
