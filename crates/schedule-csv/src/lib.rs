//! Fixed-schema CSV reader for records-retention schedules.
//!
//! Every schedule export shares the same 19 positional columns. Header text in the
//! source file is ignored and replaced by the canonical column list in [`schema`].

pub mod reader;
pub mod schema;

pub use reader::{parse_schedule, read_schedule, ParseError};
pub use schema::{field_class, ScheduleRow, COLUMNS, COLUMN_COUNT};
