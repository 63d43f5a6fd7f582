//! Static page generator for records-retention schedules.
//!
//! Reads the three schedule exports, renders every row as a labeled block of
//! fields, and wraps the result in a page shell with a client-side keyword filter
//! and per-section visibility toggles.

pub mod assets;
pub mod document;
pub mod generator;
pub mod render;
pub mod section;
pub mod templates;

pub use document::{Document, Schedules};
pub use generator::{
    convert, ConversionStatus, DocumentGenerator, GenerateConfig, GenerateError, GenerateResult,
    SectionSummary,
};
pub use section::SectionKind;
