//! # Marquee Core Types
//!
//! The shared vocabulary of the workspace: a released title (`Record`), the
//! table that holds them (`MovieTable`) and the small enums and value types
//! derived from a release date. This crate has no knowledge of files or views.

pub mod calendar;
pub mod enums;
pub mod error;
pub mod stats;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use calendar::{decade_of, decade_range_label};
pub use enums::{Season, SuccessLevel};
pub use error::CoreError;
pub use structs::{MovieTable, Record, YearRange};
