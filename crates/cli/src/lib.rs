//! Terminal output for the matcha command-line tool
//!
//! Provides shared CLI functionality:
//! - Status messages and notices
//! - Spot cards, map markers and detail panels as text
//! - Spinners while a request is pending

#![warn(missing_docs)]

pub mod output;
pub mod progress;
pub mod render;
