//! Configuration loading and schema definitions
//!
//! Settings for the city being covered, the category lists, and submission
//! defaults.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
