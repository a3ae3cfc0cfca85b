//! List the configured categories

use super::{print_json, OutputFormat};
use anyhow::Result;
use matcha_cli::output::Status;
use matcha_core::config::ConfigSchema;
use matcha_spots::ALL_CATEGORIES;
use serde_json::json;

pub fn run(config: &ConfigSchema, format: OutputFormat) -> Result<()> {
    let categories = &config.categories;

    if format == OutputFormat::Json {
        return print_json(&json!({
            "filter": categories.filter,
            "submit": categories.submit,
        }));
    }

    Status::header("Filter categories");
    println!("  {ALL_CATEGORIES}");
    for category in &categories.filter {
        println!("  {category}");
    }

    Status::header("Submission types");
    for category in &categories.submit {
        println!("  {category}");
    }

    Ok(())
}
