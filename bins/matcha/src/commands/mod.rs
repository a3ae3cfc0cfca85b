//! CLI command implementations

pub mod categories;
pub mod discover;
pub mod health;
pub mod map;
pub mod submit;

use clap::ValueEnum;
use matcha_geo::Coordinate;
use matcha_spots::{locate_user, ManualLocator, Notice, Screen};
use serde::Serialize;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolve the user's location when one was given.
///
/// Without `--near` or `MATCHA_LOCATION` nothing is asked and no notice is
/// produced.
pub async fn resolve_location(
    near: Option<&str>,
    screen: Screen,
) -> (Option<Coordinate>, Option<Notice>) {
    let locator = ManualLocator::from_env_or(near);
    if !locator.has_input() {
        return (None, None);
    }
    let (location, notice) = locate_user(&locator, screen).await;
    (location, Some(notice))
}

/// The notice, if it reports a failure.
pub fn failed_notice(notice: Option<&Notice>) -> Option<&Notice> {
    notice.filter(|n| n.is_error())
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
