//! Discover command: the ranked spot list

use super::{print_json, resolve_location, OutputFormat};
use anyhow::Result;
use matcha_api_client::MatchaClient;
use matcha_cli::output::Status;
use matcha_cli::progress;
use matcha_cli::render::format_card;
use matcha_core::config::ConfigSchema;
use matcha_spots::{count_label, DiscoverView, Screen, EMPTY_MESSAGE};
use serde_json::json;

pub async fn run(
    query: &str,
    category: &str,
    near: Option<&str>,
    config: &ConfigSchema,
    format: OutputFormat,
) -> Result<()> {
    matcha_telemetry::timed_span!("discover", query = %query, category = %category);
    let client = MatchaClient::new().map_err(matcha_core::Error::from)?;

    let mut view = DiscoverView::new();
    view.set_query(query);
    view.set_category(category);

    let pb = progress::spinner("Loading matcha spots...");
    let load_notice = view.load(&client.spots()).await;
    progress::finish_clear(&pb);

    if let Some(notice) = load_notice {
        return Err(matcha_core::Error::network(notice.description.clone())
            .with_context(notice.title)
            .into());
    }

    let (location, location_notice) = resolve_location(near, Screen::Discover).await;
    view.set_user_location(location);

    let results = view.results();
    tracing::info!(
        total = view.spots().len(),
        shown = results.len(),
        query = view.query(),
        category = view.category(),
        "Ranked spots"
    );

    if format == OutputFormat::Json {
        return print_json(&json!({
            "count": results.len(),
            "query": view.query(),
            "category": view.category(),
            "user_location": view.user_location(),
            "notice": location_notice,
            "spots": results,
        }));
    }

    if let Some(notice) = &location_notice {
        Status::notice(notice);
    }

    Status::header(&format!("Matcha spots in {}", config.city.name));
    println!("{}", count_label(results.len()));
    println!();

    let cards = view.cards();
    if cards.is_empty() {
        println!("{EMPTY_MESSAGE}");
        return Ok(());
    }

    for card in &cards {
        println!("{}", format_card(card));
    }

    Ok(())
}
