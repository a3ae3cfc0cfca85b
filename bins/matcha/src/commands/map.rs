//! Map command: markers, detail panel and GeoJSON export

use super::{failed_notice, print_json, resolve_location, OutputFormat};
use anyhow::Result;
use matcha_api_client::MatchaClient;
use matcha_cli::output::Status;
use matcha_cli::progress;
use matcha_cli::render::{format_detail, format_marker};
use matcha_core::config::ConfigSchema;
use matcha_spots::{MapView, Screen};
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run(
    near: Option<&str>,
    select: Option<&str>,
    geojson: bool,
    config: &ConfigSchema,
    format: OutputFormat,
) -> Result<()> {
    matcha_telemetry::timed_span!("map");
    let client = MatchaClient::new().map_err(matcha_core::Error::from)?;
    let mut view = MapView::new(&config.city);

    let pb = progress::spinner("Loading map...");
    let load_notice = view.load(&client.spots()).await;
    progress::finish_clear(&pb);

    if let Some(notice) = load_notice {
        return Err(matcha_core::Error::network(notice.description.clone())
            .with_context(notice.title)
            .into());
    }

    let (location, location_notice) = resolve_location(near, Screen::Map).await;
    view.set_user_location(location);

    // Detail and GeoJSON output own stdout, so only failures are reported.
    if select.is_some() || geojson {
        if let Some(notice) = failed_notice(location_notice.as_ref()) {
            Status::notice(notice);
        }
    }

    if let Some(id) = select {
        let detail = view.select(id).map_err(matcha_core::Error::from)?;
        return match format {
            OutputFormat::Json => print_json(&detail),
            OutputFormat::Text => {
                print!("{}", format_detail(&detail));
                Ok(())
            }
        };
    }

    if geojson {
        return print_json(&view.to_geojson());
    }

    let (center, zoom) = view.viewport();
    let markers = view.markers();

    if format == OutputFormat::Json {
        return print_json(&json!({
            "center": center,
            "zoom": zoom,
            "notice": location_notice,
            "markers": markers,
        }));
    }

    if let Some(notice) = &location_notice {
        Status::notice(notice);
    }

    Status::header(&format!("Map of {}", config.city.name));
    println!("{} {} (zoom {})", "Centered on".dimmed(), center, zoom);
    println!();

    for marker in &markers {
        println!("{}", format_marker(marker));
    }

    Ok(())
}
