//! Text renderings of spot cards, map markers and the detail panel.

use matcha_spots::{Marker, SpotCard, SpotDetail};
use owo_colors::{OwoColorize, Stream::Stdout};
use std::fmt::Write;

/// A list row: name and type badge, then distance, description and links.
pub fn format_card(card: &SpotCard) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{}]",
        card.name.if_supports_color(Stdout, |t| t.bold()),
        card.kind.if_supports_color(Stdout, |t| t.green())
    );
    if let Some(distance) = &card.distance_label {
        let _ = writeln!(out, "  📍 {distance}");
    }
    if !card.description.is_empty() {
        let _ = writeln!(out, "  {}", card.description);
    }
    let _ = writeln!(
        out,
        "  {} ({})",
        card.address,
        card.maps_link.if_supports_color(Stdout, |t| t.dimmed())
    );
    if let Some(website) = &card.website {
        let _ = writeln!(out, "  Visit website: {website}");
    }
    out
}

/// One marker per line: position and popup text.
pub fn format_marker(marker: &Marker) -> String {
    let label = marker.popup.replace('\n', " · ");
    if marker.is_user {
        format!(
            "{} {}  {}",
            "◉".if_supports_color(Stdout, |t| t.blue()),
            marker.position,
            label
        )
    } else {
        let id = marker.spot_id.as_deref().unwrap_or_default();
        format!(
            "{} {}  {}  (id {})",
            "●".if_supports_color(Stdout, |t| t.green()),
            marker.position,
            label,
            id
        )
    }
}

/// The panel shown for a selected marker.
pub fn format_detail(detail: &SpotDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{}]",
        detail.name.if_supports_color(Stdout, |t| t.bold()),
        detail.kind
    );
    if !detail.description.is_empty() {
        let _ = writeln!(out, "{}", detail.description);
    }
    let _ = writeln!(out, "Address: {}", detail.address);
    let _ = writeln!(out, "Directions: {}", detail.maps_link);
    if let Some(website) = &detail.website {
        let _ = writeln!(out, "Website: {website}");
    }
    if let Some(image) = &detail.image {
        let _ = writeln!(out, "Image: {image}");
    }
    out
}
