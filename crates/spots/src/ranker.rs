//! The spot ranking pipeline.
//!
//! Three steps in fixed order, each working on the previous step's output:
//! 1. category filter (exact type match unless "All")
//! 2. text filter (case-insensitive substring of name, description or address)
//! 3. distance annotation and ascending sort, only when a user location is known
//!
//! Without a user location the input order is kept. The store returns spots
//! newest first, so that is the default listing order.

use crate::model::{CategoryFilter, Spot};
use matcha_geo::{annotate_distances, compare_distances, Coordinate};
use matcha_search::Query;
use serde::Serialize;

/// A spot together with its distance from the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSpot {
    /// The spot as stored
    #[serde(flatten)]
    pub spot: Spot,
    /// Kilometers from the user; `None` without a user location or when
    /// the spot has no coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Filter and order `spots` for display.
///
/// Spots without coordinates stay in the result but get no distance and sort
/// after every spot that has one, keeping their relative order.
pub fn rank(
    spots: &[Spot],
    query: &str,
    category: &str,
    user_loc: Option<Coordinate>,
) -> Vec<RankedSpot> {
    let category = CategoryFilter::from(category);
    let query = Query::new(query);

    let filtered: Vec<&Spot> = spots
        .iter()
        .filter(|spot| category.accepts(&spot.kind))
        .filter(|spot| {
            query.matches_any([
                Some(spot.name.as_str()),
                spot.description.as_deref(),
                Some(spot.address.as_str()),
            ])
        })
        .collect();

    let Some(origin) = user_loc else {
        return filtered
            .into_iter()
            .map(|spot| RankedSpot {
                spot: spot.clone(),
                distance: None,
            })
            .collect();
    };

    let distances = annotate_distances(&origin, &filtered);
    let mut ranked: Vec<RankedSpot> = filtered
        .into_iter()
        .zip(distances)
        .map(|(spot, distance)| RankedSpot {
            spot: spot.clone(),
            distance,
        })
        .collect();

    // Stable, so ties and unlocated spots keep input order
    ranked.sort_by(|a, b| compare_distances(a.distance, b.distance));

    tracing::trace!(
        input = spots.len(),
        output = ranked.len(),
        "Ranked spots by distance"
    );

    ranked
}
