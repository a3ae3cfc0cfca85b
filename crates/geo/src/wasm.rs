//! WASM bindings for the geo crate.
//!
//! These bindings let a browser front end compute spot distances without a
//! round trip.

use crate::{annotate_distances, haversine_distance, Coordinate};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Calculate distance between two coordinates in kilometers.
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let from = Coordinate::new(lat1, lng1);
    let to = Coordinate::new(lat2, lng2);
    haversine_distance(&from, &to)
}

#[derive(Deserialize)]
struct Point {
    lat: Option<f64>,
    lng: Option<f64>,
}

/// Calculate distances from the user to a JSON array of `{lat, lng}` points.
///
/// Points with a null component yield `null` in the output array.
#[wasm_bindgen]
pub fn distances_from(user_lat: f64, user_lng: f64, points_json: &str) -> Result<String, JsValue> {
    let points: Vec<Point> = serde_json::from_str(points_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let coords: Vec<Option<Coordinate>> = points
        .into_iter()
        .map(|p| match (p.lat, p.lng) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
            _ => None,
        })
        .collect();

    let results = annotate_distances(&Coordinate::new(user_lat, user_lng), &coords);

    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
