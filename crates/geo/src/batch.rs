//! Batch distance calculations with optional parallelism.
//!
//! Items expose an optional coordinate through [`Located`]. Items without one
//! get no distance and sort after every item that has one.

use crate::{haversine_distance, Coordinate};
use std::cmp::Ordering;

/// Anything that may sit at a point on the map.
pub trait Located {
    /// The item's coordinate, or `None` when it was never geocoded.
    fn coordinate(&self) -> Option<Coordinate>;
}

impl<T: Located + ?Sized> Located for &T {
    fn coordinate(&self) -> Option<Coordinate> {
        (**self).coordinate()
    }
}

impl Located for Coordinate {
    fn coordinate(&self) -> Option<Coordinate> {
        Some(*self)
    }
}

impl Located for Option<Coordinate> {
    fn coordinate(&self) -> Option<Coordinate> {
        *self
    }
}

/// Calculate the distance in kilometers from `origin` to every item.
///
/// The output has one entry per input item, in input order. Items without a
/// coordinate map to `None`.
///
/// # Example
/// ```
/// use matcha_geo::{annotate_distances, Coordinate};
///
/// let origin = Coordinate::new(51.5074, -0.1278);
/// let items = vec![Some(Coordinate::new(51.5155, -0.0922)), None];
///
/// let distances = annotate_distances(&origin, &items);
/// assert!(distances[0].unwrap() < 3.0);
/// assert!(distances[1].is_none());
/// ```
pub fn annotate_distances<T: Located + Sync>(origin: &Coordinate, items: &[T]) -> Vec<Option<f64>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .map(|item| distance_to(origin, item))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items.iter().map(|item| distance_to(origin, item)).collect()
    }
}

/// Ordering for optional distances: nearest first, missing distances last.
///
/// Two missing distances compare equal so a stable sort keeps their input order.
pub fn compare_distances(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[inline]
fn distance_to<T: Located>(origin: &Coordinate, item: &T) -> Option<f64> {
    item.coordinate().map(|coord| haversine_distance(origin, &coord))
}
