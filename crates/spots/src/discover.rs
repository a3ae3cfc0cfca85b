//! State behind the discover list.

use crate::card::SpotCard;
use crate::model::{Spot, ALL_CATEGORIES};
use crate::notice::{Notice, Screen};
use crate::ranker::{rank, RankedSpot};
use crate::store::SpotStore;
use matcha_geo::Coordinate;

/// Shown when the ranked list is empty.
pub const EMPTY_MESSAGE: &str = "No matcha spots found. Try adjusting your filters!";

/// The discover screen's inputs.
///
/// Holds exactly one spot collection and one user location; each setter
/// replaces the previous value, and [`DiscoverView::results`] always ranks
/// the latest of both.
#[derive(Debug, Clone)]
pub struct DiscoverView {
    spots: Vec<Spot>,
    query: String,
    category: String,
    user_location: Option<Coordinate>,
}

impl Default for DiscoverView {
    fn default() -> Self {
        Self {
            spots: Vec::new(),
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            user_location: None,
        }
    }
}

impl DiscoverView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the collection from `store`.
    ///
    /// On failure the list is emptied and the returned notice says so.
    pub async fn load<S: SpotStore>(&mut self, store: &S) -> Option<Notice> {
        match store.fetch_recent().await {
            Ok(spots) => {
                tracing::debug!(count = spots.len(), "Fetched spots");
                self.spots = spots;
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "Error fetching spots");
                self.spots.clear();
                Some(Notice::load_failed(Screen::Discover))
            }
        }
    }

    pub fn set_spots(&mut self, spots: Vec<Spot>) {
        self.spots = spots;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_user_location(&mut self, location: Option<Coordinate>) {
        self.user_location = location;
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn user_location(&self) -> Option<Coordinate> {
        self.user_location
    }

    /// The ranked list for the current state.
    pub fn results(&self) -> Vec<RankedSpot> {
        rank(&self.spots, &self.query, &self.category, self.user_location)
    }

    /// The ranked list as display cards.
    pub fn cards(&self) -> Vec<SpotCard> {
        self.results().iter().map(SpotCard::from).collect()
    }
}

/// `"1 spot found"` or `"N spots found"`.
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 spot found".to_string()
    } else {
        format!("{count} spots found")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewSpot;
    use std::fmt;
    use tokio_test::block_on;

    #[derive(Debug)]
    struct Offline;

    impl fmt::Display for Offline {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("offline")
        }
    }

    impl std::error::Error for Offline {}

    struct FakeStore {
        spots: Option<Vec<Spot>>,
    }

    impl SpotStore for FakeStore {
        type Error = Offline;

        async fn fetch_recent(&self) -> Result<Vec<Spot>, Offline> {
            self.spots.clone().ok_or(Offline)
        }

        async fn fetch_mapped(&self) -> Result<Vec<Spot>, Offline> {
            self.fetch_recent().await
        }

        async fn insert(&self, _spot: &NewSpot) -> Result<Spot, Offline> {
            Err(Offline)
        }
    }

    fn spots() -> Vec<Spot> {
        vec![
            Spot::new("1", "Far Café", "Café", "Oxford").at(51.7520, -1.2577),
            Spot::new("2", "Near Café", "Café", "Soho").at(51.5136, -0.1365),
            Spot::new("3", "Noodle Bar", "Restaurant", "Soho"),
        ]
    }

    #[test]
    fn test_load_then_rank() {
        let store = FakeStore { spots: Some(spots()) };
        let mut view = DiscoverView::new();
        assert!(block_on(view.load(&store)).is_none());
        assert_eq!(view.results().len(), 3);

        view.set_category("Café");
        view.set_user_location(Some(Coordinate::new(51.5074, -0.1278)));
        let names: Vec<String> = view.results().into_iter().map(|r| r.spot.name).collect();
        assert_eq!(names, vec!["Near Café", "Far Café"]);
    }

    #[test]
    fn test_load_failure_empties_list() {
        let mut view = DiscoverView::new();
        view.set_spots(spots());

        let notice = block_on(view.load(&FakeStore { spots: None })).unwrap();
        assert_eq!(notice.title, "Error loading spots");
        assert!(view.results().is_empty());
    }

    #[test]
    fn test_latest_location_wins() {
        let mut view = DiscoverView::new();
        view.set_spots(spots());
        view.set_user_location(Some(Coordinate::new(51.7520, -1.2577)));
        view.set_user_location(Some(Coordinate::new(51.5074, -0.1278)));
        assert_eq!(view.results()[0].spot.name, "Near Café");

        view.set_user_location(None);
        assert_eq!(view.results()[0].spot.name, "Far Café");
    }

    #[test]
    fn test_cards_and_labels() {
        let mut view = DiscoverView::new();
        view.set_spots(spots());
        view.set_query("noodle");
        let cards = view.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(count_label(cards.len()), "1 spot found");
        assert_eq!(count_label(0), "0 spots found");
    }
}
