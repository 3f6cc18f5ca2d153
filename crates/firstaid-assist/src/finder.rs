//! Hospital-finder mode: locate the user, search, parse, and build markers.

use std::sync::Arc;

use firstaid_core::{
    Coordinates, FacilityResultSet, LocationQuery, Notice, NoticeSink, UserLocationContext,
};
use firstaid_gemini::CompletionProvider;
use serde::Serialize;

use crate::facilities::FacilitySearch;
use crate::geocode::ReverseGeocoder;
use crate::map::{map_points, MapPoint};

pub const MAP_SKIPPED: &str = "Map skipped — results do not include coordinates.";

/// Everything one finder action produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinderOutcome {
    /// Present only for device-coordinate searches.
    pub user: Option<UserLocationContext>,
    /// Reply text as returned by the search, or its fallback sentinel.
    pub raw_text: String,
    pub facilities: FacilityResultSet,
    /// Empty when no facility has coordinates.
    pub map: Vec<MapPoint>,
}

pub struct HospitalFinder<P, G> {
    search: FacilitySearch<P>,
    geocoder: G,
    notices: Arc<dyn NoticeSink>,
}

impl<P: CompletionProvider, G: ReverseGeocoder> HospitalFinder<P, G> {
    pub fn new(search: FacilitySearch<P>, geocoder: G, notices: Arc<dyn NoticeSink>) -> Self {
        Self {
            search,
            geocoder,
            notices,
        }
    }

    /// Search around device coordinates.
    ///
    /// The position is reverse-geocoded first so the user sees where they
    /// are; the search itself always uses the exact coordinates. Invalid
    /// coordinates raise a warning and return `None` without any calls.
    pub async fn find_from_coordinates(&self, lat: f64, lon: f64) -> Option<FinderOutcome> {
        let coords = match Coordinates::new(lat, lon) {
            Ok(coords) => coords,
            Err(e) => {
                tracing::warn!(error = %e, "rejected device coordinates");
                self.notices
                    .notify(Notice::warning("Could not read your location coordinates."));
                return None;
            }
        };

        let address = self.geocoder.reverse_geocode(coords).await;
        let detected = match &address {
            Some(address) => format!("✅ Location detected: {address}"),
            None => format!("✅ Location detected at coordinates: {coords}"),
        };
        self.notices.notify(Notice::success(detected));
        let user = UserLocationContext::new(coords, address);

        let query = LocationQuery::Coordinates(coords);
        Some(self.run(&query, Some(user)).await)
    }

    /// Search around a typed place name or address.
    ///
    /// Blank input raises a warning and returns `None` without any calls.
    pub async fn find_from_text(&self, location: &str) -> Option<FinderOutcome> {
        let Ok(query) = LocationQuery::text(location) else {
            self.notices
                .notify(Notice::warning("Please enter a valid location."));
            return None;
        };
        Some(self.run(&query, None).await)
    }

    async fn run(&self, query: &LocationQuery, user: Option<UserLocationContext>) -> FinderOutcome {
        let (raw_text, facilities) = self.search.search(query).await;
        let map = map_points(&facilities, user.as_ref());

        if map.is_empty() && !facilities.is_empty() {
            self.notices.notify(Notice::warning(MAP_SKIPPED));
        }

        FinderOutcome {
            user,
            raw_text,
            facilities,
            map,
        }
    }
}

#[cfg(test)]
mod tests {
    use firstaid_core::NoticeLevel;

    use super::*;
    use crate::facilities::SEARCH_FAILED;
    use crate::map::MapPointKind;
    use crate::testing::{notices, service_unavailable, FixedGeocoder, ScriptedProvider};

    const REPLY: &str = "1. Dell Seton Medical Center, 1500 Red River St, Austin, TX — Coordinates: 30.2761, -97.7338\n\
                         2. St. David's Medical Center, 919 E 32nd St, Austin, TX";

    fn finder(
        provider: Arc<ScriptedProvider>,
        address: Option<&str>,
        sink: Arc<dyn NoticeSink>,
    ) -> HospitalFinder<Arc<ScriptedProvider>, FixedGeocoder> {
        let search = FacilitySearch::new(provider, Arc::clone(&sink), "search-model", 3, true);
        HospitalFinder::new(search, FixedGeocoder(address.map(str::to_string)), sink)
    }

    #[tokio::test]
    async fn coordinates_search_builds_user_and_facility_markers() {
        let provider = ScriptedProvider::replying(vec![Ok(REPLY.to_string())]);
        let sink = notices();
        let f = finder(Arc::clone(&provider), Some("Congress Ave, Austin"), sink.clone());

        let outcome = f.find_from_coordinates(30.2672, -97.7431).await.unwrap();

        assert_eq!(outcome.facilities.len(), 2);
        assert_eq!(outcome.map.len(), 2);
        assert_eq!(outcome.map[0].kind, MapPointKind::User);
        assert_eq!(outcome.map[0].address, "Congress Ave, Austin");
        assert_eq!(outcome.map[1].label, "Dell Seton Medical Center");
        assert_eq!(
            sink.notices(),
            vec![Notice::success("✅ Location detected: Congress Ave, Austin")]
        );
        assert!(provider.requests()[0].prompt.contains("30.267200"));
    }

    #[tokio::test]
    async fn unresolved_position_is_labelled_with_coordinates() {
        let provider = ScriptedProvider::replying(vec![Ok(REPLY.to_string())]);
        let sink = notices();
        let f = finder(provider, None, sink.clone());

        let outcome = f.find_from_coordinates(30.2672, -97.7431).await.unwrap();

        let user = outcome.user.unwrap();
        assert!(user.resolved_address.is_none());
        assert_eq!(
            sink.notices()[0].message,
            "✅ Location detected at coordinates: 30.267200, -97.743100"
        );
    }

    #[tokio::test]
    async fn invalid_coordinates_make_no_calls() {
        let provider = ScriptedProvider::replying(vec![]);
        let sink = notices();
        let f = finder(Arc::clone(&provider), None, sink.clone());

        assert!(f.find_from_coordinates(120.0, 10.0).await.is_none());
        assert!(provider.requests().is_empty());
        assert_eq!(sink.notices()[0].level, NoticeLevel::Warning);
    }

    #[tokio::test]
    async fn text_search_has_no_user_marker() {
        let provider = ScriptedProvider::replying(vec![Ok(REPLY.to_string())]);
        let f = finder(provider, None, notices());

        let outcome = f.find_from_text("Austin, TX").await.unwrap();

        assert!(outcome.user.is_none());
        assert_eq!(outcome.map.len(), 1);
        assert_eq!(outcome.map[0].kind, MapPointKind::Facility);
    }

    #[tokio::test]
    async fn blank_text_warns_and_makes_no_calls() {
        let provider = ScriptedProvider::replying(vec![]);
        let sink = notices();
        let f = finder(Arc::clone(&provider), None, sink.clone());

        assert!(f.find_from_text("   ").await.is_none());
        assert!(provider.requests().is_empty());
        assert_eq!(
            sink.notices(),
            vec![Notice::warning("Please enter a valid location.")]
        );
    }

    #[tokio::test]
    async fn results_without_coordinates_skip_the_map() {
        let provider = ScriptedProvider::replying(vec![Ok(
            "1. County Hospital, 9 Oak Ave, Reno, NV".to_string()
        )]);
        let sink = notices();
        let f = finder(provider, None, sink.clone());

        let outcome = f.find_from_text("Reno").await.unwrap();

        assert_eq!(outcome.facilities.len(), 1);
        assert!(outcome.map.is_empty());
        assert_eq!(sink.notices(), vec![Notice::warning(MAP_SKIPPED)]);
    }

    #[tokio::test]
    async fn failed_search_returns_sentinel_and_no_records() {
        let provider = ScriptedProvider::replying(vec![Err(service_unavailable())]);
        let f = finder(provider, None, notices());

        let outcome = f.find_from_text("Austin").await.unwrap();

        assert_eq!(outcome.raw_text, SEARCH_FAILED);
        assert!(outcome.facilities.is_empty());
        assert!(outcome.map.is_empty());
    }
}
