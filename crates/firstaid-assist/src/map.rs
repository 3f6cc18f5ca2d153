//! Map markers for the user's position and the facilities found.

use firstaid_core::{Coordinates, FacilityResultSet, UserLocationContext};
use serde::Serialize;
use serde_json::{json, Value};

pub const USER_MARKER_LABEL: &str = "Your Location";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapPointKind {
    User,
    Facility,
}

/// One marker: a label, the address shown on hover, and its position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub label: String,
    pub address: String,
    #[serde(flatten)]
    pub coords: Coordinates,
    pub kind: MapPointKind,
}

/// Markers for a search result: the user first (when known), then every
/// facility that has coordinates, in result order.
///
/// Returns an empty list when no facility is mappable; a map holding only
/// the user's own marker is not worth drawing.
#[must_use]
pub fn map_points(
    facilities: &FacilityResultSet,
    user: Option<&UserLocationContext>,
) -> Vec<MapPoint> {
    let mut points: Vec<MapPoint> = facilities
        .mappable()
        .filter_map(|record| {
            Some(MapPoint {
                label: record.name().to_string(),
                address: record.address().to_string(),
                coords: record.coordinates()?,
                kind: MapPointKind::Facility,
            })
        })
        .collect();

    if points.is_empty() {
        return points;
    }

    if let Some(user) = user {
        points.insert(
            0,
            MapPoint {
                label: USER_MARKER_LABEL.to_string(),
                address: user.label(),
                coords: user.coords,
                kind: MapPointKind::User,
            },
        );
    }
    points
}

/// Renders markers as a GeoJSON `FeatureCollection` (positions are `[lon, lat]`).
#[must_use]
pub fn to_geojson(points: &[MapPoint]) -> Value {
    let features: Vec<Value> = points
        .iter()
        .map(|p| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [p.coords.lon(), p.coords.lat()],
                },
                "properties": {
                    "name": p.label,
                    "address": p.address,
                    "kind": p.kind,
                },
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// OpenStreetMap link centred on `coords`.
#[must_use]
pub fn osm_link(coords: Coordinates) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={lat:.6}&mlon={lon:.6}#map=16/{lat:.6}/{lon:.6}",
        lat = coords.lat(),
        lon = coords.lon()
    )
}

#[cfg(test)]
mod tests {
    use firstaid_core::FacilityRecord;

    use super::*;

    fn record(name: &str, coords: Option<(f64, f64)>) -> FacilityRecord {
        let coords = coords.map(|(lat, lon)| Coordinates::new(lat, lon).unwrap());
        FacilityRecord::new(name, "1 Elm St", coords).unwrap()
    }

    fn user() -> UserLocationContext {
        UserLocationContext::new(
            Coordinates::new(30.2672, -97.7431).unwrap(),
            Some("Congress Ave, Austin".to_string()),
        )
    }

    #[test]
    fn user_marker_comes_first() {
        let set: FacilityResultSet = vec![
            record("A", Some((30.1, -97.1))),
            record("B", None),
            record("C", Some((30.3, -97.3))),
        ]
        .into_iter()
        .collect();

        let points = map_points(&set, Some(&user()));

        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Your Location", "A", "C"]);
        assert_eq!(points[0].kind, MapPointKind::User);
        assert_eq!(points[0].address, "Congress Ave, Austin");
    }

    #[test]
    fn nothing_mappable_means_no_map() {
        let set: FacilityResultSet = vec![record("B", None)].into_iter().collect();
        assert!(map_points(&set, Some(&user())).is_empty());
        assert!(map_points(&FacilityResultSet::default(), None).is_empty());
    }

    #[test]
    fn text_search_has_no_user_marker() {
        let set: FacilityResultSet = vec![record("A", Some((30.1, -97.1)))].into_iter().collect();
        let points = map_points(&set, None);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].kind, MapPointKind::Facility);
    }

    #[test]
    fn geojson_uses_lon_lat_order() {
        let set: FacilityResultSet = vec![record("A", Some((30.1, -97.1)))].into_iter().collect();
        let geojson = to_geojson(&map_points(&set, None));

        assert_eq!(geojson["type"], "FeatureCollection");
        let feature = &geojson["features"][0];
        assert_eq!(feature["geometry"]["coordinates"], json!([-97.1, 30.1]));
        assert_eq!(feature["properties"]["name"], "A");
        assert_eq!(feature["properties"]["kind"], "facility");
    }

    #[test]
    fn osm_link_centres_on_position() {
        let link = osm_link(Coordinates::new(30.2672, -97.7431).unwrap());
        assert_eq!(
            link,
            "https://www.openstreetmap.org/?mlat=30.267200&mlon=-97.743100#map=16/30.267200/-97.743100"
        );
    }
}
