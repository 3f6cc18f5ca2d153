//! First-aid guidance and hospital lookup on top of a completion provider.
//!
//! [`FirstAidGuide`] turns an injury photo or description into first-aid
//! steps, [`FacilitySearch`] asks the model for nearby hospitals, and
//! [`parse_facilities`] extracts structured records from the reply.
//! [`HospitalFinder`] ties the search to reverse geocoding and map points.
//! None of the public entry points return errors: failures become a notice
//! plus a fixed fallback string.

pub mod error;
pub mod facilities;
pub mod finder;
pub mod geocode;
pub mod guide;
pub mod map;
pub mod parse;
pub mod photo;
pub mod prompts;

#[cfg(test)]
mod testing;

pub use error::AssistError;
pub use facilities::{FacilitySearch, NO_HOSPITALS_FOUND, SEARCH_FAILED};
pub use finder::{FinderOutcome, HospitalFinder, MAP_SKIPPED};
pub use geocode::{NominatimClient, ReverseGeocoder};
pub use guide::{
    FirstAidGuide, GuideOutcome, IMAGE_ANALYSIS_FAILED, NO_DESCRIPTION_DETECTED,
    NO_STEPS_GENERATED, STEPS_GENERATION_FAILED,
};
pub use map::{map_points, osm_link, to_geojson, MapPoint, MapPointKind, USER_MARKER_LABEL};
pub use parse::parse_facilities;
pub use photo::load_injury_image;
