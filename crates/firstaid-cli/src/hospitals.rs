//! `hospitals` command: nearest hospitals to a place or to coordinates.

use std::fmt::Write as _;
use std::sync::Arc;

use firstaid_assist::{
    osm_link, to_geojson, FacilitySearch, FinderOutcome, HospitalFinder, MapPointKind,
    NominatimClient,
};
use firstaid_core::{AppConfig, NoticeSink};
use firstaid_gemini::GeminiClient;

/// Where to search around.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SearchTarget {
    Text(String),
    Coordinates { lat: f64, lon: f64 },
}

impl SearchTarget {
    /// Collapses the mutually exclusive `--location` / `--lat --lon` flags.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly one of the two forms is complete.
    pub(crate) fn from_args(
        location: Option<String>,
        lat: Option<f64>,
        lon: Option<f64>,
    ) -> anyhow::Result<Self> {
        match (location, lat, lon) {
            (Some(text), None, None) => Ok(Self::Text(text)),
            (None, Some(lat), Some(lon)) => Ok(Self::Coordinates { lat, lon }),
            _ => anyhow::bail!("pass either --location or both --lat and --lon"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
    GeoJson,
}

impl OutputFormat {
    pub(crate) fn from_flags(json: bool, geojson: bool) -> Self {
        if geojson {
            Self::GeoJson
        } else if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Runs finder mode and prints the outcome to stdout.
///
/// # Errors
///
/// Returns an error if a client cannot be constructed or the outcome cannot
/// be serialized. Service failures are reported as notices instead.
pub(crate) async fn run_hospitals(
    config: &AppConfig,
    notices: Arc<dyn NoticeSink>,
    target: SearchTarget,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let client = GeminiClient::with_base_url(
        &config.gemini_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.gemini_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build Gemini client: {e}"))?;
    let geocoder = NominatimClient::new(
        &config.geocoder_base_url,
        config.geocoder_timeout_secs,
        &config.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build geocoding client: {e}"))?;

    let search = FacilitySearch::new(
        client,
        Arc::clone(&notices),
        &config.search_model,
        config.facility_count,
        config.search_grounding,
    );
    let finder = HospitalFinder::new(search, geocoder, notices);

    let outcome = match target {
        SearchTarget::Text(text) => finder.find_from_text(&text).await,
        SearchTarget::Coordinates { lat, lon } => finder.find_from_coordinates(lat, lon).await,
    };
    let Some(outcome) = outcome else {
        return Ok(());
    };

    match format {
        OutputFormat::Text => print!("{}", render_outcome(&outcome)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::GeoJson => {
            println!("{}", serde_json::to_string_pretty(&to_geojson(&outcome.map))?);
        }
    }
    Ok(())
}

/// Reply text, then the map markers, then the parsed list.
pub(crate) fn render_outcome(outcome: &FinderOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Nearby Hospitals\n");
    let _ = writeln!(out, "{}", outcome.raw_text);

    if !outcome.map.is_empty() {
        let _ = writeln!(out, "\nHospital Locations Map\n");
        for point in &outcome.map {
            let marker = match point.kind {
                MapPointKind::User => "*",
                MapPointKind::Facility => "+",
            };
            let _ = writeln!(
                out,
                "{marker} {}: ({:.4}, {:.4}) {}",
                point.label,
                point.coords.lat(),
                point.coords.lon(),
                osm_link(point.coords)
            );
        }
    }

    if !outcome.facilities.is_empty() {
        let _ = writeln!(out, "\nHospitals Nearby\n");
        for (idx, record) in outcome.facilities.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", idx + 1, record.name());
            let _ = writeln!(out, "   {}", record.address());
            if let Some(coords) = record.coordinates() {
                let _ = writeln!(out, "   Coordinates: ({:.4}, {:.4})", coords.lat(), coords.lon());
            }
        }
    }
    out
}
