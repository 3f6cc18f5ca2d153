//! Extraction of hospital records from a free-text search reply.
//!
//! The reply is scanned line by line. A line is an entry when it has the shape
//!
//! ```text
//! [bullet] [**] <1-3 digits>.<space or non-digit> <name>, <address>
//! ```
//!
//! Leading whitespace, a `-`/`*`/`+` bullet, and markdown emphasis around the
//! ordinal or name are tolerated. The first comma after the ordinal separates
//! name from address, so addresses keep their own commas. `30.2672, -97.7431`
//! is a decimal, not an ordinal, because a digit follows the period directly.
//! Lines that do not fit the shape are skipped; zero entries is a valid result.
//!
//! Per-entry coordinates are optional and read from the address segment, see
//! [`split_coordinates`].

use std::sync::LazyLock;

use firstaid_core::{Coordinates, FacilityRecord, FacilityResultSet};
use regex::{Captures, Regex};

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*+•]\s+)?(?:\*\*|__)?(\d{1,3})\.(\s*)(.*)$").expect("valid entry regex")
});

/// `Coordinates: 30.2672, -97.7431`, `coords (30.27° N, 97.73° W)`, `GPS: ...`
static LABELED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:coordinates|coords|gps|lat\s*/\s*lon[g]?|lat\s*,\s*lon[g]?)\s*[:=]?\s*\(?\s*(-?\d{1,2}(?:\.\d+)?)\s*°?\s*([NS])?\s*,\s*(-?\d{1,3}(?:\.\d+)?)\s*°?\s*([EW])?\s*\)?",
    )
    .expect("valid labeled coordinates regex")
});

/// `Lat: 30.2672, Lon: -97.7431`, `latitude 30.2672 longitude -97.7431`
static LAT_LON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\blat(?:itude)?\s*[:=]?\s*(-?\d{1,2}(?:\.\d+)?)\s*°?\s*([NS])?\s*[,;]?\s*(?:lon|lng|long|longitude)\s*[:=]?\s*(-?\d{1,3}(?:\.\d+)?)\s*°?\s*([EW])?",
    )
    .expect("valid lat/lon regex")
});

/// A bare decimal pair at the very end: `... (30.2672, -97.7431)`
static TRAILING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(?\s*(-?\d{1,2}\.\d+)\s*,\s*(-?\d{1,3}\.\d+)\s*\)?\s*$")
        .expect("valid trailing coordinates regex")
});

/// Characters dropped between an address and the coordinates that followed it.
const SEPARATOR_CHARS: &[char] = &[' ', '\t', '—', '–', '-', '|', '(', '[', ';', ',', ':', '*', '_'];

/// Parses every numbered `name, address` entry in `raw_text`, in order.
///
/// Never fails: text with no entries yields an empty set.
#[must_use]
pub fn parse_facilities(raw_text: &str) -> FacilityResultSet {
    raw_text.lines().filter_map(parse_entry).collect()
}

fn parse_entry(line: &str) -> Option<FacilityRecord> {
    let caps = ENTRY_RE.captures(line)?;
    let gap = caps.get(2).map_or("", |m| m.as_str());
    let rest = caps.get(3).map_or("", |m| m.as_str());

    // A digit right after the period means a decimal number, not an ordinal.
    if gap.is_empty() && rest.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let (name, address) = rest.split_once(',')?;
    let name = strip_emphasis(name);
    let address = strip_emphasis(address);

    let (address, coordinates) = split_coordinates(address);
    FacilityRecord::new(name, address, coordinates).ok()
}

/// Removes surrounding whitespace and markdown emphasis markers.
fn strip_emphasis(s: &str) -> &str {
    s.trim().trim_matches(|c| c == '*' || c == '_' || c == '`').trim()
}

/// Separates a coordinate pair from the address it was appended to.
///
/// Tries labeled pairs, then `lat ... lon ...` pairs, then a bare decimal pair
/// at the end of the line. Out-of-range values are ignored and the address is
/// returned untouched. If removing the coordinates would leave no address,
/// the original text is kept as the address.
pub(crate) fn split_coordinates(address: &str) -> (&str, Option<Coordinates>) {
    let body = address.trim_end_matches(['.', ' ']);

    let found = [&*LABELED_RE, &*LAT_LON_RE]
        .into_iter()
        .find_map(|re| re.captures(body).and_then(|caps| hemisphere_pair(&caps)))
        .or_else(|| {
            TRAILING_RE
                .captures(body)
                .and_then(|caps| plain_pair(&caps))
        });

    let Some((start, coords)) = found else {
        return (address, None);
    };

    // Anything after the pair (a note, a phone number) is dropped with it.
    let before = body[..start].trim_end_matches(SEPARATOR_CHARS);
    if before.is_empty() {
        return (address, Some(coords));
    }
    (before, Some(coords))
}

/// Reads groups `(lat, N|S, lon, E|W)` from a labeled match.
fn hemisphere_pair(caps: &Captures<'_>) -> Option<(usize, Coordinates)> {
    let whole = caps.get(0)?;
    let lat = signed(caps.get(1)?.as_str(), caps.get(2).map(|m| m.as_str()))?;
    let lon = signed(caps.get(3)?.as_str(), caps.get(4).map(|m| m.as_str()))?;
    let coords = Coordinates::new(lat, lon).ok()?;
    Some((whole.start(), coords))
}

fn plain_pair(caps: &Captures<'_>) -> Option<(usize, Coordinates)> {
    let whole = caps.get(0)?;
    let lat = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let lon = caps.get(2)?.as_str().parse::<f64>().ok()?;
    let coords = Coordinates::new(lat, lon).ok()?;
    Some((whole.start(), coords))
}

/// Applies a hemisphere letter: `S` and `W` make the value negative.
fn signed(value: &str, hemisphere: Option<&str>) -> Option<f64> {
    let v = value.parse::<f64>().ok()?;
    match hemisphere.map(str::to_ascii_uppercase).as_deref() {
        Some("S" | "W") => Some(-v.abs()),
        _ => Some(v),
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
