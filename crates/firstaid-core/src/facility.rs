//! Hospital records extracted from a facility search reply.

use serde::Serialize;

use crate::location::Coordinates;
use crate::CoreError;

/// One hospital from a search reply.
///
/// Latitude and longitude travel together as a single [`Coordinates`], so a
/// record either has both or neither.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityRecord {
    name: String,
    address: String,
    #[serde(flatten)]
    coordinates: Option<Coordinates>,
}

impl FacilityRecord {
    /// # Errors
    ///
    /// Returns [`CoreError::BlankFacilityField`] if `name` or `address` is
    /// blank after trimming.
    pub fn new(
        name: &str,
        address: &str,
        coordinates: Option<Coordinates>,
    ) -> Result<Self, CoreError> {
        let name = name.trim();
        let address = address.trim();
        if name.is_empty() {
            return Err(CoreError::BlankFacilityField { field: "name" });
        }
        if address.is_empty() {
            return Err(CoreError::BlankFacilityField { field: "address" });
        }
        Ok(Self {
            name: name.to_string(),
            address: address.to_string(),
            coordinates,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    #[must_use]
    pub fn lat(&self) -> Option<f64> {
        self.coordinates.map(|c| c.lat())
    }

    #[must_use]
    pub fn lon(&self) -> Option<f64> {
        self.coordinates.map(|c| c.lon())
    }
}

/// Records in the order the search service returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FacilityResultSet(Vec<FacilityRecord>);

impl FacilityResultSet {
    #[must_use]
    pub fn new(records: Vec<FacilityRecord>) -> Self {
        Self(records)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FacilityRecord> {
        self.0.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FacilityRecord> {
        self.0.get(index)
    }

    /// Records that can be placed on a map.
    pub fn mappable(&self) -> impl Iterator<Item = &FacilityRecord> {
        self.0.iter().filter(|r| r.coordinates.is_some())
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<FacilityRecord> {
        self.0
    }
}

impl<'a> IntoIterator for &'a FacilityResultSet {
    type Item = &'a FacilityRecord;
    type IntoIter = std::slice::Iter<'a, FacilityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<FacilityRecord> for FacilityResultSet {
    fn from_iter<I: IntoIterator<Item = FacilityRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
