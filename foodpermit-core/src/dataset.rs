//! The loaded record sequence and its derived coordinates.

use geo::Coord;

use crate::{GeoIndex, PermitRecord};

/// Ordered permit records paired with a slot-aligned [`GeoIndex`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<PermitRecord>,
    geo: GeoIndex,
}

impl Dataset {
    /// Take ownership of `records` and derive their coordinates.
    #[must_use]
    pub fn new(records: Vec<PermitRecord>) -> Self {
        let geo = GeoIndex::from_records(&records);
        Self { records, geo }
    }

    /// Records in load order.
    #[must_use]
    pub fn records(&self) -> &[PermitRecord] {
        &self.records
    }

    /// Coordinates aligned with [`Dataset::records`].
    #[must_use]
    pub const fn geo_index(&self) -> &GeoIndex {
        &self.geo
    }

    /// Number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records strictly closer than `radius_m` metres to `(lat, lng)`, in
    /// load order. Inputs are not validated.
    #[must_use]
    pub fn geo_search(&self, lat: f64, lng: f64, radius_m: f64) -> Vec<&PermitRecord> {
        self.geo
            .within_radius(Coord { x: lng, y: lat }, radius_m)
            .filter_map(|position| self.records.get(position))
            .collect()
    }
}
