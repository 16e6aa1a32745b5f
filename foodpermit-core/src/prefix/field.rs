//! Field keys accepted by the suggestion index.
//!
//! The key-to-column mapping is data: [`FIELD_KEYS`] lists every recognised
//! key, and [`FieldKey::value_of`] is the only place a key touches a record.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::PermitRecord;

/// Record columns that can back a prefix index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    /// The applicant name.
    Applicant,
    /// The street address.
    Address,
    /// The free-text location description.
    LocationDescription,
    /// The facility type.
    FacilityType,
    /// The food items description.
    FoodItems,
}

/// Recognised key names and the field each one addresses.
pub const FIELD_KEYS: [(&str, FieldKey); 5] = [
    ("applicant", FieldKey::Applicant),
    ("address", FieldKey::Address),
    ("locationDescription", FieldKey::LocationDescription),
    ("facilityType", FieldKey::FacilityType),
    ("foodItems", FieldKey::FoodItems),
];

/// Fields indexed when the caller does not choose.
pub const DEFAULT_INDEXED_FIELDS: [FieldKey; 3] = [
    FieldKey::Applicant,
    FieldKey::Address,
    FieldKey::LocationDescription,
];

/// Error returned when a key name is not in [`FIELD_KEYS`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown field key {key:?}")]
pub struct UnknownFieldKey {
    /// The rejected key.
    pub key: String,
}

impl FieldKey {
    /// Key name as accepted by [`FieldKey::from_str`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applicant => "applicant",
            Self::Address => "address",
            Self::LocationDescription => "locationDescription",
            Self::FacilityType => "facilityType",
            Self::FoodItems => "foodItems",
        }
    }

    /// The column of `record` this key addresses.
    #[must_use]
    pub fn value_of(self, record: &PermitRecord) -> &str {
        match self {
            Self::Applicant => &record.applicant,
            Self::Address => &record.address,
            Self::LocationDescription => &record.location_description,
            Self::FacilityType => &record.facility_type,
            Self::FoodItems => &record.food_items,
        }
    }
}

impl FromStr for FieldKey {
    type Err = UnknownFieldKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FIELD_KEYS
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, key)| *key)
            .ok_or_else(|| UnknownFieldKey { key: s.to_owned() })
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
