//! Core in-memory engine for food facility permit lookups.
//!
//! A [`FoodPermitEngine`] owns an ordered, immutable [`Dataset`] of
//! [`PermitRecord`] values together with:
//!
//! - a [`GeoIndex`] of WGS84 coordinates (`x = longitude`, `y = latitude`)
//!   aligned slot-for-slot with the records, scanned for haversine radius
//!   queries;
//! - one [`PrefixTrie`] per indexed [`FieldKey`], built concurrently at
//!   construction, for autocomplete.
//!
//! Nothing is mutated after construction. Parsing the source file lives in
//! `foodpermit-data`.

#![forbid(unsafe_code)]

pub mod dataset;
pub mod engine;
pub mod geo_index;
pub mod prefix;
pub mod record;

pub use dataset::Dataset;
pub use engine::{FoodPermitEngine, SuggestError};
pub use geo_index::{
    CoordinateError, EARTH_RADIUS_METRES, GeoIndex, haversine_distance, parse_coordinate,
};
pub use prefix::{
    DEFAULT_INDEXED_FIELDS, FIELD_KEYS, FieldKey, PrefixIndexes, PrefixTrie, UnknownFieldKey,
    build_field_trie, build_prefix_indexes,
};
pub use record::{PermitRecord, RECORD_WIDTH, RecordWidthError};
