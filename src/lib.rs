//! Facade crate for the food permit engine.
//!
//! This crate re-exports the core query types and exposes CSV ingestion
//! behind the `ingest` feature flag.

#![forbid(unsafe_code)]

pub use foodpermit_core::{
    EARTH_RADIUS_METRES, FieldKey, FoodPermitEngine, GeoIndex, PermitRecord, PrefixTrie,
    SuggestError, UnknownFieldKey, haversine_distance,
};

#[cfg(feature = "ingest")]
pub use foodpermit_data::{IngestError, IngestReport, LoadError, initialise_engine};
