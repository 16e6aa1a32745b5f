//! Data loading for the food permit engine.
//!
//! Responsibilities:
//! - Stream the permit CSV into ordered [`foodpermit_core::PermitRecord`]s.
//! - Build a [`foodpermit_core::FoodPermitEngine`] from a dataset file.
//!
//! Boundaries:
//! - Do not encode query rules (live in `foodpermit-core`).
//! - Filesystem access goes through `foodpermit-fs`.
//!
//! Invariants:
//! - A failed load never yields a partially built engine.
//! - No global mutable state.

mod ingest;
mod load;

pub use ingest::{IngestError, IngestReport, IngestSummary, read_permit_records};
pub use load::{DEFAULT_DATASET_PATH, LoadError, initialise_engine, load_permit_records};
