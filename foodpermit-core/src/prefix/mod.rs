//! Per-field prefix indexes for autocomplete.
//!
//! [`build_prefix_indexes`] builds one [`PrefixTrie`] per requested
//! [`FieldKey`]. Each field is built as its own rayon task and the call
//! returns only once every task has finished; tasks hand their trie back
//! rather than writing into shared state.

use std::{collections::HashMap, time::Instant};

use log::info;
use rayon::prelude::*;

use crate::PermitRecord;

mod field;
mod trie;

pub use field::{DEFAULT_INDEXED_FIELDS, FIELD_KEYS, FieldKey, UnknownFieldKey};
pub use trie::PrefixTrie;

/// Immutable mapping from field key to its prefix trie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixIndexes {
    tries: HashMap<FieldKey, PrefixTrie>,
}

impl PrefixIndexes {
    /// Trie for `key`, if that field was indexed.
    #[must_use]
    pub fn get(&self, key: FieldKey) -> Option<&PrefixTrie> {
        self.tries.get(&key)
    }

    /// Indexed fields in key order.
    #[must_use]
    pub fn fields(&self) -> Vec<FieldKey> {
        let mut fields: Vec<_> = self.tries.keys().copied().collect();
        fields.sort_unstable();
        fields
    }

    /// Number of indexed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tries.len()
    }

    /// Whether no field was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tries.is_empty()
    }
}

impl FromIterator<(FieldKey, PrefixTrie)> for PrefixIndexes {
    fn from_iter<I: IntoIterator<Item = (FieldKey, PrefixTrie)>>(iter: I) -> Self {
        Self {
            tries: iter.into_iter().collect(),
        }
    }
}

/// Build the trie for a single field over `records`, in record order.
///
/// Values are lower-cased before insertion. Empty values are skipped.
#[must_use]
pub fn build_field_trie(records: &[PermitRecord], key: FieldKey) -> PrefixTrie {
    records
        .iter()
        .map(|record| key.value_of(record))
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Build one trie per distinct key in `keys`, concurrently.
///
/// # Examples
/// ```
/// use foodpermit_core::{FieldKey, PermitRecord, build_prefix_indexes};
///
/// let records = vec![PermitRecord {
///     applicant: "Tasty Tacos".into(),
///     ..PermitRecord::default()
/// }];
/// let indexes = build_prefix_indexes(&records, &[FieldKey::Applicant]);
/// let trie = indexes.get(FieldKey::Applicant).unwrap();
/// assert_eq!(trie.complete("tas"), vec!["tasty tacos"]);
/// assert!(indexes.get(FieldKey::Address).is_none());
/// ```
#[must_use]
pub fn build_prefix_indexes(records: &[PermitRecord], keys: &[FieldKey]) -> PrefixIndexes {
    let started = Instant::now();
    let mut distinct = keys.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let built: Vec<(FieldKey, PrefixTrie)> = distinct
        .into_par_iter()
        .map(|key| (key, build_field_trie(records, key)))
        .collect();
    let indexes: PrefixIndexes = built.into_iter().collect();

    info!(
        "Built {} prefix indexes over {} records in {:?}",
        indexes.len(),
        records.len(),
        started.elapsed()
    );
    indexes
}
