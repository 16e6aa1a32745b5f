//! Query facade over a loaded dataset and its prefix indexes.

use thiserror::Error;

use crate::{
    Dataset, FieldKey, PermitRecord, PrefixIndexes, UnknownFieldKey, build_prefix_indexes,
};

/// Errors returned by [`FoodPermitEngine::suggest`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuggestError {
    /// The key is not a recognised field name.
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldKey),
    /// The key is recognised but no index was built for it.
    #[error("field {key} is not indexed for suggestions")]
    FieldNotIndexed {
        /// The requested field.
        key: FieldKey,
    },
}

/// Read-only engine answering radius searches and prefix suggestions.
///
/// All state is built in [`FoodPermitEngine::new`] and never mutated
/// afterwards, so a shared reference may serve concurrent queries.
///
/// # Examples
/// ```
/// use foodpermit_core::{FieldKey, FoodPermitEngine, PermitRecord};
///
/// let records = vec![PermitRecord {
///     applicant: "Tasty Tacos".into(),
///     latitude: "1".into(),
///     longitude: "1".into(),
///     ..PermitRecord::default()
/// }];
/// let engine = FoodPermitEngine::new(records, &[FieldKey::Applicant]);
///
/// assert_eq!(engine.geo_search(1.0, 1.0, 1.0).len(), 1);
/// assert_eq!(engine.suggest("applicant", "TA").unwrap(), vec!["tasty tacos"]);
/// assert!(engine.suggest("address", "1").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodPermitEngine {
    dataset: Dataset,
    indexes: PrefixIndexes,
}

impl FoodPermitEngine {
    /// Derive coordinates and build a prefix index for each of `fields`.
    #[must_use]
    pub fn new(records: Vec<PermitRecord>, fields: &[FieldKey]) -> Self {
        let dataset = Dataset::new(records);
        let indexes = build_prefix_indexes(dataset.records(), fields);
        Self { dataset, indexes }
    }

    /// The underlying dataset.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The prefix indexes built at construction.
    #[must_use]
    pub const fn indexes(&self) -> &PrefixIndexes {
        &self.indexes
    }

    /// Records strictly closer than `radius_m` metres to `(lat, lng)`.
    ///
    /// Callers are expected to have checked that `lat` lies in `[-90, 90]`,
    /// `lng` in `[-180, 180]` and that `radius_m` is not negative.
    #[must_use]
    pub fn geo_search(&self, lat: f64, lng: f64, radius_m: f64) -> Vec<&PermitRecord> {
        self.dataset.geo_search(lat, lng, radius_m)
    }

    /// Lower-cased values of field `key` that start with `prefix`.
    ///
    /// The prefix is lower-cased before matching; an empty prefix matches
    /// every indexed value. Blank field values are never indexed, so they
    /// are not suggested even for an empty prefix. No match yields an empty
    /// vector.
    ///
    /// # Errors
    /// Returns [`SuggestError::UnknownField`] for an unrecognised key and
    /// [`SuggestError::FieldNotIndexed`] for a key without an index.
    pub fn suggest(&self, key: &str, prefix: &str) -> Result<Vec<String>, SuggestError> {
        let field = key.parse::<FieldKey>()?;
        self.suggest_field(field, prefix)
    }

    /// Typed variant of [`FoodPermitEngine::suggest`].
    ///
    /// # Errors
    /// Returns [`SuggestError::FieldNotIndexed`] when `key` has no index.
    pub fn suggest_field(&self, key: FieldKey, prefix: &str) -> Result<Vec<String>, SuggestError> {
        let trie = self
            .indexes
            .get(key)
            .ok_or(SuggestError::FieldNotIndexed { key })?;
        Ok(trie.complete(&prefix.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn applicant(name: &str) -> PermitRecord {
        PermitRecord {
            applicant: name.into(),
            ..PermitRecord::default()
        }
    }

    #[fixture]
    fn engine() -> FoodPermitEngine {
        FoodPermitEngine::new(
            vec![applicant("1"), applicant("12"), applicant("123")],
            &[FieldKey::Applicant],
        )
    }

    #[rstest]
    #[case("1", &["1", "12", "123"])]
    #[case("12", &["12", "123"])]
    #[case("2", &[])]
    fn suggest_matches_applicant_prefixes(
        engine: FoodPermitEngine,
        #[case] prefix: &str,
        #[case] expected: &[&str],
    ) {
        let expected: Vec<String> = expected.iter().map(ToString::to_string).collect();
        assert_eq!(engine.suggest("applicant", prefix), Ok(expected));
    }

    #[rstest]
    fn suggest_lower_cases_the_prefix() {
        let engine =
            FoodPermitEngine::new(vec![applicant("Off the Grid")], &[FieldKey::Applicant]);
        assert_eq!(
            engine.suggest("applicant", "OFF"),
            Ok(vec!["off the grid".to_owned()])
        );
    }

    #[rstest]
    fn empty_prefix_omits_blank_values() {
        let engine = FoodPermitEngine::new(
            vec![applicant(""), applicant("Tasty Tacos"), applicant("")],
            &[FieldKey::Applicant],
        );
        assert_eq!(
            engine.suggest("applicant", ""),
            Ok(vec!["tasty tacos".to_owned()])
        );
    }

    #[rstest]
    fn unknown_key_is_an_error(engine: FoodPermitEngine) {
        let err = engine.suggest("owner", "1").expect_err("unknown key");
        assert_eq!(
            err,
            SuggestError::UnknownField(UnknownFieldKey {
                key: "owner".into()
            })
        );
    }

    #[rstest]
    fn unindexed_key_is_an_error(engine: FoodPermitEngine) {
        let err = engine.suggest("address", "1").expect_err("unindexed key");
        assert_eq!(
            err,
            SuggestError::FieldNotIndexed {
                key: FieldKey::Address
            }
        );
    }

    #[rstest]
    fn non_finite_coordinates_are_never_located() {
        let located = |lat: &str, lng: &str| PermitRecord {
            latitude: lat.into(),
            longitude: lng.into(),
            ..PermitRecord::default()
        };
        let engine = FoodPermitEngine::new(
            vec![located("NaN", "1"), located("inf", "1"), located("1", "1")],
            &[],
        );
        assert_eq!(engine.dataset().geo_index().located_count(), 1);
        let hits = engine.geo_search(0.0, 0.0, 30_000_000.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|record| record.latitude.as_str()), Some("1"));
    }

    #[rstest]
    fn engine_is_shareable_across_threads(engine: FoodPermitEngine) {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        assert_send_sync(&engine);

        let shared = &engine;
        let results: Vec<Vec<String>> = std::thread::scope(|scope| {
            let handles: Vec<_> = ["1", "12", "123"]
                .into_iter()
                .map(|prefix| scope.spawn(move || shared.suggest("applicant", prefix)))
                .collect();
            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .expect("query thread")
                        .expect("known key")
                })
                .collect()
        });
        assert_eq!(results.iter().map(Vec::len).collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
