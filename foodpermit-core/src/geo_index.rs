//! Coordinate index and great-circle radius search.
//!
//! Coordinates are WGS84 `geo::Coord` values with `x = longitude` and
//! `y = latitude`. The index keeps one slot per record so that slot `i`
//! always describes record `i`; records whose coordinates cannot be parsed
//! hold an empty slot and never match a radius query.

use std::num::ParseFloatError;

use geo::Coord;
use log::warn;
use thiserror::Error;

use crate::PermitRecord;

/// Spherical Earth radius used by [`haversine_distance`], in metres.
pub const EARTH_RADIUS_METRES: f64 = 6_378_100.0;

/// Error returned when a record's coordinate text is not a finite float.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// The latitude column did not parse.
    #[error("invalid latitude {value:?}: {source}")]
    Latitude {
        /// Raw latitude text.
        value: String,
        /// Parser failure.
        #[source]
        source: ParseFloatError,
    },
    /// The longitude column did not parse.
    #[error("invalid longitude {value:?}: {source}")]
    Longitude {
        /// Raw longitude text.
        value: String,
        /// Parser failure.
        #[source]
        source: ParseFloatError,
    },
    /// The latitude column parsed to NaN or an infinity.
    #[error("latitude {value:?} is not finite")]
    NonFiniteLatitude {
        /// Raw latitude text.
        value: String,
    },
    /// The longitude column parsed to NaN or an infinity.
    #[error("longitude {value:?} is not finite")]
    NonFiniteLongitude {
        /// Raw longitude text.
        value: String,
    },
}

/// Parse the latitude and longitude columns of `record`.
///
/// # Errors
/// Returns [`CoordinateError`] naming the first column that failed to parse
/// or that holds `NaN`, `inf` or `-inf`.
///
/// # Examples
/// ```
/// use foodpermit_core::{PermitRecord, parse_coordinate};
///
/// let record = PermitRecord {
///     latitude: "37.5".into(),
///     longitude: "-122.25".into(),
///     ..PermitRecord::default()
/// };
/// let coord = parse_coordinate(&record).unwrap();
/// assert_eq!((coord.x, coord.y), (-122.25, 37.5));
/// ```
pub fn parse_coordinate(record: &PermitRecord) -> Result<Coord<f64>, CoordinateError> {
    let lat = record
        .latitude
        .parse::<f64>()
        .map_err(|source| CoordinateError::Latitude {
            value: record.latitude.clone(),
            source,
        })?;
    let lng = record
        .longitude
        .parse::<f64>()
        .map_err(|source| CoordinateError::Longitude {
            value: record.longitude.clone(),
            source,
        })?;
    if !lat.is_finite() {
        return Err(CoordinateError::NonFiniteLatitude {
            value: record.latitude.clone(),
        });
    }
    if !lng.is_finite() {
        return Err(CoordinateError::NonFiniteLongitude {
            value: record.longitude.clone(),
        });
    }
    Ok(Coord { x: lng, y: lat })
}

#[expect(clippy::float_arithmetic, reason = "haversine requires trigonometry")]
fn haversin(theta: f64) -> f64 {
    (theta / 2.0).sin().powi(2)
}

/// Great-circle distance in metres between two WGS84 coordinates.
///
/// Uses the haversine formula on a sphere of radius
/// [`EARTH_RADIUS_METRES`]. Inputs are in degrees.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use foodpermit_core::haversine_distance;
///
/// let a = Coord { x: 1.0, y: 1.0 };
/// let b = Coord { x: 2.0, y: 2.0 };
/// let d = haversine_distance(a, b);
/// assert!(d > 157_400.0 && d < 157_410.0);
/// assert_eq!(haversine_distance(a, a), 0.0);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "haversine requires trigonometry")]
pub fn haversine_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let lng_a = a.x.to_radians();
    let lng_b = b.x.to_radians();

    let h = haversin(lat_b - lat_a) + lat_a.cos() * lat_b.cos() * haversin(lng_b - lng_a);
    // Rounding can push `h` fractionally above one for antipodal points.
    // `clamp` keeps NaN, so a NaN distance never satisfies `< radius`.
    2.0 * EARTH_RADIUS_METRES * h.sqrt().clamp(0.0, 1.0).asin()
}

/// Coordinates derived from a record sequence, one slot per record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoIndex {
    slots: Vec<Option<Coord<f64>>>,
}

impl GeoIndex {
    /// Derive coordinates for every record, in record order.
    ///
    /// Records with unparsable coordinates keep an empty slot and are
    /// reported at warn level.
    #[must_use]
    pub fn from_records(records: &[PermitRecord]) -> Self {
        let slots = records
            .iter()
            .enumerate()
            .map(|(position, record)| match parse_coordinate(record) {
                Ok(coord) => Some(coord),
                Err(err) => {
                    warn!(
                        "Excluding record {position} (location id {:?}) from geo search: {err}",
                        record.locationid
                    );
                    None
                }
            })
            .collect();
        Self { slots }
    }

    /// Number of slots, equal to the number of records indexed.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the index has no slots.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a coordinate.
    #[must_use]
    pub fn located_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Coordinate for the record at `position`, if it parsed.
    #[must_use]
    pub fn coordinate(&self, position: usize) -> Option<Coord<f64>> {
        self.slots.get(position).copied().flatten()
    }

    /// Positions of records strictly closer than `radius_m` metres to
    /// `centre`, in ascending order.
    ///
    /// Performs a linear scan and no input validation.
    pub fn within_radius(
        &self,
        centre: Coord<f64>,
        radius_m: f64,
    ) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(move |(position, slot)| {
                slot.filter(|coord| haversine_distance(*coord, centre) < radius_m)
                    .map(|_| position)
            })
    }
}
