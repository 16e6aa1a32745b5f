//! Permit records as captured from the source dataset.
//!
//! Records are raw string tuples. Numeric and geographic interpretation
//! happens downstream in [`crate::geo_index`].

use thiserror::Error;

/// Number of columns every dataset row must carry.
pub const RECORD_WIDTH: usize = 23;

/// A single mobile food facility permit.
///
/// Field order mirrors the column order of the source dataset. When the
/// `serde` feature is enabled, records serialise with the dataset's original
/// column-derived names (`Locationid`, `Applicant`, `NOISent`, …).
///
/// # Examples
/// ```
/// use foodpermit_core::PermitRecord;
///
/// let record = PermitRecord {
///     applicant: "Tasty Tacos".into(),
///     latitude: "37.77".into(),
///     longitude: "-122.41".into(),
///     ..PermitRecord::default()
/// };
/// assert_eq!(record.applicant, "Tasty Tacos");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct PermitRecord {
    /// Location identifier.
    pub locationid: String,
    /// Name of the permit applicant.
    pub applicant: String,
    /// Facility type, for example `Truck` or `Push Cart`.
    pub facility_type: String,
    /// Street segment identifier.
    pub cnn: String,
    /// Free-text description of the location.
    pub location_description: String,
    /// Street address.
    pub address: String,
    /// Combined block and lot identifier.
    pub blocklot: String,
    /// Assessor block.
    pub block: String,
    /// Assessor lot.
    pub lot: String,
    /// Permit number.
    pub permit: String,
    /// Permit status, for example `APPROVED`.
    pub status: String,
    /// Food items offered.
    pub food_items: String,
    /// Projected x coordinate.
    pub x: String,
    /// Projected y coordinate.
    pub y: String,
    /// WGS84 latitude as captured from the source.
    pub latitude: String,
    /// WGS84 longitude as captured from the source.
    pub longitude: String,
    /// Link to the operating schedule.
    pub schedule: String,
    /// Notice of intent sent flag.
    #[cfg_attr(feature = "serde", serde(rename = "NOISent"))]
    pub noi_sent: String,
    /// Approval date.
    pub approved: String,
    /// Application received date.
    pub received: String,
    /// Prior permit flag.
    pub prior_permit: String,
    /// Permit expiration date.
    pub expiration_date: String,
    /// Human-readable `(lat, lng)` location.
    pub location: String,
}

/// Error returned when a row does not carry [`RECORD_WIDTH`] fields.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected {expected} fields per record, found {found}", expected = RECORD_WIDTH)]
pub struct RecordWidthError {
    /// Number of fields present in the rejected row.
    pub found: usize,
}

impl PermitRecord {
    /// Build a record from the fields of one dataset row, in column order.
    ///
    /// # Errors
    /// Returns [`RecordWidthError`] when the row does not have exactly
    /// [`RECORD_WIDTH`] fields.
    ///
    /// # Examples
    /// ```
    /// use foodpermit_core::{PermitRecord, RECORD_WIDTH};
    ///
    /// let mut fields = vec![String::new(); RECORD_WIDTH];
    /// fields[1] = "Tasty Tacos".into();
    /// let record = PermitRecord::from_fields(fields).unwrap();
    /// assert_eq!(record.applicant, "Tasty Tacos");
    ///
    /// assert!(PermitRecord::from_fields(["too", "short"]).is_err());
    /// ```
    pub fn from_fields<I, S>(fields: I) -> Result<Self, RecordWidthError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let [
            locationid,
            applicant,
            facility_type,
            cnn,
            location_description,
            address,
            blocklot,
            block,
            lot,
            permit,
            status,
            food_items,
            x,
            y,
            latitude,
            longitude,
            schedule,
            noi_sent,
            approved,
            received,
            prior_permit,
            expiration_date,
            location,
        ]: [String; RECORD_WIDTH] = fields
            .try_into()
            .map_err(|rejected: Vec<String>| RecordWidthError {
                found: rejected.len(),
            })?;

        Ok(Self {
            locationid,
            applicant,
            facility_type,
            cnn,
            location_description,
            address,
            blocklot,
            block,
            lot,
            permit,
            status,
            food_items,
            x,
            y,
            latitude,
            longitude,
            schedule,
            noi_sent,
            approved,
            received,
            prior_permit,
            expiration_date,
            location,
        })
    }
}
