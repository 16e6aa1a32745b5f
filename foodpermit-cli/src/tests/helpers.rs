//! Test helpers for writing small permit datasets to disk.

use camino::Utf8PathBuf;
use foodpermit_core::RECORD_WIDTH;
use tempfile::TempDir;

/// A single dataset row described by the columns the tests care about.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Row<'a> {
    pub(super) applicant: &'a str,
    pub(super) facility_type: &'a str,
    pub(super) address: &'a str,
    pub(super) latitude: &'a str,
    pub(super) longitude: &'a str,
}

impl Row<'_> {
    fn to_line(self) -> String {
        let mut fields = vec![""; RECORD_WIDTH];
        for (position, value) in [
            (1, self.applicant),
            (2, self.facility_type),
            (5, self.address),
            (14, self.latitude),
            (15, self.longitude),
        ] {
            if let Some(slot) = fields.get_mut(position) {
                *slot = value;
            }
        }
        fields.join(",")
    }
}

/// Dataset file kept alive for the duration of a test.
pub(super) struct DatasetFile {
    dir: TempDir,
    path: Utf8PathBuf,
}

impl DatasetFile {
    pub(super) fn new(rows: &[Row<'_>]) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("permits.csv"))
            .expect("utf-8 tempdir");
        let header = (0..RECORD_WIDTH)
            .map(|i| format!("column{i}"))
            .collect::<Vec<_>>()
            .join(",");
        let body = rows
            .iter()
            .map(|row| row.to_line())
            .collect::<Vec<_>>()
            .join("\n");
        std::fs::write(&path, format!("{header}\n{body}\n")).expect("write dataset");
        Self { dir, path }
    }

    pub(super) fn path(&self) -> Utf8PathBuf {
        self.path.clone()
    }

    pub(super) fn dir(&self) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().to_path_buf()).expect("utf-8 tempdir")
    }
}

/// Three permits: two located one degree apart and one without coordinates.
pub(super) fn sample_rows() -> Vec<Row<'static>> {
    vec![
        Row {
            applicant: "Tasty Tacos",
            facility_type: "Truck",
            address: "1 Market St",
            latitude: "1",
            longitude: "1",
        },
        Row {
            applicant: "Taco Truck",
            facility_type: "Truck",
            address: "12 Mission St",
            latitude: "2",
            longitude: "2",
        },
        Row {
            applicant: "Burger Bus",
            facility_type: "Push Cart",
            address: "2 Howard St",
            latitude: "",
            longitude: "",
        },
    ]
}

/// Parse captured output as a JSON value.
pub(super) fn parse_output(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("output is valid JSON")
}
