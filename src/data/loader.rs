use std::path::Path;

use anyhow::{Context, Result};

use super::model::{DatasetError, LaunchDataset, LaunchRecord};

/// Column headers the CSV input must carry. Checked up front so a renamed or
/// truncated export fails with a clear message instead of a row-level serde
/// error.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Flight Number",
    "Launch Site",
    "class",
    "Payload Mass (kg)",
    "Booster Version",
    "Booster Version Category",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – the canonical launch table (see [`REQUIRED_COLUMNS`])
/// * `.json` – records-oriented array of objects with the same field names
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(DatasetError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with the canonical column names, one launch per
/// row. Extra columns are ignored.
fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DatasetError::MissingColumn(col.to_string()).into());
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<LaunchRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(LaunchDataset::from_records(records)?)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Flight Number": 1,
///     "Launch Site": "CCAFS LC-40",
///     "class": 0,
///     "Payload Mass (kg)": 0.0,
///     "Booster Version": "F9 v1.0  B0003",
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<LaunchRecord> =
        serde_json::from_str(&text).context("parsing JSON records")?;

    Ok(LaunchDataset::from_records(records)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::data::model::Outcome;

    const HEADER: &str = "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

    fn temp_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_csv_with_canonical_headers() {
        let csv = format!(
            "{HEADER}\n\
             1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0\n\
             2,KSC LC-39A,1,2500.5,F9 FT B1021,FT\n"
        );
        let file = temp_file(".csv", &csv);

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].site, "CCAFS LC-40");
        assert_eq!(ds.records[0].outcome, Outcome::Failure);
        assert_eq!(ds.records[1].payload_mass_kg, 2500.5);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
    }

    #[test]
    fn missing_required_column_is_reported_by_name() {
        let csv = "Flight Number,Launch Site,class,Booster Version,Booster Version Category\n\
                   1,CCAFS LC-40,0,F9 v1.0  B0003,v1.0\n";
        let file = temp_file(".csv", csv);

        let err = load_file(file.path()).unwrap_err();
        match err.downcast_ref::<DatasetError>() {
            Some(DatasetError::MissingColumn(col)) => assert_eq!(col, "Payload Mass (kg)"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn header_only_csv_is_an_empty_dataset() {
        let file = temp_file(".csv", &format!("{HEADER}\n"));

        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DatasetError>(),
            Some(DatasetError::Empty)
        ));
    }

    #[test]
    fn malformed_row_fails_with_row_context() {
        let csv = format!(
            "{HEADER}\n\
             1,CCAFS LC-40,not-a-class,500,F9 v1.0  B0003,v1.0\n"
        );
        let file = temp_file(".csv", &csv);

        let err = load_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 0"));
    }

    #[test]
    fn loads_records_oriented_json() {
        let json = r#"[
            {"Flight Number": 1, "Launch Site": "VAFB SLC-4E", "class": 1,
             "Payload Mass (kg)": 500.0, "Booster Version": "F9 v1.1  B1003",
             "Booster Version Category": "v1.1"}
        ]"#;
        let file = temp_file(".json", json);

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].site, "VAFB SLC-4E");
        assert!(ds.records[0].outcome.is_success());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = temp_file(".parquet", "");

        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DatasetError>(),
            Some(DatasetError::UnsupportedExtension(ext)) if ext == "parquet"
        ));
    }
}
