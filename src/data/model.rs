use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Outcome – binary mission result
// ---------------------------------------------------------------------------

/// Mission outcome as recorded in the source table (`class` column, 0 / 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("outcome must be 0 or 1, got {other}")),
        }
    }
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Numeric value for the scatter y-axis (failure = 0.0, success = 1.0).
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }

    /// Legend / pie-slice label.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch. Serde renames follow the source table's headers so both
/// the CSV and JSON loaders can deserialize rows directly.
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number")]
    pub flight_number: u32,
    #[serde(rename = "Launch Site")]
    pub site: String,
    #[serde(rename = "class")]
    pub outcome: Outcome,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    pub booster_version: String,
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Domain errors raised while building a [`LaunchDataset`]. All of them are
/// fatal at startup: the dashboard has no meaning without data.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset contains no launch records")]
    Empty,
    #[error("required column '{0}' not found in input")]
    MissingColumn(String),
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with indices computed once at construction.
/// Read-only for the rest of the process lifetime.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches, in source order.
    pub records: Vec<LaunchRecord>,
    /// Distinct launch-site names, sorted. This is the dropdown domain.
    pub sites: Vec<String>,
    /// Smallest payload mass present in the dataset.
    pub payload_min: f64,
    /// Largest payload mass present in the dataset.
    pub payload_max: f64,
}

impl LaunchDataset {
    /// Build site and payload indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let sites: Vec<String> = records
            .iter()
            .map(|rec| rec.site.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;
        for rec in &records {
            payload_min = payload_min.min(rec.payload_mass_kg);
            payload_max = payload_max.max(rec.payload_mass_kg);
        }

        Ok(LaunchDataset {
            records,
            sites,
            payload_min,
            payload_max,
        })
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty (never true for a constructed dataset).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// View the records behind a set of filtered indices, in index order.
    pub fn select<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = &'a LaunchRecord> {
        indices.iter().map(|&i| &self.records[i])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(flight: u32, site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            flight_number: flight,
            site: site.to_string(),
            outcome,
            payload_mass_kg: payload,
            booster_version: "F9 v1.1".to_string(),
            booster_category: "v1.1".to_string(),
        }
    }

    #[test]
    fn dataset_indexes_sites_and_payload_bounds() {
        let ds = LaunchDataset::from_records(vec![
            rec(1, "KSC LC-39A", 3500.0, Outcome::Success),
            rec(2, "CCAFS LC-40", 500.0, Outcome::Failure),
            rec(3, "KSC LC-39A", 9600.0, Outcome::Success),
        ])
        .unwrap();

        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(ds.payload_min, 500.0);
        assert_eq!(ds.payload_max, 9600.0);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = LaunchDataset::from_records(Vec::new()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn select_preserves_index_order() {
        let ds = LaunchDataset::from_records(vec![
            rec(1, "A", 100.0, Outcome::Success),
            rec(2, "B", 200.0, Outcome::Failure),
            rec(3, "C", 300.0, Outcome::Success),
        ])
        .unwrap();

        let flights: Vec<u32> = ds.select(&[2, 0]).map(|r| r.flight_number).collect();
        assert_eq!(flights, vec![3, 1]);
    }

    #[test]
    fn outcome_accepts_only_binary_values() {
        assert_eq!(Outcome::try_from(0).unwrap(), Outcome::Failure);
        assert_eq!(Outcome::try_from(1).unwrap(), Outcome::Success);
        assert!(Outcome::try_from(2).is_err());
    }
}
