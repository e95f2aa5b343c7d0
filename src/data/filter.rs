use super::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Filter predicates: site selection and payload range
// ---------------------------------------------------------------------------

/// The dropdown state: either no site constraint or one specific site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    AllSites,
    Site(String),
}

impl SiteSelection {
    /// Whether a launch from `site` passes the selection. Vacuously true
    /// under [`SiteSelection::AllSites`].
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(name) => name == site,
        }
    }

    /// Label used in the dropdown and in chart titles.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::AllSites => "All Sites",
            SiteSelection::Site(name) => name,
        }
    }
}

/// Inclusive payload-mass bounds in kg. The control layer keeps
/// `low <= high`; the filter does not re-check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// Inclusive on both bounds.
    pub fn contains(&self, mass_kg: f64) -> bool {
        self.low <= mass_kg && mass_kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Return indices of launches that pass both predicates, in dataset order.
///
/// A launch passes when:
/// * the site selection matches its `site` (always, under `AllSites`)
/// * its payload mass lies within `range`, bounds included
///
/// An empty result is a valid outcome, not an error; so is a selection
/// naming a site absent from the dataset (nothing matches). Pure function
/// of its inputs.
pub fn filter_indices(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(&rec.site) && range.contains(rec.payload_mass_kg))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
