use crate::data::filter::{filter_indices, PayloadRange, SiteSelection};
use crate::data::model::{LaunchDataset, LaunchRecord};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, immutable after startup.
    pub dataset: LaunchDataset,

    /// Current dropdown selection.
    pub site_selection: SiteSelection,

    /// Current payload-range control. The control panel keeps it ordered.
    pub payload_range: PayloadRange,

    /// Indices of launches passing the current filters. Recomputed on every
    /// control change; both charts read the same set, so they always refresh
    /// together.
    pub visible_indices: Vec<usize>,
}

impl AppState {
    /// Start from the unfiltered view: all sites, full payload range.
    pub fn new(dataset: LaunchDataset) -> Self {
        let visible_indices = (0..dataset.len()).collect();
        let payload_range = PayloadRange::new(dataset.payload_min, dataset.payload_max);
        AppState {
            dataset,
            site_selection: SiteSelection::AllSites,
            payload_range,
            visible_indices,
        }
    }

    /// The dataset's full payload domain.
    pub fn full_range(&self) -> PayloadRange {
        PayloadRange::new(self.dataset.payload_min, self.dataset.payload_max)
    }

    /// Recompute `visible_indices` after a control change.
    pub fn refilter(&mut self) {
        self.visible_indices =
            filter_indices(&self.dataset, &self.site_selection, self.payload_range);
    }

    /// Change the dropdown selection and refilter.
    pub fn set_site_selection(&mut self, selection: SiteSelection) {
        self.site_selection = selection;
        self.refilter();
    }

    /// Change the payload range and refilter.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        self.payload_range = range;
        self.refilter();
    }

    /// Restore the initial unfiltered view.
    pub fn reset_filters(&mut self) {
        self.site_selection = SiteSelection::AllSites;
        self.payload_range = self.full_range();
        self.refilter();
    }

    /// Launches passing the current filters, in dataset order.
    pub fn visible_records(&self) -> impl Iterator<Item = &LaunchRecord> {
        self.dataset.select(&self.visible_indices)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn rec(flight: u32, site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            flight_number: flight,
            site: site.to_string(),
            outcome,
            payload_mass_kg: payload,
            booster_version: "F9 B5 B1049".to_string(),
            booster_category: "B5".to_string(),
        }
    }

    fn state() -> AppState {
        let dataset = LaunchDataset::from_records(vec![
            rec(1, "CCAFS LC-40", 500.0, Outcome::Failure),
            rec(2, "KSC LC-39A", 3000.0, Outcome::Success),
            rec(3, "CCAFS LC-40", 6000.0, Outcome::Success),
        ])
        .unwrap();
        AppState::new(dataset)
    }

    #[test]
    fn initial_state_is_the_unfiltered_view() {
        let state = state();
        assert_eq!(state.site_selection, SiteSelection::AllSites);
        assert_eq!(state.payload_range, state.full_range());
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn changing_the_site_refilters() {
        let mut state = state();
        state.set_site_selection(SiteSelection::Site("KSC LC-39A".to_string()));
        assert_eq!(state.visible_indices, vec![1]);
    }

    #[test]
    fn changing_the_range_refilters() {
        let mut state = state();
        state.set_payload_range(PayloadRange::new(1000.0, 7000.0));
        assert_eq!(state.visible_indices, vec![1, 2]);
    }

    #[test]
    fn both_controls_constrain_the_same_result() {
        let mut state = state();
        state.set_site_selection(SiteSelection::Site("CCAFS LC-40".to_string()));
        state.set_payload_range(PayloadRange::new(1000.0, 7000.0));
        assert_eq!(state.visible_indices, vec![2]);
    }

    #[test]
    fn reset_restores_the_initial_view() {
        let mut state = state();
        state.set_site_selection(SiteSelection::Site("VAFB SLC-4E".to_string()));
        assert!(state.visible_indices.is_empty());

        state.reset_filters();
        assert_eq!(state.site_selection, SiteSelection::AllSites);
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }
}
