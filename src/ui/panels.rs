use eframe::egui::{self, Slider, Ui};

use crate::data::filter::{PayloadRange, SiteSelection};
use crate::state::AppState;

/// Step granularity of the payload sliders, in kg.
const PAYLOAD_STEP_KG: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the left control panel: site dropdown + payload range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Site dropdown ----
    // Options are derived from the dataset so the list never drifts from the
    // actual site names.
    ui.strong("Launch site");
    let sites = state.dataset.sites.clone();
    let current = state.site_selection.clone();
    egui::ComboBox::from_id_salt("site_select")
        .selected_text(current.label().to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SiteSelection::AllSites, "All Sites")
                .clicked()
            {
                state.set_site_selection(SiteSelection::AllSites);
            }
            for site in &sites {
                let selected = matches!(&current, SiteSelection::Site(s) if s == site);
                if ui.selectable_label(selected, site).clicked() {
                    state.set_site_selection(SiteSelection::Site(site.clone()));
                }
            }
        });

    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");
    let full = state.full_range();
    let mut low = state.payload_range.low;
    let mut high = state.payload_range.high;

    let low_changed = ui
        .add(
            Slider::new(&mut low, full.low..=full.high)
                .step_by(PAYLOAD_STEP_KG)
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            Slider::new(&mut high, full.low..=full.high)
                .step_by(PAYLOAD_STEP_KG)
                .text("max"),
        )
        .changed();

    if low_changed || high_changed {
        // Keep the pair ordered: the slider that crossed the other is the
        // one that gets clamped.
        if low > high {
            if low_changed {
                low = high;
            } else {
                high = low;
            }
        }
        state.set_payload_range(PayloadRange::new(low, high));
    }

    ui.add_space(8.0);
    if ui.small_button("Reset filters").clicked() {
        state.reset_filters();
    }

    ui.separator();
    ui.label(format!(
        "{} of {} launches match",
        state.visible_indices.len(),
        state.dataset.len()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: dashboard title and dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Launch Records Dashboard");
        ui.separator();
        ui.label(format!(
            "{} launches, {} sites, payloads {:.0} to {:.0} kg",
            state.dataset.len(),
            state.dataset.sites.len(),
            state.dataset.payload_min,
            state.dataset.payload_max
        ));
    });
}
