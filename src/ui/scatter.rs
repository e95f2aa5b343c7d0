use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::color::OutcomeColors;
use crate::data::aggregate::scatter_points;
use crate::data::filter::SiteSelection;
use crate::data::model::Outcome;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Payload scatter (bottom panel)
// ---------------------------------------------------------------------------

/// Render the payload-vs-outcome scatter for the current filter result.
/// One point per filtered launch, colored by outcome.
pub fn payload_scatter(ui: &mut Ui, state: &AppState, colors: &OutcomeColors) {
    let title = match &state.site_selection {
        SiteSelection::AllSites => "Payload vs. Launch Outcome (All Sites)".to_string(),
        SiteSelection::Site(site) => format!("Payload vs. Launch Outcome ({site})"),
    };
    ui.heading(title);

    let points = scatter_points(state.visible_records());

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Mission Outcome")
        // Keep the axes pinned to the dataset domain so points do not jump
        // around while filtering.
        .include_x(state.dataset.payload_min)
        .include_x(state.dataset.payload_max)
        .include_y(-0.25)
        .include_y(1.25)
        .show(ui, |plot_ui| {
            for outcome in [Outcome::Failure, Outcome::Success] {
                let series: PlotPoints = points
                    .iter()
                    .filter(|p| p.outcome == outcome)
                    .map(|p| [p.payload_mass_kg, p.outcome.as_f64()])
                    .collect();

                plot_ui.points(
                    Points::new(series)
                        .name(outcome.label())
                        .color(colors.color_for(outcome))
                        .radius(3.0),
                );
            }
        });
}
