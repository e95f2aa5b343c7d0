use eframe::egui::{Color32, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};

use crate::color::OutcomeColors;
use crate::data::aggregate::{count_outcomes, OutcomeCounts};
use crate::data::filter::SiteSelection;
use crate::data::model::Outcome;
use crate::state::AppState;

/// Slices are rendered in this fixed order so the legend matches the chart.
const SLICE_ORDER: [Outcome; 2] = [Outcome::Success, Outcome::Failure];

/// Largest angular extent of a single emitted polygon. Sectors wider than
/// this are split so every polygon handed to the tessellator stays convex.
const MAX_WEDGE: f32 = std::f32::consts::FRAC_PI_2;

// ---------------------------------------------------------------------------
// Success pie (central panel)
// ---------------------------------------------------------------------------

/// Render the outcome pie for the current filter result.
pub fn success_pie(ui: &mut Ui, state: &AppState, colors: &OutcomeColors) {
    let title = match &state.site_selection {
        SiteSelection::AllSites => "Total Success Launches".to_string(),
        SiteSelection::Site(site) => format!("Success vs. Failed for {site}"),
    };
    ui.heading(title);

    let counts = count_outcomes(state.visible_records());
    if counts.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches match the current filters.");
        });
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        draw_pie(ui, &counts, colors);
        ui.add_space(12.0);
        legend(ui, &counts, colors);
    });
}

fn draw_pie(ui: &mut Ui, counts: &OutcomeCounts, colors: &OutcomeColors) {
    let size = ui
        .available_height()
        .min(ui.available_width() * 0.6)
        .clamp(140.0, 320.0);
    let (response, painter) = ui.allocate_painter(Vec2::splat(size), Sense::hover());
    let center = response.rect.center();
    let radius = response.rect.width() * 0.5 - 4.0;

    let total = counts.total() as f32;
    // Start at 12 o'clock and sweep clockwise (screen y points down).
    let mut angle = -std::f32::consts::FRAC_PI_2;
    for outcome in SLICE_ORDER {
        let count = counts.count_for(outcome);
        if count == 0 {
            continue;
        }
        let color = colors.color_for(outcome);
        let mut remaining = count as f32 / total * std::f32::consts::TAU;
        while remaining > 1e-4 {
            let sweep = remaining.min(MAX_WEDGE);
            painter.add(wedge(center, radius, angle, sweep, color));
            angle += sweep;
            remaining -= sweep;
        }
    }
}

/// A filled circular sector approximated by short chords.
fn wedge(center: Pos2, radius: f32, start: f32, sweep: f32, fill: Color32) -> Shape {
    let segments = (sweep / 0.05).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(segments + 2);
    points.push(center);
    for i in 0..=segments {
        let a = start + sweep * i as f32 / segments as f32;
        points.push(center + radius * Vec2::new(a.cos(), a.sin()));
    }
    Shape::convex_polygon(points, fill, Stroke::NONE)
}

fn legend(ui: &mut Ui, counts: &OutcomeCounts, colors: &OutcomeColors) {
    let total = counts.total() as f64;
    ui.vertical(|ui: &mut Ui| {
        for outcome in SLICE_ORDER {
            let count = counts.count_for(outcome);
            let pct = count as f64 / total * 100.0;
            ui.horizontal(|ui: &mut Ui| {
                ui.label(RichText::new("●").color(colors.color_for(outcome)));
                ui.label(format!("{}: {count} ({pct:.1}%)", outcome.label()));
            });
        }
    });
}
