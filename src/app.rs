use eframe::egui;

use crate::color::OutcomeColors;
use crate::state::AppState;
use crate::ui::{panels, pie, scatter};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchBoardApp {
    pub state: AppState,
    colors: OutcomeColors,
}

impl LaunchBoardApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            colors: OutcomeColors::default(),
        }
    }
}

impl eframe::App for LaunchBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filter controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: payload scatter ----
        egui::TopBottomPanel::bottom("scatter_panel")
            .default_height(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                scatter::payload_scatter(ui, &self.state, &self.colors);
            });

        // ---- Central panel: success pie ----
        egui::CentralPanel::default().show(ctx, |ui| {
            pie::success_pie(ui, &self.state, &self.colors);
        });
    }
}
