use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Outcome;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.70, 0.50);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: outcome → Color32
// ---------------------------------------------------------------------------

/// Colour assignment for the two outcome categories, shared by both charts
/// so pie slices and scatter series stay consistent.
#[derive(Debug, Clone)]
pub struct OutcomeColors {
    failure: Color32,
    success: Color32,
}

impl Default for OutcomeColors {
    fn default() -> Self {
        // Evenly spaced hues for two categories: hue 0 (red) lands on
        // failure, hue 180 (cyan) on success.
        let palette = generate_palette(2);
        OutcomeColors {
            failure: palette[0],
            success: palette[1],
        }
    }
}

impl OutcomeColors {
    /// Look up the colour for an outcome.
    pub fn color_for(&self, outcome: Outcome) -> Color32 {
        match outcome {
            Outcome::Failure => self.failure,
            Outcome::Success => self.success,
        }
    }
}
