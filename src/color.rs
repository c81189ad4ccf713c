use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Format;

// ---------------------------------------------------------------------------
// Chart series colours
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
/// Used for the per-author bars in the Top Authors chart.
pub fn series_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, 0.75, 0.55))
        })
        .collect()
}

/// A fixed, recognisable colour per format, shared by every chart that
/// plots one format's data.
pub fn format_color(format: Format) -> Color32 {
    match format {
        Format::Ebook => hsl_to_color32(Hsl::new(210.0, 0.75, 0.55)),
        Format::Audiobook => hsl_to_color32(Hsl::new(30.0, 0.75, 0.55)),
    }
}

/// Colour for histograms not tied to a format (the wait-time copies chart).
pub fn neutral_color() -> Color32 {
    hsl_to_color32(Hsl::new(150.0, 0.55, 0.5))
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
