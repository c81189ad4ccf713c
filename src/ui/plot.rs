use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::series_palette;
use crate::data::query::AuthorCount;

// ---------------------------------------------------------------------------
// Chart builders
// ---------------------------------------------------------------------------

const CHART_HEIGHT: f32 = 240.0;

/// Bucket `values` into fixed-width bins and draw them as a bar chart.
///
/// Bins snap to the nearest multiple of `bin_width`, so integer data with a
/// width of 1.0 gets one bar per exact value, centred on that value, and
/// 0.1-grid ratings land in their own bin despite float representation.
pub fn histogram(ui: &mut Ui, id: &str, x_label: &str, values: &[f64], bin_width: f64, color: Color32) {
    let mut bins: BTreeMap<i64, usize> = BTreeMap::new();
    for &v in values {
        let bin = (v / bin_width).round() as i64;
        *bins.entry(bin).or_default() += 1;
    }

    let bars: Vec<Bar> = bins
        .iter()
        .map(|(&bin, &count)| {
            Bar::new(bin as f64 * bin_width, count as f64).width(bin_width * 0.95)
        })
        .collect();

    let chart = BarChart::new(bars).color(color).name(x_label);

    Plot::new(id.to_string())
        .height(CHART_HEIGHT)
        .x_axis_label(x_label)
        .y_axis_label("count")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

/// One coloured bar per author, legend-labelled with the author's name.
pub fn author_bar_chart(ui: &mut Ui, id: &str, entries: &[AuthorCount]) {
    let colors = series_palette(entries.len());

    Plot::new(id.to_string())
        .height(CHART_HEIGHT)
        .y_axis_label("Books")
        .legend(Legend::default())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (i, (entry, color)) in entries.iter().zip(colors).enumerate() {
                let bar = Bar::new(i as f64, entry.books as f64)
                    .width(0.8)
                    .name(&entry.author);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .color(color)
                        .name(&entry.author),
                );
            }
        });
}
