use std::collections::BTreeMap;
use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::ColorMap;
use crate::data::aggregate::PieChart;
use crate::data::filter::scatter_title;
use crate::state::AppState;

/// Largest angle covered by one polygon; egui only fills convex shapes.
const MAX_WEDGE: f64 = TAU / 16.0;
const ARC_SEGMENTS_PER_WEDGE: usize = 8;

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Split the unit circle into `(start, end)` angles proportional to counts.
/// Angles start at twelve o'clock and run clockwise. Zero counts get an
/// empty span.
pub fn slice_angles(counts: &[usize]) -> Vec<(f64, f64)> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return vec![(0.0, 0.0); counts.len()];
    }
    let mut start = 0.0;
    counts
        .iter()
        .map(|&n| {
            let end = start + TAU * n as f64 / total as f64;
            let span = (start, end);
            start = end;
            span
        })
        .collect()
}

/// Point on the unit circle for a clockwise angle measured from twelve o'clock.
fn circle_point(angle: f64, radius: f64) -> [f64; 2] {
    [radius * angle.sin(), radius * angle.cos()]
}

/// Convex wedges covering `[start, end]`.
fn wedges(start: f64, end: f64) -> Vec<Vec<[f64; 2]>> {
    let n = ((end - start) / MAX_WEDGE).ceil().max(1.0) as usize;
    let step = (end - start) / n as f64;
    (0..n)
        .map(|w| {
            let a0 = start + step * w as f64;
            let mut pts = vec![[0.0, 0.0]];
            for k in 0..=ARC_SEGMENTS_PER_WEDGE {
                let a = a0 + step * k as f64 / ARC_SEGMENTS_PER_WEDGE as f64;
                pts.push(circle_point(a, 1.0));
            }
            pts
        })
        .collect()
}

/// Render the pie chart for the current site selection.
pub fn pie_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let pie: &PieChart = &state.pie;
    ui.heading(&pie.title);

    if pie.total() == 0 {
        ui.label(RichText::new("No launches for this selection.").weak());
        return;
    }

    let colors: &ColorMap = &state.site_colors;
    let counts: Vec<usize> = pie.slices.iter().map(|s| s.count).collect();
    let angles = slice_angles(&counts);
    let total = pie.total() as f64;

    Plot::new("success_pie_chart")
        .legend(Legend::default())
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.2)
        .include_x(1.2)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            for (slice, &(start, end)) in pie.slices.iter().zip(&angles) {
                if slice.count == 0 {
                    continue;
                }
                let color = colors.slice_color(&slice.key);
                let name = format!("{} ({})", slice.label(), slice.count);

                for wedge in wedges(start, end) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(wedge))
                            .name(&name)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, color)),
                    );
                }

                let [x, y] = circle_point((start + end) / 2.0, 0.65);
                let pct = 100.0 * slice.count as f64 / total;
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(x, y),
                        RichText::new(format!("{pct:.1}%")).color(Color32::BLACK).strong(),
                    )
                    .name(&name),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Render payload mass against outcome, one series per booster category.
pub fn scatter_chart(ui: &mut Ui, state: &AppState, height: f32) {
    ui.heading(scatter_title(&state.controls.site));
    if state.dataset.is_empty() {
        ui.label(RichText::new("The dataset has no launches.").weak());
        return;
    }

    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &state.scatter_indices {
        let rec = &state.dataset.records[idx];
        series
            .entry(rec.booster_category.as_str())
            .or_default()
            .push([rec.payload_mass_kg, rec.outcome.as_f64()]);
    }

    let bounds = state.config.slider_bounds;

    Plot::new("success_payload_scatter_chart")
        .legend(Legend::default())
        .height(height)
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(bounds.min)
        .include_x(bounds.max)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, points) in series {
                plot_ui.points(
                    Points::new(PlotPoints::new(points))
                        .name(category)
                        .color(state.booster_colors.color_for(category))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_cover_the_full_circle_in_proportion() {
        let angles = slice_angles(&[1, 0, 3]);
        assert_eq!(angles.len(), 3);
        assert_eq!(angles[0].0, 0.0);
        assert!((angles[0].1 - TAU / 4.0).abs() < 1e-12);
        assert_eq!(angles[1].0, angles[1].1);
        assert!((angles[2].1 - TAU).abs() < 1e-12);
    }

    #[test]
    fn all_zero_counts_give_empty_spans() {
        assert_eq!(slice_angles(&[0, 0]), vec![(0.0, 0.0), (0.0, 0.0)]);
    }

    #[test]
    fn wedges_stay_convex() {
        let parts = wedges(0.0, TAU * 0.75);
        assert!(parts.len() >= 12);
        for wedge in &parts {
            assert_eq!(wedge[0], [0.0, 0.0]);
            assert_eq!(wedge.len(), ARC_SEGMENTS_PER_WEDGE + 2);
        }
    }
}
