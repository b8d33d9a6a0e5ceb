use std::ops::RangeInclusive;

use eframe::egui::{RichText, Ui};
use egui_plot::{AxisHints, GridMark, HPlacement, Plot, VPlacement};

use crate::config::PLOT_CONFIG;
use crate::domain::{PredictionPoint, TimeWindow};
use crate::ui::plot_layers::{LayerContext, PlotLayer, ScoreLineLayer, ScoreMarkerLayer};
use crate::ui::UI_TEXT;
use crate::utils::{format_clock_time, format_full_time};

/// Leading `min(window, len)` points. Position based: the timestamps are never consulted.
pub(crate) fn windowed(points: &[PredictionPoint], window: TimeWindow) -> &[PredictionPoint] {
    &points[..points.len().min(window.points())]
}

// Helper: Calculate a human-friendly step size (1, 2, 5, 10, 20, 50...)
fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    if raw_step <= 0.0 || !raw_step.is_finite() {
        return 1.0;
    }
    // Find magnitude (power of 10)
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag; // Scale to 1.0 .. 10.0

    // Snap to "Nice" integers
    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    // Never step less than one point
    (nice_step * mag).max(1.0)
}

/// Only whole positions inside the series get a label.
pub(crate) fn tick_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

/// Tooltip text for the point nearest to `x`.
pub(crate) fn hover_label(points: &[PredictionPoint], x: f64) -> String {
    if points.is_empty() {
        return String::new();
    }
    let idx = x.round().clamp(0.0, (points.len() - 1) as f64) as usize;
    let point = &points[idx];
    format!(
        "{}\n{}: {:.2}",
        format_full_time(&point.timestamp),
        UI_TEXT.plot_y_axis,
        point.score
    )
}

/// Data-driven score range with a little padding. No fixed 0..100 clamp.
pub(crate) fn y_bounds(points: &[PredictionPoint]) -> RangeInclusive<f64> {
    let (min, max) = points
        .iter()
        .map(|p| p.score)
        .filter(|s| s.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s), hi.max(s))
        });
    if !min.is_finite() {
        return 0.0..=1.0;
    }
    let range = max - min;
    let pad = if range > 0.0 {
        range * PLOT_CONFIG.plot_y_padding_pct
    } else {
        1.0
    };
    (min - pad)..=(max + pad)
}

fn create_time_axis(labels: Vec<String>) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis.clone())
        .formatter(move |mark, _range| tick_label(&labels, mark.value))
        .placement(VPlacement::Bottom)
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis.clone())
        .formatter(|mark, _range| format!("{:.0}", mark.value))
        .placement(HPlacement::Left)
}

/// Line chart of the windowed result set. Stateless: same inputs, same picture.
pub(crate) fn show_prediction_chart(ui: &mut Ui, points: &[PredictionPoint], window: TimeWindow) {
    let visible = windowed(points, window);
    if visible.is_empty() {
        ui.label(RichText::new(&UI_TEXT.results_empty).color(PLOT_CONFIG.color_warning));
        return;
    }

    let labels: Vec<String> = visible
        .iter()
        .map(|p| format_clock_time(&p.timestamp))
        .collect();
    let hover_points = visible.to_vec();
    let last_x = (visible.len() - 1) as f64;
    let x_bounds = -PLOT_CONFIG.plot_x_padding..=(last_x + PLOT_CONFIG.plot_x_padding);
    let y_range = y_bounds(visible);

    Plot::new("prediction_chart")
        .height(PLOT_CONFIG.chart_height)
        .custom_x_axes(vec![create_time_axis(labels)])
        .custom_y_axes(vec![create_y_axis()])
        .label_formatter(move |_name, value| hover_label(&hover_points, value.x))
        .x_grid_spacer(|input| {
            let (min, max) = input.bounds;
            let step = calculate_adaptive_step(max - min, PLOT_CONFIG.x_axis_target_ticks);

            let start = (min / step).ceil() as i64;
            let end = (max / step).floor() as i64;
            (start..=end)
                .map(|i| GridMark {
                    value: i as f64 * step,
                    step_size: step,
                })
                .collect()
        })
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(x_bounds);
            plot_ui.set_plot_bounds_y(y_range);

            let ctx = LayerContext { points: visible };
            let layers: [&dyn PlotLayer; 2] = [&ScoreLineLayer, &ScoreMarkerLayer];
            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
        });
}
