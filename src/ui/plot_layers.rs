use egui_plot::{Line, PlotPoints, PlotUi, Points};

use crate::config::PLOT_CONFIG;
use crate::domain::PredictionPoint;
use crate::ui::UI_TEXT;

/// Everything a layer may draw from. Built once per frame.
pub(crate) struct LayerContext<'a> {
    /// Already windowed; x of point `i` is `i`.
    pub points: &'a [PredictionPoint],
}

pub(crate) trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

/// Position on the x axis is the index in the (windowed) result set, not the timestamp.
pub(crate) fn score_series(points: &[PredictionPoint]) -> Vec<[f64; 2]> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.score])
        .collect()
}

pub(crate) struct ScoreLineLayer;

impl PlotLayer for ScoreLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.points.len() < 2 {
            return;
        }
        plot_ui.line(
            Line::new(
                UI_TEXT.plot_y_axis.as_str(),
                PlotPoints::new(score_series(ctx.points)),
            )
            .color(PLOT_CONFIG.line_color)
            .width(PLOT_CONFIG.line_width),
        );
    }
}

pub(crate) struct ScoreMarkerLayer;

impl PlotLayer for ScoreMarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.points.is_empty() {
            return;
        }
        plot_ui.points(
            Points::new(
                UI_TEXT.plot_y_axis.as_str(),
                PlotPoints::new(score_series(ctx.points)),
            )
            .color(PLOT_CONFIG.marker_color)
            .radius(PLOT_CONFIG.marker_radius)
            .filled(true),
        );
    }
}
