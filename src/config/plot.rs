//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Score line
    pub line_color: Color32,
    pub line_width: f32,

    /// Point markers drawn on top of the line
    pub marker_color: Color32,
    pub marker_radius: f32,

    /// Fixed chart height in points
    pub chart_height: f32,

    /// Target number of labelled ticks along the time axis
    pub x_axis_target_ticks: f64,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_x_padding: f64,     // Half a slot either side so the end markers aren't clipped

    // --- SEMANTIC COLORS ---
    pub color_success: Color32,
    pub color_failure: Color32,
    pub color_warning: Color32,

    pub color_text_neutral: Color32,
    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,

    // INTAKE SURFACE
    pub color_dropzone_idle: Color32,
    pub color_dropzone_active: Color32,
    pub color_dropzone_fill_active: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    line_color: Color32::from_rgb(0, 191, 255), // Deep sky blue
    line_width: 3.0,

    marker_color: Color32::from_rgb(0, 191, 255),
    marker_radius: 4.0,

    chart_height: 384.0,
    x_axis_target_ticks: 8.0,

    plot_y_padding_pct: 0.05,
    plot_x_padding: 0.5,

    color_success: Color32::from_rgb(100, 255, 100),
    color_failure: Color32::from_rgb(255, 80, 80),
    color_warning: Color32::from_rgb(255, 215, 0), // Gold

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    color_dropzone_idle: Color32::from_gray(80),
    color_dropzone_active: Color32::from_rgb(0, 191, 255),
    color_dropzone_fill_active: Color32::from_rgba_premultiplied(0, 24, 32, 40),
};
