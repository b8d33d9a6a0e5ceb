use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

use crate::config::PLOT_CONFIG;

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub background: Color32,
    pub card: Color32,
    pub card_border: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub content_max_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY, // This sets every label globally to this color
        heading: Color32::WHITE,
        background: Color32::from_rgb(18, 18, 22),
        card: Color32::from_rgb(28, 28, 34),
        card_border: Color32::from_gray(50),
    },
    content_max_width: 960.0,
};

impl UiConfig {
    /// Frame for the whole page
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 24),
            ..Default::default()
        }
    }

    /// Rounded card used for the intake, the results and the info tiles
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::same(24),
            corner_radius: CornerRadius::same(12),
            ..Default::default()
        }
    }

    /// Drop zone border lights up while a file is dragged over the window
    pub fn dropzone_frame(&self, drag_active: bool) -> Frame {
        let (stroke_color, fill) = if drag_active {
            (
                PLOT_CONFIG.color_dropzone_active,
                PLOT_CONFIG.color_dropzone_fill_active,
            )
        } else {
            (PLOT_CONFIG.color_dropzone_idle, Color32::TRANSPARENT)
        };
        Frame {
            fill,
            stroke: Stroke::new(2.0, stroke_color),
            inner_margin: Margin::same(32),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }
}
