mod plot_layers;
mod prediction_chart;
mod screens;
mod styles;
mod toasts;
mod ui_config;
mod ui_text;

pub(crate) use prediction_chart::show_prediction_chart;

pub(crate) use screens::{render_header, render_info_cards, render_intake, render_results};

pub(crate) use styles::{NotificationColor, UiStyleExt};
pub(crate) use toasts::ToastStack;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
