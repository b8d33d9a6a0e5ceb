use {
    crate::{
        app::NotificationKind,
        config::PLOT_CONFIG,
        ui::UI_CONFIG,
    },
    eframe::egui::{Button, Color32, Response, RichText, Ui},
};

pub(crate) trait NotificationColor {
    fn color(&self) -> Color32;
}

impl NotificationColor for NotificationKind {
    fn color(&self) -> Color32 {
        match self {
            Self::Success => PLOT_CONFIG.color_success,
            Self::Destructive => PLOT_CONFIG.color_failure,
        }
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    /// Toggle-style button: selection fill when active, plain otherwise.
    fn selectable_button(&mut self, text: &str, is_active: bool) -> Response;
    /// Big value over a small caption.
    fn stat_tile(&mut self, value: &str, caption: &str);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn selectable_button(&mut self, text: &str, is_active: bool) -> Response {
        let btn = if is_active {
            Button::new(RichText::new(text).color(PLOT_CONFIG.color_text_primary))
                .fill(self.visuals().selection.bg_fill)
                .stroke(self.visuals().selection.stroke)
        } else {
            Button::new(text)
        };
        self.add(btn)
    }

    fn stat_tile(&mut self, value: &str, caption: &str) {
        UI_CONFIG.card_frame().show(self, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(value)
                        .size(22.0)
                        .strong()
                        .color(PLOT_CONFIG.line_color),
                );
                ui.label_subdued(caption);
            });
        });
    }
}
