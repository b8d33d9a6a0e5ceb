use {
    crate::{
        config::PLOT_CONFIG,
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
    },
    eframe::egui::{Button, RichText, Ui},
};

/// The drop zone plus the picker button. Returns true when the picker was requested.
/// While `busy`, the button is disabled and a spinner replaces the prompt.
pub(crate) fn render_intake(ui: &mut Ui, drag_active: bool, busy: bool) -> bool {
    let mut browse = false;

    UI_CONFIG.card_frame().show(ui, |ui| {
        UI_CONFIG.dropzone_frame(drag_active).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                if busy {
                    ui.spinner();
                } else {
                    ui.label(RichText::new("⬆").size(32.0).color(PLOT_CONFIG.line_color));
                }
                ui.add_space(12.0);

                ui.label(RichText::new(&UI_TEXT.intake_heading).size(18.0).strong());
                let hint = if drag_active {
                    &UI_TEXT.intake_drop_now
                } else {
                    &UI_TEXT.intake_hint
                };
                ui.label_subdued(hint.as_str());
                ui.add_space(12.0);

                let text = if busy {
                    &UI_TEXT.intake_button_busy
                } else {
                    &UI_TEXT.intake_button
                };
                browse = ui
                    .add_enabled(!busy, Button::new(RichText::new(text).strong()))
                    .clicked();

                ui.add_space(8.0);
                ui.label_subdued(UI_TEXT.intake_supported.as_str());
            });
        });
    });

    browse
}
