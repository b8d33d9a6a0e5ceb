use {
    crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
    eframe::egui::{RichText, Ui},
};

pub(crate) fn render_header(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.heading(
            RichText::new(&UI_TEXT.app_title)
                .size(32.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.add_space(8.0);
        ui.label(RichText::new(&UI_TEXT.app_subtitle).size(16.0));
    });
}

pub(crate) fn render_info_cards(ui: &mut Ui) {
    let cards = UI_TEXT.info_cards;
    ui.columns(cards.len(), |columns| {
        for (col, (value, caption)) in columns.iter_mut().zip(cards) {
            col.stat_tile(value, caption);
        }
    });
}
