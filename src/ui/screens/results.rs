use {
    crate::{
        app::PageEvent,
        domain::{PredictionPoint, TimeWindow},
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt, show_prediction_chart},
    },
    eframe::egui::{Align, Layout, RichText, Ui},
    strum::IntoEnumIterator,
};

/// Results card: heading, window selector, chart and the way back to the intake.
pub(crate) fn render_results(
    ui: &mut Ui,
    results: &[PredictionPoint],
    window: TimeWindow,
) -> Option<PageEvent> {
    let mut event = None;

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&UI_TEXT.results_heading)
                    .size(22.0)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label_subdued(format!(
                    "{} • {} {}",
                    window,
                    results.len(),
                    UI_TEXT.results_points_suffix
                ));
            });
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.style_mut().spacing.item_spacing.x = 4.0;
            for option in TimeWindow::iter() {
                if ui
                    .selectable_button(&option.to_string(), option == window)
                    .clicked()
                    && option != window
                {
                    event = Some(PageEvent::SelectWindow(option));
                }
            }
        });
        ui.add_space(12.0);

        show_prediction_chart(ui, results, window);
        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            if ui.button(&UI_TEXT.upload_new_button).clicked() {
                event = Some(PageEvent::UploadNew);
            }
        });
    });

    event
}
