use eframe::egui::Ui;

use crate::{
    app::{FileIntake, PageEvent, UploadingState, phases::PhaseView},
    ui::{UI_TEXT, UiStyleExt, render_info_cards, render_intake},
};

impl PhaseView for UploadingState {
    fn show(&self, ui: &mut Ui, _intake: &FileIntake) -> Option<PageEvent> {
        // Busy intake: no trigger, so no second upload can start.
        render_intake(ui, false, true);
        ui.vertical_centered(|ui| {
            ui.label_subdued(format!("{} {}", UI_TEXT.uploading_prefix, self.file_name));
        });
        ui.add_space(24.0);
        render_info_cards(ui);
        None
    }
}
