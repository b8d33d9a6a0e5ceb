use eframe::egui::Ui;

use crate::{
    app::{FileIntake, PageEvent, ReadyState, phases::PhaseView},
    ui::render_results,
};

impl PhaseView for ReadyState {
    fn show(&self, ui: &mut Ui, _intake: &FileIntake) -> Option<PageEvent> {
        render_results(ui, &self.results, self.window)
    }
}
