use eframe::egui::Ui;

use crate::app::{FileIntake, PageEvent};

/// Draws one page state and reports what the user asked for.
/// Views never mutate state; the controller applies the returned event.
pub(crate) trait PhaseView {
    fn show(&self, ui: &mut Ui, intake: &FileIntake) -> Option<PageEvent>;
}
