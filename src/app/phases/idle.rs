use eframe::egui::Ui;

use crate::{
    app::{FileIntake, IdleState, PageEvent, phases::PhaseView},
    ui::{render_info_cards, render_intake},
};

impl PhaseView for IdleState {
    fn show(&self, ui: &mut Ui, intake: &FileIntake) -> Option<PageEvent> {
        let browse = render_intake(ui, intake.is_drag_active(), false);
        ui.add_space(24.0);
        render_info_cards(ui);
        browse.then_some(PageEvent::PickFile)
    }
}
