//! Confirmation dialogs.

use egui::{Ui, Window};
use roster_business::PageModal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalChoice {
    Confirm,
    Cancel,
}

/// Shows the open confirmation, if any. Closing the window counts as cancel.
pub fn show_confirmation(ui: &mut Ui, modal: &PageModal) -> Option<ModalChoice> {
    let (Some(title), Some(prompt)) = (modal.title(), modal.prompt()) else {
        return None;
    };

    let mut open = true;
    let mut choice = None;

    Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.label(&prompt);
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button("Confirm").clicked() {
                    choice = Some(ModalChoice::Confirm);
                }
                if ui.button("Cancel").clicked() {
                    choice = Some(ModalChoice::Cancel);
                }
            });
        });

    if !open {
        return Some(ModalChoice::Cancel);
    }
    choice
}
