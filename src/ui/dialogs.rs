use bevy_egui::egui;

use crate::state::{AppState, StubDialog};

/// Modal confirmations for the stubbed header actions. Saving and sharing
/// are owned by external collaborators; here they only acknowledge.
pub fn render_dialogs(ctx: &egui::Context, state: &mut AppState) {
    let Some(dialog) = state.stub_dialog else {
        return;
    };
    let (title, body) = match dialog {
        StubDialog::Saved => ("Saved", "Your decorated image was saved to the gallery!"),
        StubDialog::Shared => ("Share", "The share sheet has been opened!"),
    };
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(body);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    state.stub_dialog = None;
                }
            });
        });
}
