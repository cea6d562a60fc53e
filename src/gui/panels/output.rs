use eframe::egui;

use crate::gui::state::AppState;

/// Generated stylesheet, read-only, with a copy button
pub fn output_panel(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Output");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(!state.output.is_empty(), egui::Button::new("Copy"))
                .clicked()
            {
                ui.ctx().copy_text(state.output.clone());
                state.set_success("Copied to clipboard");
            }
        });
    });

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add(
            egui::TextEdit::multiline(&mut state.output.as_str())
                .code_editor()
                .desired_width(f32::INFINITY)
                .desired_rows(8),
        );
    });
}
