mod canvas;
mod output;
mod sidebar;

pub use canvas::canvas_panel;
pub use output::output_panel;
pub use sidebar::sidebar_panel;

use eframe::egui;

use super::state::{AppState, Status, StatusResult};
use crate::session::ToolState;

/// Action requested by the bottom bar
#[derive(Default)]
pub struct BottomBarAction {
    pub open_requested: bool,
    pub add_requested: bool,
    pub generate_requested: bool,
    pub save_requested: bool,
}

/// Bottom bar with the tool buttons and status
pub fn bottom_bar(ui: &mut egui::Ui, state: &mut AppState) -> BottomBarAction {
    let mut action = BottomBarAction::default();

    ui.horizontal(|ui| {
        let tool_state = state.session.as_ref().map(|s| s.state());
        let has_sprites = state
            .session
            .as_ref()
            .is_some_and(|s| !s.registry().is_empty());

        if ui.button("Open Image").clicked() {
            action.open_requested = true;
        }

        ui.separator();

        if ui
            .add_enabled(
                tool_state == Some(ToolState::Pending),
                egui::Button::new("Add Sprite"),
            )
            .clicked()
        {
            action.add_requested = true;
        }

        if ui
            .add_enabled(has_sprites, egui::Button::new("Generate"))
            .clicked()
        {
            action.generate_requested = true;
        }

        ui.separator();

        // Status text
        let status_text = match &state.status {
            Status::Idle => match tool_state {
                None => "Open a sprite sheet".to_string(),
                Some(ToolState::Idle) => "Drag towards the bottom-right to select".to_string(),
                Some(ToolState::Dragging) => "Selecting...".to_string(),
                Some(ToolState::Pending) => "Selection ready".to_string(),
            },
            Status::Done { result, .. } => match result {
                StatusResult::Success(msg) => msg.clone(),
                StatusResult::Error(err) => format!("Error: {}", err),
            },
        };

        let text_color = match &state.status {
            Status::Done {
                result: StatusResult::Error(_),
                ..
            } => Some(egui::Color32::from_rgb(255, 100, 100)),
            Status::Done {
                result: StatusResult::Success(_),
                ..
            } => Some(egui::Color32::from_rgb(100, 200, 100)),
            Status::Idle => None,
        };

        if let Some(color) = text_color {
            ui.colored_label(color, status_text);
        } else {
            ui.label(status_text);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(has_sprites, egui::Button::new("Save CSS..."))
                .clicked()
            {
                action.save_requested = true;
            }
            ui.checkbox(&mut state.options.banner, "Banner");
        });
    });

    action
}
