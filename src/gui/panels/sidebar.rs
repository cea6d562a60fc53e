use eframe::egui;

use crate::gui::state::AppState;
use crate::session::ToolState;

/// Preview of the current selection plus the list of committed sprites
pub fn sidebar_panel(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Preview");
    ui.add_space(4.0);

    let (w, h) = state.surface.preview_size;
    let (x, y) = state.surface.preview_offset;
    ui.label(format!("{}x{} px", w, h));
    ui.label(format!("background-position: {}px {}px", x, y));

    ui.add_space(4.0);

    let pending = state
        .session
        .as_ref()
        .and_then(|s| s.tracker().pending().copied());

    match (state.sheet.as_ref(), pending) {
        (Some(sheet), Some(pending)) if w > 0 && h > 0 => {
            let sel = pending.selection;
            let sheet_w = sheet.width as f32;
            let sheet_h = sheet.height as f32;
            let uv = egui::Rect::from_min_size(
                egui::pos2(sel.start.x as f32 / sheet_w, sel.start.y as f32 / sheet_h),
                egui::vec2(sel.width as f32 / sheet_w, sel.height as f32 / sheet_h),
            );

            ui.add(
                egui::Image::new((sheet.texture.id(), egui::vec2(w as f32, h as f32))).uv(uv),
            );
        }
        _ => {
            ui.label(
                egui::RichText::new("Drag over the sheet to select a region")
                    .color(egui::Color32::from_gray(120)),
            );
        }
    }

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(4.0);

    let Some(session) = state.session.as_ref() else {
        return;
    };

    ui.heading(format!("Sprites ({})", session.registry().len()));
    ui.add_space(4.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        for sprite in session.registry() {
            ui.horizontal(|ui| {
                ui.monospace(format!(".{}", sprite.name));
                ui.label(format!(
                    "{}x{} @ {}, {}",
                    sprite.width, sprite.height, sprite.offset_x, sprite.offset_y
                ));
            });
        }

        if session.registry().is_empty() {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                let hint = match session.state() {
                    ToolState::Pending => "Click 'Add Sprite' to name the selection",
                    _ => "No sprites yet",
                };
                ui.label(hint);
            });
        }
    });
}
