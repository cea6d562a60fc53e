use eframe::egui;
use std::time::Instant;

use crate::gui::state::{AppState, Status, StatusResult};
use crate::session::HostEvent;
use crate::tracker::{Point, PointerTarget};

const OUTLINE_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);

/// Drawing surface: the sheet at natural size with the selection outline
pub fn canvas_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(sheet) = state.sheet.as_ref() else {
        show_empty_state(ui);
        return;
    };

    let size = egui::vec2(sheet.width as f32, sheet.height as f32);
    let texture_id = sheet.texture.id();

    egui::ScrollArea::both()
        .drag_to_scroll(false)
        .show(ui, |ui| {
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());
            let painter = ui.painter_at(rect);

            painter.image(
                texture_id,
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            if let Some(session) = state.session.as_mut() {
                // The surface can scroll, so its page position is taken every frame
                session.set_origin(to_point(rect.min));

                if state.name_dialog.is_none() {
                    for event in pointer_events(ui, response.hovered()) {
                        if let Err(e) = session.handle(&state.router, event, &mut state.surface) {
                            state.status = Status::Done {
                                result: StatusResult::Error(e.to_string()),
                                at: Instant::now(),
                            };
                        }
                    }
                }

                session.frame(&mut state.surface);
            }

            if let Some(outline) = state.surface.outline {
                let min = rect.min + egui::vec2(outline.start.x as f32, outline.start.y as f32);
                let outline_rect = egui::Rect::from_min_size(
                    min,
                    egui::vec2(outline.width as f32, outline.height as f32),
                );
                painter.rect_stroke(outline_rect, 0.0, egui::Stroke::new(1.0, OUTLINE_COLOR));
            }
        });
}

/// Translate this frame's raw pointer input into host events.
///
/// Presses are reported wherever they land, like document-level listeners;
/// the tracker decides which ones count.
fn pointer_events(ui: &egui::Ui, over_surface: bool) -> Vec<HostEvent> {
    let (pressed, moving, released, pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.is_moving(),
            i.pointer.primary_released(),
            i.pointer.latest_pos(),
        )
    });

    let mut events = Vec::new();
    let Some(pos) = pos else {
        return events;
    };
    let page = to_point(pos);

    if pressed {
        let target = if over_surface {
            PointerTarget::Surface
        } else {
            PointerTarget::Elsewhere
        };
        events.push(HostEvent::PointerDown { page, target });
    }
    if moving {
        events.push(HostEvent::PointerMove { page });
    }
    if released {
        events.push(HostEvent::PointerMove { page });
        events.push(HostEvent::PointerUp);
    }

    events
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "screen positions fit comfortably in i32"
)]
fn to_point(pos: egui::Pos2) -> Point {
    Point::new(pos.x.round() as i32, pos.y.round() as i32)
}

fn show_empty_state(ui: &mut egui::Ui) {
    let available = ui.available_size();
    let rect = ui.allocate_space(available).1;

    ui.painter()
        .rect_filled(rect, 4.0, egui::Color32::from_gray(30));

    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "No sprite sheet loaded\n\nClick 'Open Image' or drop a file here",
        egui::FontId::default(),
        egui::Color32::from_gray(100),
    );
}
