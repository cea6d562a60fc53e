use eframe::egui;

/// State for the "name your sprite" prompt
#[derive(Default)]
pub struct NameDialog {
    pub name: String,
    focus_requested: bool,
}

impl NameDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Some(Some(name))` when confirmed, `Some(None)` when
    /// cancelled, `None` while still open.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<Option<String>> {
        let mut result = None;

        egui::Window::new("Add Sprite")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Type the name of your new sprite:");
                ui.add_space(8.0);

                let edit = ui.add(
                    egui::TextEdit::singleline(&mut self.name)
                        .hint_text("icon")
                        .desired_width(220.0),
                );
                if !self.focus_requested {
                    edit.request_focus();
                    self.focus_requested = true;
                }
                let submitted =
                    edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() || submitted {
                        result = Some(Some(self.name.clone()));
                    }
                    if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape))
                    {
                        result = Some(None);
                    }
                });
            });

        result
    }
}
