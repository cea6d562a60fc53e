use eframe::egui;
use log::{info, warn};
use std::path::Path;
use std::time::Duration;

use super::dialogs::NameDialog;
use super::state::{AppState, PersistedState, Sheet};
use super::{is_supported_image, panels};
use crate::background::BackgroundRef;
use crate::error::SpriterError;
use crate::output::write_css;
use crate::session::{HostEvent, Outcome, Session};

/// Main GUI application
pub struct SpriterApp {
    state: AppState,
}

impl SpriterApp {
    pub fn new(cc: &eframe::CreationContext<'_>, image: Option<std::path::PathBuf>) -> Self {
        let mut state = AppState::default();

        if let Some(storage) = cc.storage
            && let Some(persisted) = eframe::get_value::<PersistedState>(storage, eframe::APP_KEY)
        {
            state.persisted = persisted;
        }
        state.requested_image = image;

        Self { state }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if let Some(path) = i
                .raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.as_ref())
                .find(|p| is_supported_image(p))
            {
                self.state.requested_image = Some(path.clone());
            }
        });
    }

    /// Load a requested image and start a fresh session on it
    fn load_requested_image(&mut self, ctx: &egui::Context) {
        let Some(path) = self.state.requested_image.take() else {
            return;
        };

        match load_sheet(ctx, &path) {
            Ok(sheet) => {
                let url = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                let background = BackgroundRef::new(url, sheet.width, sheet.height);
                info!(
                    "Opened {} ({}x{})",
                    path.display(),
                    sheet.width,
                    sheet.height
                );

                self.state.persisted.last_image_dir = path.parent().map(Path::to_path_buf);
                self.state
                    .replace_session(Session::new(background, self.state.options));
                self.state.sheet = Some(sheet);
                self.state.set_success(format!("Opened {}", path.display()));
            }
            Err(err) => {
                warn!("{}", err);
                self.state.set_error(err.to_string());
            }
        }
    }

    fn open_image_dialog(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"]);
        if let Some(dir) = &self.state.persisted.last_image_dir {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            self.state.requested_image = Some(path);
        }
    }

    /// Route a button press through the session like any other host event
    fn dispatch(&mut self, event: HostEvent) {
        let state = &mut self.state;
        let Some(session) = state.session.as_mut() else {
            return;
        };

        match session.handle(&state.router, event, &mut state.surface) {
            Ok(Outcome::Committed(sprite)) => {
                state.set_success(format!(
                    "Added .{} ({}x{})",
                    sprite.name, sprite.width, sprite.height
                ));
            }
            Ok(Outcome::Stylesheet(css)) => {
                state.output = css;
                state.set_success("Stylesheet generated");
            }
            Ok(Outcome::None) => {}
            Err(err) => state.set_error(err.to_string()),
        }
    }

    fn save_css(&mut self) {
        let Some(session) = self.state.session.as_ref() else {
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSS", &["css"])
            .set_file_name("sprites.css")
            .save_file()
        else {
            return;
        };

        match write_css(
            session.registry(),
            session.background(),
            self.state.options.banner,
            &path,
        ) {
            Ok(()) => self.state.set_success(format!("Saved {}", path.display())),
            Err(err) => self.state.set_error(format!("{:#}", err)),
        }
    }

    fn show_name_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.state.name_dialog.as_mut() else {
            return;
        };

        if let Some(name) = dialog.show(ctx) {
            self.state.name_dialog = None;
            // A cancelled prompt still goes through validation and is reported
            self.dispatch(HostEvent::AddSprite(name));
        }
    }
}

/// Decode an image file into a texture
fn load_sheet(ctx: &egui::Context, path: &Path) -> Result<Sheet, SpriterError> {
    let image = image::ImageReader::open(path)
        .map_err(|e| SpriterError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SpriterError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    let (width, height) = image.dimensions();
    let color_image = egui::ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        image.as_raw(),
    );
    let texture = ctx.load_texture("sprite_sheet", color_image, egui::TextureOptions::NEAREST);

    Ok(Sheet {
        path: path.to_path_buf(),
        texture,
        width,
        height,
    })
}

impl eframe::App for SpriterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.load_requested_image(ctx);

        // Auto-clear old success messages
        self.state.status.maybe_clear(Duration::from_secs(5));

        let action = egui::TopBottomPanel::bottom("bottom_bar")
            .show(ctx, |ui| panels::bottom_bar(ui, &mut self.state))
            .inner;

        if action.open_requested {
            self.open_image_dialog();
        }
        if action.add_requested {
            self.state.name_dialog = Some(NameDialog::new());
        }
        if action.generate_requested {
            if let Some(session) = self.state.session.as_mut() {
                session.set_banner(self.state.options.banner);
            }
            self.dispatch(HostEvent::Generate);
        }
        if action.save_requested {
            self.save_css();
        }

        egui::TopBottomPanel::bottom("output_panel")
            .resizable(true)
            .default_height(180.0)
            .show(ctx, |ui| panels::output_panel(ui, &mut self.state));

        egui::SidePanel::right("sidebar")
            .default_width(260.0)
            .min_width(200.0)
            .show(ctx, |ui| panels::sidebar_panel(ui, &mut self.state));

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(sheet) = &self.state.sheet {
                ui.label(format!(
                    "{} ({}x{})",
                    sheet.path.display(),
                    sheet.width,
                    sheet.height
                ));
            }
            panels::canvas_panel(ui, &mut self.state);
        });

        self.show_name_dialog(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state.persisted);
    }
}

impl Drop for SpriterApp {
    fn drop(&mut self) {
        let state = &mut self.state;
        if let Some(session) = state.session.as_mut() {
            session.detach(&mut state.router);
        }
    }
}
