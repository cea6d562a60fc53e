use eframe::egui;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::dialogs::NameDialog;
use crate::session::{InputRouter, Session, SessionOptions};
use crate::tracker::{Selection, Surface};

// ─────────────────────────────────────────────────────────────────────────────
// Drawing surface backed by egui
// ─────────────────────────────────────────────────────────────────────────────

/// What the tracker last asked the canvas and preview to show.
///
/// Painting happens later in the frame from these values.
#[derive(Debug, Default)]
pub struct GuiSurface {
    pub outline: Option<Selection>,
    pub preview_size: (u32, u32),
    pub preview_offset: (i32, i32),
}

impl Surface for GuiSurface {
    fn clear(&mut self) {
        self.outline = None;
    }

    fn stroke_rect(&mut self, selection: &Selection) {
        self.outline = Some(*selection);
    }

    fn update_preview(&mut self, width: u32, height: u32, offset: (i32, i32)) {
        self.preview_size = (width, height);
        self.preview_offset = offset;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// State
// ─────────────────────────────────────────────────────────────────────────────

/// The loaded sprite sheet
pub struct Sheet {
    pub path: PathBuf,
    pub texture: egui::TextureHandle,
    pub width: u32,
    pub height: u32,
}

/// Survives restarts through eframe storage
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PersistedState {
    pub last_image_dir: Option<PathBuf>,
}

/// Top-level application state
pub struct AppState {
    pub sheet: Option<Sheet>,
    pub session: Option<Session>,
    pub router: InputRouter,
    pub surface: GuiSurface,
    pub options: SessionOptions,

    /// Image to open on the next frame
    pub requested_image: Option<PathBuf>,
    pub name_dialog: Option<NameDialog>,
    /// Last generated stylesheet
    pub output: String,
    pub status: Status,
    pub persisted: PersistedState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            sheet: None,
            session: None,
            router: InputRouter::new(),
            surface: GuiSurface::default(),
            options: SessionOptions::default(),
            requested_image: None,
            name_dialog: None,
            output: String::new(),
            status: Status::Idle,
            persisted: PersistedState::default(),
        }
    }
}

impl AppState {
    /// Swap in a new session, detaching the old one from the router first
    pub fn replace_session(&mut self, mut session: Session) {
        if let Some(old) = self.session.as_mut() {
            old.detach(&mut self.router);
        }
        session.attach(&mut self.router);
        self.session = Some(session);
        self.surface = GuiSurface::default();
        self.output.clear();
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.status = Status::Done {
            result: StatusResult::Success(message.into()),
            at: Instant::now(),
        };
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Status::Done {
            result: StatusResult::Error(message.into()),
            at: Instant::now(),
        };
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Status with timing support
// ─────────────────────────────────────────────────────────────────────────────

pub enum Status {
    Idle,
    Done { result: StatusResult, at: Instant },
}

pub enum StatusResult {
    Success(String),
    Error(String),
}

impl Status {
    /// Auto-clear old success messages, keep errors visible
    pub fn maybe_clear(&mut self, max_age: Duration) {
        if let Status::Done {
            result: StatusResult::Success(_),
            at,
        } = self
            && at.elapsed() > max_age
        {
            *self = Status::Idle;
        }
    }
}
