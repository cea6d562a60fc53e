use anyhow::Result;
use log::{debug, info};

use super::{EventKind, InputRouter, ListenerId};
use crate::background::BackgroundRef;
use crate::cli::{DuplicatePolicy, SpriteSpec};
use crate::error::SpriterError;
use crate::output::{export_json, export_stylesheet};
use crate::registry::{Sprite, SpriteRegistry, validate_name};
use crate::tracker::{Point, PointerTarget, PointerTracker, Surface};

/// Behaviour switches for a [`Session`]
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Prepend a comment banner to generated CSS
    pub banner: bool,
    /// Redraw on every pointer move instead of only on release
    pub live_preview: bool,
    /// What committing an existing name does
    pub duplicates: DuplicatePolicy,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            banner: false,
            live_preview: true,
            duplicates: DuplicatePolicy::Overwrite,
        }
    }
}

/// Input delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Press at a page position
    PointerDown { page: Point, target: PointerTarget },
    /// Pointer moved to a page position
    PointerMove { page: Point },
    PointerUp,
    /// "Add sprite" with whatever the name prompt returned (`None` if cancelled)
    AddSprite(Option<String>),
    Generate,
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::PointerDown { .. } => EventKind::PointerDown,
            HostEvent::PointerMove { .. } => EventKind::PointerMove,
            HostEvent::PointerUp => EventKind::PointerUp,
            HostEvent::AddSprite(_) => EventKind::AddSprite,
            HostEvent::Generate => EventKind::Generate,
        }
    }
}

/// What handling an event produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    None,
    Committed(Sprite),
    Stylesheet(String),
}

/// Coarse interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolState {
    /// Nothing selected
    Idle,
    /// A drag is in progress
    Dragging,
    /// A rectangle is drawn and waiting for a name
    Pending,
}

/// One running instance of the tool: tracker, registry and sheet together.
pub struct Session {
    background: BackgroundRef,
    tracker: PointerTracker,
    registry: SpriteRegistry,
    banner: bool,
    /// Page position of the surface's top-left corner
    origin: Point,
    listeners: Vec<(EventKind, ListenerId)>,
}

impl Session {
    pub fn new(background: BackgroundRef, options: SessionOptions) -> Self {
        Self {
            background,
            tracker: PointerTracker::new(options.live_preview),
            registry: SpriteRegistry::new(options.duplicates),
            banner: options.banner,
            origin: Point::default(),
            listeners: Vec::new(),
        }
    }

    pub fn background(&self) -> &BackgroundRef {
        &self.background
    }

    pub fn registry(&self) -> &SpriteRegistry {
        &self.registry
    }

    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    pub fn state(&self) -> ToolState {
        if self.tracker.is_tracking() {
            ToolState::Dragging
        } else if self.tracker.pending().is_some() {
            ToolState::Pending
        } else {
            ToolState::Idle
        }
    }

    pub fn set_banner(&mut self, banner: bool) {
        self.banner = banner;
    }

    /// Update where the surface sits on the page. Hosts whose layout can
    /// move the surface call this before delivering pointer events.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Listener lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Register for every [`EventKind`] on `router`. Does nothing if already
    /// attached.
    pub fn attach(&mut self, router: &mut InputRouter) {
        if !self.listeners.is_empty() {
            return;
        }

        self.listeners = EventKind::ALL
            .iter()
            .map(|&kind| (kind, router.add_listener(kind)))
            .collect();
        debug!("Attached {} listeners", self.listeners.len());
    }

    /// Remove exactly the listeners [`Session::attach`] registered.
    pub fn detach(&mut self, router: &mut InputRouter) {
        for (kind, id) in self.listeners.drain(..) {
            if !router.remove_listener(kind, id) {
                debug!("Listener for {:?} was already removed", kind);
            }
        }
    }

    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    fn is_listening(&self, router: &InputRouter, kind: EventKind) -> bool {
        self.listeners
            .iter()
            .any(|&(k, id)| k == kind && router.is_registered(k, id))
    }

    /// Dispatch one host event. Events this session is not listening for on
    /// `router` are dropped.
    pub fn handle(
        &mut self,
        router: &InputRouter,
        event: HostEvent,
        surface: &mut dyn Surface,
    ) -> Result<Outcome, SpriterError> {
        if !self.is_listening(router, event.kind()) {
            return Ok(Outcome::None);
        }

        match event {
            HostEvent::PointerDown { page, target } => {
                self.tracker
                    .begin_tracking(page.relative_to(self.origin), target);
            }
            HostEvent::PointerMove { page } => {
                self.tracker.update_tracking(page.relative_to(self.origin));
            }
            HostEvent::PointerUp => self.tracker.end_tracking(),
            HostEvent::AddSprite(name) => {
                let sprite = self.commit_current_selection(name.as_deref(), surface)?;
                return Ok(Outcome::Committed(sprite));
            }
            HostEvent::Generate => return Ok(Outcome::Stylesheet(self.export_stylesheet())),
        }

        Ok(Outcome::None)
    }

    /// Animation tick
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        self.tracker.frame(surface, &self.background);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Registry operations
    // ─────────────────────────────────────────────────────────────────────

    /// Store the pending selection under `name` and clear the drawing.
    ///
    /// On any error the registry and the pending selection are untouched.
    pub fn commit_current_selection(
        &mut self,
        name: Option<&str>,
        surface: &mut dyn Surface,
    ) -> Result<Sprite, SpriterError> {
        let name = validate_name(name)?;

        let pending = self.tracker.pending().ok_or(SpriterError::NoSelection)?;
        let selection = pending.selection;
        if selection.is_empty() {
            return Err(SpriterError::EmptySelection {
                width: selection.width,
                height: selection.height,
            });
        }

        let sprite = self
            .registry
            .insert(Sprite {
                name,
                width: selection.width,
                height: selection.height,
                offset_x: pending.offset.0,
                offset_y: pending.offset.1,
            })?
            .clone();

        self.tracker.clear(surface);
        info!(
            "Committed '{}' at ({}, {})",
            sprite.name, selection.start.x, selection.start.y
        );

        Ok(sprite)
    }

    /// Replay `spec` as a full gesture (press, move, release, tick) and add
    /// it under its name. Coordinates are taken as surface-local.
    ///
    /// The region must lie entirely on the sheet, otherwise
    /// [`SpriterError::InvalidSpriteSpec`] is returned and nothing changes.
    pub fn replay(
        &mut self,
        router: &InputRouter,
        spec: &SpriteSpec,
        surface: &mut dyn Surface,
    ) -> Result<Sprite, SpriterError> {
        let invalid = || SpriterError::InvalidSpriteSpec(spec.to_string());

        let local = Point::new(spec.x, spec.y);
        if !self.background.contains(local, spec.width, spec.height) {
            debug!(
                "Region {} is outside the {}x{} sheet",
                spec, self.background.width, self.background.height
            );
            return Err(invalid());
        }

        let start = Point::new(
            local.x.checked_add(self.origin.x).ok_or_else(invalid)?,
            local.y.checked_add(self.origin.y).ok_or_else(invalid)?,
        );
        let end = Point::new(
            start.x.checked_add_unsigned(spec.width).ok_or_else(invalid)?,
            start.y.checked_add_unsigned(spec.height).ok_or_else(invalid)?,
        );

        let gesture = [
            HostEvent::PointerDown {
                page: start,
                target: PointerTarget::Surface,
            },
            HostEvent::PointerMove { page: end },
            HostEvent::PointerUp,
        ];
        for event in gesture {
            self.handle(router, event, surface)?;
        }
        self.frame(surface);

        match self.handle(router, HostEvent::AddSprite(Some(spec.name.clone())), surface)? {
            Outcome::Committed(sprite) => Ok(sprite),
            _ => Err(SpriterError::NoSelection),
        }
    }

    pub fn export_stylesheet(&self) -> String {
        export_stylesheet(&self.registry, &self.background, self.banner)
    }

    pub fn export_json(&self) -> Result<String> {
        export_json(&self.registry, &self.background)
    }
}
