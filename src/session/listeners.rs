/// Kinds of host input a session can listen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    /// "Add sprite" button
    AddSprite,
    /// "Generate" button
    Generate,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::PointerDown,
        EventKind::PointerMove,
        EventKind::PointerUp,
        EventKind::AddSprite,
        EventKind::Generate,
    ];
}

/// Handle returned by [`InputRouter::add_listener`]. Removing a listener
/// requires the exact handle that registration returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Host-side registry of who listens to which input
#[derive(Debug, Default)]
pub struct InputRouter {
    next_id: u64,
    listeners: Vec<(EventKind, ListenerId)>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((kind, id));
        id
    }

    /// Remove the listener registered as `id` for `kind`. Returns false when
    /// no such registration exists.
    pub fn remove_listener(&mut self, kind: EventKind, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|&(k, i)| !(k == kind && i == id));
        self.listeners.len() != before
    }

    pub fn is_registered(&self, kind: EventKind, id: ListenerId) -> bool {
        self.listeners.contains(&(kind, id))
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
