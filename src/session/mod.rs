mod listeners;
mod session;

pub use listeners::{EventKind, InputRouter, ListenerId};
pub use session::{HostEvent, Outcome, Session, SessionOptions, ToolState};
