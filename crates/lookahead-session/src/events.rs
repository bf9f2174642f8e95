//! Host notifications and key input consumed by the session.

/// X11 keysyms the session reacts to.
pub mod keysym {
    pub const BACKSPACE: u32 = 0xff08;
    pub const ESCAPE: u32 = 0xff1b;
}

/// Notifications raised by the host input context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextEvent {
    /// The context changed (commit, clear, edit).
    Update,
    /// A candidate was selected.
    Select(String),
    /// A candidate was deleted by the user.
    Delete(String),
    /// Composition was aborted or cancelled.
    Abort,
}

/// A key press, identified by keysym.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub keycode: u32,
}

impl KeyEvent {
    pub fn new(keycode: u32) -> Self {
        Self { keycode }
    }

    /// Backspace and Escape dismiss predictions.
    pub fn is_dismiss(self) -> bool {
        matches!(self.keycode, keysym::BACKSPACE | keysym::ESCAPE)
    }
}

/// Whether the session consumed a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessResult {
    /// Not handled; pass the key on.
    Noop,
    Accepted,
}
