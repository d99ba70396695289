//! Model layer: application state
//!
//! The single source of truth for the UI. Mutated only by the update layer
//! on the event loop; the view layer reads it, nothing else touches it.

mod form;
mod users;

pub use form::UserForm;
pub use users::UsersState;

use user_console_core::{ApiError, User};

/// Which screen the console is on. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the user list.
    Listing,
    /// Filling in the new-user form.
    Adding,
    /// Waiting for a yes/no on a delete.
    ConfirmingDelete,
}

/// Application state.
pub struct App {
    /// Set by the quit transition; the main loop exits on the next pass.
    pub should_quit: bool,

    /// Current screen.
    pub mode: Mode,

    /// User records and selection.
    pub users: UsersState,

    /// New-user input form.
    pub form: UserForm,

    /// The record queued for deletion. Non-empty only while
    /// [`Mode::ConfirmingDelete`].
    pub pending_delete: Option<User>,

    /// Status line text.
    pub status: Option<String>,

    /// Last command failure, shown until the next success.
    pub error: Option<ApiError>,

    /// A command is in flight. While set, no second command may be
    /// scheduled — the busy gate.
    pub busy: bool,
}

impl App {
    /// Initial state: listing, busy, waiting for the implicit first load.
    pub fn new() -> Self {
        Self {
            should_quit: false,
            mode: Mode::Listing,
            users: UsersState::new(),
            form: UserForm::new(),
            pending_delete: None,
            status: Some("Loading users…".to_string()),
            error: None,
            busy: true,
        }
    }

    /// Set the status line.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Clear the status line.
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
