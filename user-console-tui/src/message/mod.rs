//! Message layer: the bridge between events and updates
//!
//! Raw terminal events and finished commands are both translated into
//! [`Message`] values; the update layer consumes them exhaustively. This is
//! the only vocabulary state transitions speak.

use user_console_core::{ApiError, User};

/// Everything that can happen to the application.
///
/// The first group is translated user intent; the second group is the
/// terminal events commands deliver — exactly one per scheduled command.
#[derive(Debug)]
pub enum Message {
    // === user intent ===
    Quit,
    /// Reload the user list.
    Refresh,
    /// Open the new-user form.
    OpenAdd,
    /// Abandon the new-user form.
    CancelAdd,
    /// Move form focus down.
    FocusNext,
    /// Move form focus up.
    FocusPrevious,
    /// Type into the focused form field.
    Input(char),
    /// Delete from the focused form field.
    Backspace,
    /// Submit the new-user form.
    Submit,
    /// Ask to delete the selected user.
    RequestDelete,
    /// Confirm the pending deletion.
    ConfirmDelete,
    /// Abandon the pending deletion.
    CancelDelete,
    SelectNext,
    SelectPrevious,

    // === terminal events from the command scheduler ===
    UsersLoaded(Vec<User>),
    UserCreated(User),
    UserDeleted(String),
    CommandFailed(ApiError),

    /// Nothing to do. Stands in for `Option::None`.
    Noop,
}
