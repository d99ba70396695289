//! Update layer: state transitions
//!
//! The only place that mutates [`App`]. Each message either mutates state,
//! returns a [`Command`] for the scheduler, or both. Returning the command
//! instead of spawning here keeps the whole state machine synchronous and
//! testable with synthetic messages.
//!
//! The busy gate lives here: while a command is in flight, messages that
//! would open a screen or schedule a second command are ignored. Navigation
//! and cancellation stay live so the operator is never trapped.

use user_console_core::{ApiError, CreateUserPayload};

use crate::command::Command;
use crate::message::Message;
use crate::model::{App, Mode};

/// Role assigned when the operator leaves the field blank.
const DEFAULT_ROLE: &str = "User";

/// Apply a message to the state, returning the command to schedule, if any.
pub fn update(app: &mut App, msg: Message) -> Option<Command> {
    match msg {
        Message::Quit => {
            app.should_quit = true;
            None
        }

        Message::Refresh => {
            if app.busy {
                return None;
            }
            app.busy = true;
            app.clear_status();
            Some(Command::LoadUsers)
        }

        Message::OpenAdd => {
            if app.busy {
                return None;
            }
            app.mode = Mode::Adding;
            app.error = None;
            app.form.reset();
            app.set_status("Creating a new user");
            None
        }

        Message::CancelAdd => {
            app.mode = Mode::Listing;
            app.error = None;
            app.set_status("Cancelled new user");
            None
        }

        Message::FocusNext => {
            app.form.focus_next();
            None
        }

        Message::FocusPrevious => {
            app.form.focus_previous();
            None
        }

        Message::Input(c) => {
            app.form.insert(c);
            app.error = None;
            None
        }

        Message::Backspace => {
            app.form.backspace();
            None
        }

        Message::Submit => submit_new_user(app),

        Message::RequestDelete => {
            if app.busy {
                return None;
            }
            let Some(user) = app.users.selected_user().cloned() else {
                return None;
            };
            app.set_status(format!("Delete {}? (y/n)", user.display_name()));
            app.pending_delete = Some(user);
            app.mode = Mode::ConfirmingDelete;
            None
        }

        Message::ConfirmDelete => {
            if app.busy {
                return None;
            }
            let id = app.pending_delete.as_ref()?.id.clone();
            app.busy = true;
            app.clear_status();
            Some(Command::DeleteUser(id))
        }

        Message::CancelDelete => {
            app.pending_delete = None;
            app.mode = Mode::Listing;
            app.set_status("Cancelled deletion");
            None
        }

        Message::SelectNext => {
            app.users.select_next();
            None
        }

        Message::SelectPrevious => {
            app.users.select_previous();
            None
        }

        Message::UsersLoaded(users) => {
            app.error = None;
            app.busy = false;
            let count = users.len();
            app.users.set_users(users);
            app.set_status(format!("Loaded {count} users"));
            None
        }

        Message::UserCreated(user) => {
            app.error = None;
            app.busy = false;
            app.mode = Mode::Listing;
            app.set_status(format!("Created user {}", user.display_name()));
            app.users.insert(user);
            app.form.reset();
            None
        }

        Message::UserDeleted(id) => {
            app.error = None;
            app.busy = false;
            app.mode = Mode::Listing;
            let label = app
                .pending_delete
                .take()
                .map_or_else(|| "user".to_string(), |u| u.display_name().to_string());
            app.users.remove(&id);
            app.set_status(format!("Deleted {label}"));
            None
        }

        Message::CommandFailed(err) => {
            if err.is_expected() {
                log::warn!("command failed: {err}");
            } else {
                log::error!("command failed: {err}");
            }
            app.error = Some(err);
            app.busy = false;
            None
        }

        Message::Noop => None,
    }
}

/// Validate the form and turn it into a create command.
///
/// Validation failures never leave the update layer — no network call is
/// scheduled, the error shows inline, and the form stays as typed.
fn submit_new_user(app: &mut App) -> Option<Command> {
    if app.busy {
        return None;
    }

    let name = app.form.name.trim();
    let email = app.form.email.trim();
    if name.is_empty() || email.is_empty() {
        app.error = Some(ApiError::Validation("name and email are required".into()));
        return None;
    }

    let role = app.form.role.trim();
    let payload = CreateUserPayload {
        name: name.to_string(),
        email: email.to_string(),
        role: if role.is_empty() {
            DEFAULT_ROLE.to_string()
        } else {
            role.to_string()
        },
        avatar_url: None,
    };

    app.busy = true;
    app.error = None;
    app.clear_status();
    Some(Command::CreateUser(payload))
}
