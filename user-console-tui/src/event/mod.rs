//! Event layer: raw terminal input → messages
//!
//! Pure translation, no state mutation. Which message a key produces depends
//! on the current screen, read-only.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::message::Message;
use crate::model::{App, Mode};

/// Poll for the next terminal event.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into a message.
pub fn handle_event(event: Event, app: &App) -> Message {
    match event {
        Event::Key(key) => handle_key_event(key, app),
        // Resize redraws on the next pass of the loop.
        _ => Message::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> Message {
    // Only Press events: avoids double-firing on terminals that report
    // Release/Repeat.
    if key.kind != KeyEventKind::Press {
        return Message::Noop;
    }

    // Ctrl+C quits from anywhere.
    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
        return Message::Quit;
    }

    match app.mode {
        Mode::Listing => handle_listing_keys(key),
        Mode::Adding => handle_adding_keys(key, app),
        Mode::ConfirmingDelete => handle_confirm_keys(key),
    }
}

fn handle_listing_keys(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Message::Quit,
        KeyCode::Char('r') => Message::Refresh,
        KeyCode::Char('a') => Message::OpenAdd,
        KeyCode::Char('d') => Message::RequestDelete,
        KeyCode::Up | KeyCode::Char('k') => Message::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => Message::SelectNext,
        _ => Message::Noop,
    }
}

fn handle_adding_keys(key: KeyEvent, app: &App) -> Message {
    match key.code {
        KeyCode::Esc => Message::CancelAdd,
        KeyCode::Tab => Message::FocusNext,
        KeyCode::BackTab => Message::FocusPrevious,
        // Enter advances through the fields and submits from the last one.
        KeyCode::Enter => {
            if app.form.is_last_field() {
                Message::Submit
            } else {
                Message::FocusNext
            }
        }
        KeyCode::Backspace => Message::Backspace,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Message::Input(c)
        }
        _ => Message::Noop,
    }
}

fn handle_confirm_keys(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => Message::ConfirmDelete,
        KeyCode::Char('n') | KeyCode::Esc => Message::CancelDelete,
        _ => Message::Noop,
    }
}
