//! user-console
//!
//! Terminal front-end for the users service, in the Elm Architecture shape:
//! - **Model**: application state (`model/`)
//! - **Message**: event vocabulary (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input translation (`event/`)
//! - **Command**: background work scheduling (`command.rs`)
//!
//! The service base address comes from `USERS_API_URL` (or the legacy
//! `USERS_API_BASE_URL`), defaulting to the local address. A malformed
//! address is the only fatal startup error.

mod app;
mod command;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;

use user_console_core::{config, ApiClient};
use util::{init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Resolve endpoints before touching the terminal.
    let client = ApiClient::new(&config::base_url_from_env())?;
    let client = Arc::new(Mutex::new(client));

    // 2. Initialize the terminal.
    let mut terminal = init_terminal()?;

    // 3. Run the main loop.
    let mut app = model::App::new();
    let result = app::run(&mut terminal, &mut app, client).await;

    // 4. Restore the terminal whether the loop succeeded or not.
    restore_terminal(&mut terminal)?;

    result
}
