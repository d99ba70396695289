//! Application main loop
//!
//! One pass of the loop: render, check quit, poll terminal input (100 ms),
//! translate and apply it, then drain finished commands from the scheduler
//! channel through the same update path. Every state mutation happens here,
//! on this single task — events are applied strictly in arrival order, so
//! the model needs no locking.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::command::{self, Command, SharedClient};
use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the application until quit.
pub async fn run(terminal: &mut Term, app: &mut App, client: SharedClient) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    // The implicit first load: the app starts busy, listing, waiting on this.
    command::dispatch(Command::LoadUsers, client.clone(), tx.clone());

    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            if let Some(cmd) = update::update(app, msg) {
                command::dispatch(cmd, client.clone(), tx.clone());
            }
        }

        // Terminal events from finished commands.
        while let Ok(msg) = rx.try_recv() {
            if let Some(cmd) = update::update(app, msg) {
                command::dispatch(cmd, client.clone(), tx.clone());
            }
        }
    }

    Ok(())
}
