//! Command scheduler
//!
//! Each user-initiated action becomes one [`Command`], run on a spawned task
//! so the event loop never blocks on I/O. A command delivers exactly one
//! terminal [`Message`] back over the channel — success or failure, never
//! both, never more. The update layer's busy gate guarantees at most one
//! command is in flight, so the client lock is never contended.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;

use user_console_core::{ApiClient, CreateUserPayload, HttpTransport, Transport};

use crate::message::Message;

/// The client as shared by the event loop and the spawned tasks.
pub type SharedClient = Arc<Mutex<ApiClient<HttpTransport>>>;

/// An asynchronous unit of work.
#[derive(Debug, Clone)]
pub enum Command {
    LoadUsers,
    CreateUser(CreateUserPayload),
    DeleteUser(String),
}

/// Run a command in the background, delivering its terminal message.
pub fn dispatch<T: Transport + 'static>(
    command: Command,
    client: Arc<Mutex<ApiClient<T>>>,
    tx: UnboundedSender<Message>,
) {
    tokio::spawn(async move {
        let message = run(command, &client).await;
        // A closed receiver means the loop is already shutting down.
        let _ = tx.send(message);
    });
}

async fn run<T: Transport>(command: Command, client: &Mutex<ApiClient<T>>) -> Message {
    let mut client = client.lock().await;
    match command {
        Command::LoadUsers => match client.list_users().await {
            Ok(users) => Message::UsersLoaded(users),
            Err(e) => Message::CommandFailed(e),
        },
        Command::CreateUser(payload) => match client.create_user(&payload).await {
            Ok(user) => Message::UserCreated(user),
            Err(e) => Message::CommandFailed(e),
        },
        Command::DeleteUser(id) => match client.delete_user(&id).await {
            Ok(()) => Message::UserDeleted(id),
            Err(e) => Message::CommandFailed(e),
        },
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    use async_trait::async_trait;
    use reqwest::Method;
    use user_console_core::{ApiError, ApiResult, EndpointPair};

    struct FixedTransport {
        status: u16,
        body: &'static str,
    }

    #[async_trait]
    impl Transport for FixedTransport {
        async fn request(
            &self,
            _base: &str,
            _method: Method,
            _path: &str,
            _body: Option<&serde_json::Value>,
        ) -> ApiResult<(u16, String)> {
            Ok((self.status, self.body.to_string()))
        }
    }

    fn client(status: u16, body: &'static str) -> Arc<Mutex<ApiClient<FixedTransport>>> {
        let endpoints = EndpointPair::resolve("http://users.test").unwrap();
        Arc::new(Mutex::new(ApiClient::with_transport(
            endpoints,
            FixedTransport { status, body },
        )))
    }

    #[tokio::test]
    async fn load_delivers_exactly_one_terminal_message() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        dispatch(Command::LoadUsers, client(200, "[]"), tx);

        let message = rx.recv().await.unwrap();
        assert!(matches!(message, Message::UsersLoaded(users) if users.is_empty()));

        // Sender dropped after the single send; nothing else arrives.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn failure_delivers_exactly_one_terminal_message() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        dispatch(Command::DeleteUser("u1".into()), client(404, ""), tx);

        let message = rx.recv().await.unwrap();
        assert!(matches!(message, Message::CommandFailed(ApiError::NotFound)));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn delete_success_echoes_the_id() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        dispatch(Command::DeleteUser("u7".into()), client(204, ""), tx);

        let message = rx.recv().await.unwrap();
        assert!(matches!(message, Message::UserDeleted(id) if id == "u7"));
    }
}
