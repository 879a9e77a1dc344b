//! Connection hub: relays chat traffic between connected clients and the
//! keyword responder.
//!
//! The hub never talks to a socket directly. It writes to a [`Broadcaster`],
//! so the relay logic is testable with a recording fake, and the WebSocket
//! layer subscribes to the same bus to forward messages to its client.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::debug;

use crate::catalog::Catalog;
use crate::responder::KeywordResponder;

/// Fixed greeting broadcast for each new connection.
pub const WELCOME_TEXT: &str = "Welcome to EliteShop! How can I assist you today?";

/// Delay before the canned reply goes out, simulating assistant latency.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(500);

/// Broadcast target: send a line of text to every currently connected client.
pub trait Broadcaster: Send + Sync {
    /// Returns how many clients received the message. Zero receivers is not
    /// an error; the message is simply dropped.
    fn broadcast(&self, text: &str) -> usize;
}

/// Broadcast-based fan-out to all connected chat sessions.
///
/// Uses `tokio::broadcast` so every session receives every message. Slow
/// sessions lag (miss messages) rather than block the publisher.
#[derive(Debug, Clone)]
pub struct MessageBus {
    sender: broadcast::Sender<String>,
}

impl MessageBus {
    /// Capacity determines how many messages can be buffered before a slow
    /// session starts missing them. 256 is a reasonable default.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to the bus. Each session gets an independent copy of every
    /// message published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }

    /// Number of currently connected sessions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Broadcaster for MessageBus {
    fn broadcast(&self, text: &str) -> usize {
        // send() errors only when there are no receivers, which is fine
        self.sender.send(text.to_string()).unwrap_or(0)
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new(256)
    }
}

/// Mediates message flow between the transport, the responder and the
/// catalog.
pub struct ChatHub {
    broadcaster: Arc<dyn Broadcaster>,
    responder: KeywordResponder,
    catalog: Arc<Catalog>,
    reply_delay: Duration,
}

impl ChatHub {
    #[must_use]
    pub fn new(
        broadcaster: Arc<dyn Broadcaster>,
        catalog: Arc<Catalog>,
        reply_delay: Duration,
    ) -> Self {
        Self {
            broadcaster,
            responder: KeywordResponder::new(),
            catalog,
            reply_delay,
        }
    }

    /// Announce a new connection. The welcome goes to every connected
    /// client, pre-existing ones included, not just the new one.
    pub fn on_connect(&self) {
        self.broadcaster.broadcast(WELCOME_TEXT);
    }

    /// Relay one inbound message:
    ///
    /// 1. echo it to all clients with a `You:` prefix (every client sees
    ///    every user's raw message; the prefix does not identify the sender),
    /// 2. after the reply delay, broadcast the canned reply,
    /// 3. for product queries, additionally broadcast the catalog summary.
    ///
    /// The delay is a cooperative suspension: it parks only the calling
    /// session's task, so other connections keep being served. Sessions that
    /// disconnect while the delay is pending just stop counting as
    /// receivers; the broadcasts still go to whoever remains.
    pub async fn on_message(&self, text: &str) {
        debug!("relaying message: {}", text);

        self.broadcaster.broadcast(&format!("You: {text}"));

        let reply = self.responder.respond(text);

        tokio::time::sleep(self.reply_delay).await;

        self.broadcaster.broadcast(reply);

        let lower = text.to_lowercase();
        if lower.contains("products") || lower.contains("shop") {
            let summary = format!("Our featured products: {}", self.catalog.format_summary());
            self.broadcaster.broadcast(&summary);
        }
    }
}
