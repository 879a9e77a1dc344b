//! Chat WebSocket session loop.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::hub::{ChatHub, MessageBus};

/// Handle one WebSocket connection.
///
/// The session multiplexes two sources: frames from the client (fed to the
/// hub) and bus deliveries (forwarded to the client). Subscribing happens
/// before `on_connect` so this client receives its own welcome broadcast.
///
/// Inbound messages are awaited inline, which keeps one connection's
/// messages in order. The hub's reply delay suspends only this task; bus
/// deliveries that arrive meanwhile are buffered by the subscription and
/// flushed afterwards.
pub async fn handle_socket(socket: WebSocket, hub: Arc<ChatHub>, bus: Arc<MessageBus>) {
    let session_id = Uuid::new_v4();
    info!("WebSocket chat connection established: {}", session_id);

    let mut outbound = bus.subscribe();
    hub.on_connect();

    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            frame = receiver.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        debug!("Received message: {}", text);
                        hub.on_message(&text).await;
                    }
                    Some(Ok(Message::Close(_))) => {
                        info!("WebSocket connection closed: {}", session_id);
                        break;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = sender.send(Message::Pong(data)).await;
                    }
                    Some(Err(e)) => {
                        error!("WebSocket error: {}", e);
                        break;
                    }
                    None => break,
                    _ => {}
                }
            }
            delivery = outbound.recv() => {
                match delivery {
                    Ok(text) => {
                        if sender.send(Message::Text(text)).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(missed)) => {
                        warn!("Session {} lagged, missed {} messages", session_id, missed);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    }

    info!("WebSocket chat connection ended: {}", session_id);
}
