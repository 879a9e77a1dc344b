//! WebSocket transport for the chat relay.
//!
//! Provides the realtime endpoint:
//! - `/ws/chat` - plain-text chat relay

pub mod session;

use axum::{
    extract::ws::WebSocketUpgrade, response::IntoResponse, routing::get, Extension, Router,
};
use std::sync::Arc;

use crate::hub::{ChatHub, MessageBus};

/// WebSocket upgrade handler
pub async fn chat_handler(
    ws: WebSocketUpgrade,
    Extension(hub): Extension<Arc<ChatHub>>,
    Extension(bus): Extension<Arc<MessageBus>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| session::handle_socket(socket, hub, bus))
}

/// Create the WebSocket router
pub fn websocket_router() -> Router {
    Router::new().route("/ws/chat", get(chat_handler))
}
