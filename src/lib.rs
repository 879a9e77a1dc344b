//! EliteShop Chat Server
//!
//! Demonstration chat relay for an e-commerce storefront: serves a static
//! landing page, exposes the product catalog over HTTP, and relays chat
//! messages between WebSocket clients with canned keyword-triggered replies.

#![forbid(unsafe_code)]

pub mod api;
pub mod catalog;
pub mod cli;
pub mod hub;
pub mod responder;
pub mod server;
pub mod websocket;
