//! Conversation session management.
//!
//! A `ChatSession` holds the conversation history (messages), the system
//! instruction and sampling settings, and the backend it talks to. The
//! history lives client-side and is re-sent with every turn.

mod chat;
mod manager;

pub use manager::{ChatSession, SessionSettings};
