//! Google Gemini API client.
//!
//! Implements the `ChatBackend` trait for Gemini models via the
//! Generative Language API's streaming endpoint.

mod api;
mod client;
mod config;

pub use api::GeminiConnector;
pub use client::GeminiClient;
pub use config::GeminiConfig;
