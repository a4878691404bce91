//! Google Gemini completion client.
//!
//! Implements `CompletionClient` against the Generative Language API
//! `generateContent` method.

mod api;
mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::GeminiClient;
pub use config::{GeminiConfig, DEFAULT_MODEL};
