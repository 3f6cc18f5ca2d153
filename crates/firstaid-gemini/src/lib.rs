//! Client for the hosted Gemini completion service.
//!
//! The rest of the workspace talks to the model only through
//! [`CompletionProvider::complete`]; [`GeminiClient`] is the production
//! implementation.

pub mod client;
pub mod error;
pub mod provider;
pub mod types;

pub use client::GeminiClient;
pub use error::CompletionError;
pub use provider::{CompletionProvider, CompletionRequest, ImagePayload};
