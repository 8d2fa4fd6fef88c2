//! Inference collaborator client.
//!
//! One synchronous request per solve: a fixed instruction string plus one
//! base64-encoded PNG, submitted to the Gemini `generateContent` endpoint;
//! the reply is free-form text. No retry, no streaming, no function calling.

pub mod client;
pub mod config;
pub mod envelope;

pub use client::{GeminiClient, INSTRUCTION};
pub use config::{ConfigError, InferenceSettings};
