//! zero-tips
//!
//! Short coaching tips for a shot group, fetched from a text-generation
//! service. The calculator never waits on this: a tip is requested on its
//! own, and any failure turns into one of two fixed fallback strings.
//!
//! Pieces:
//!   - `TipProvider`: raw text generation that may fail.
//!   - `GeminiProvider`: HTTP provider for the Gemini `generateContent` API.
//!   - `TipService`: provider + timeout + fallback mapping. Never errors.
//!   - `spawn_tip`: fire-and-forget on the tokio runtime.

pub mod config;
pub mod gemini;
pub mod prompt;
pub mod provider;
pub mod service;

pub use config::TipConfig;
pub use gemini::GeminiProvider;
pub use prompt::{average_offset, build_prompt, TipRequest};
pub use provider::{TipError, TipProvider};
pub use service::{spawn_tip, TipService};

/// Returned when the provider answers with blank text.
pub const EMPTY_FALLBACK: &str =
    "Stay focused on the fundamentals and try another group.";

/// Returned on any transport, provider or timeout failure.
pub const FAILURE_FALLBACK: &str =
    "Stay calm, control your breathing and press the trigger smoothly.";
