//! # Inkling Provider - Gemini
//!
//! Google Gemini binding of the [`AsyncTextService`] trait: discovers the
//! models available to the API key, picks one by name preference and asks it
//! to rewrite the text.
//!
//! [`AsyncTextService`]: inkling_protocols::AsyncTextService

mod client;
mod selection;
mod service;
mod types;

pub use client::GeminiClient;
pub use selection::{model_id, ModelSelector, SelectionRule, GENERATE_CONTENT};
pub use service::GeminiTextService;
pub use types::*;
