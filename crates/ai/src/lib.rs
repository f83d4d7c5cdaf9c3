//! Chat-completion provider client.
//!
//! Exposes the [`CompletionProvider`](provider::CompletionProvider)
//! capability trait consumed by the API layer, plus the OpenAI-compatible
//! HTTP implementation used in production. Tests substitute their own
//! implementation underneath the trait.

pub mod openai;
pub mod provider;

pub use openai::{OpenAiClient, OpenAiConfig};
pub use provider::{CompletionError, CompletionProvider};
