//! Capability interface for chat-completion providers.

use async_trait::async_trait;

/// Errors from a completion provider.
///
/// The request boundary collapses every variant into a single internal
/// error; the distinction exists for server-side logging only.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Completion request failed: {0}")]
    Request(String),

    /// The provider returned a non-2xx status code (quota, auth, etc.).
    #[error("Completion provider error ({status}): {body}")]
    Provider {
        /// HTTP status code.
        status: u16,
        /// Raw response body for server-side debugging.
        body: String,
    },

    /// The provider response could not be parsed or contained no reply.
    #[error("Malformed completion response: {0}")]
    Malformed(String),
}

/// A single-turn chat-completion capability.
///
/// One call sends a system instruction plus the user's latest message and
/// returns the first generated reply's text. Implementations make exactly
/// one attempt per call: no retry, no backoff, no streaming.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        system_instruction: &str,
        user_message: &str,
    ) -> Result<String, CompletionError>;
}
