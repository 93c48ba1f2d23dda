//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;

/// Text-generation gateway. One prompt in, the model's raw completion out.
///
/// The caller owns prompt construction and output parsing; implementations
/// only move text across the wire (or fake it, for the mock adapter).
#[async_trait::async_trait]
pub trait AiPort: Send + Sync {
    /// Send `prompt` to the model and return its text completion verbatim.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}
