//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives the create/take quiz loop.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive flow (main menu -> create quiz / take quiz).
    /// Returns when the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
