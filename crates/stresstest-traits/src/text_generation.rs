//! Text generation traits.

use async_trait::async_trait;

use crate::error::TraitError;

/// Trait for hosted text generation models.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier for logs.
    fn model(&self) -> &str;

    /// Send a prompt and return the raw response text.
    async fn generate(&self, prompt: &str) -> Result<String, TraitError>;
}
