//! Canned text generators.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use stresstest_traits::{TextGenerator, TraitError};

/// Replays responses in order, then fails once exhausted.
///
/// Records every prompt it receives.
#[derive(Default)]
pub struct ScriptedTextGenerator {
    responses: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedTextGenerator {
    /// Create a generator with no responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn respond(self, text: impl Into<String>) -> Self {
        self.responses.lock().push_back(Ok(text.into()));
        self
    }

    /// Queue a failed call.
    pub fn fail(self, reason: impl Into<String>) -> Self {
        self.responses.lock().push_back(Err(reason.into()));
        self
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedTextGenerator {
    fn model(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, prompt: &str) -> Result<String, TraitError> {
        self.prompts.lock().push(prompt.to_string());

        match self.responses.lock().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(reason)) => Err(TraitError::ConnectionFailed(reason)),
            None => Err(TraitError::SourceNotAvailable("script exhausted".into())),
        }
    }
}

/// Generator that always fails.
pub struct FailingTextGenerator;

#[async_trait]
impl TextGenerator for FailingTextGenerator {
    fn model(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, TraitError> {
        Err(TraitError::ConnectionFailed("generator unavailable".into()))
    }
}
