//! Mock provider implementation for testing.

use super::{ChatMessage, CompletionProvider, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock completion provider that returns a canned reply (or fails) and
/// records every message list it receives.
pub struct MockCompletionProvider {
    reply: Option<String>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockCompletionProvider {
    /// A provider that answers every call with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A provider that fails every call.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Message lists received so far, in call order.
    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _max_tokens: u32,
    ) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(messages.to_vec());

        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(ProviderError::ApiError(
                "Mock provider configured to fail".to_string(),
            )),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.reply.is_some() {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock provider configured to fail".to_string(),
            ))
        }
    }
}
