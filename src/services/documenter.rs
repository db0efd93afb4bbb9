//! Documentation generation on top of a completion provider.

use crate::services::providers::{ChatMessage, CompletionProvider, ProviderError};
use std::sync::Arc;

/// System instructions sent with every generation request.
const SYSTEM_PROMPT: &str = "You are an expert code documentation generator. \
For the provided code, generate comprehensive documentation that includes:\n\
1. Overall project/file description\n\
2. Detailed function/method summaries\n\
3. Class structure and inheritance\n\
4. Usage examples\n\
5. Potential edge cases or considerations\n\n\
Format the output as clean, readable markdown.";

/// Assembles the fixed two-message prompt and runs one completion call.
pub struct DocGenerator {
    provider: Arc<dyn CompletionProvider>,
    max_output_tokens: u32,
}

impl DocGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>, max_output_tokens: u32) -> Self {
        Self {
            provider,
            max_output_tokens,
        }
    }

    /// Generate markdown documentation for one source file's text.
    pub async fn generate(&self, file_text: &str) -> Result<String, ProviderError> {
        let messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(format!(
                "Analyze and document the following code:\n\n{}",
                file_text
            )),
        ];

        self.provider
            .complete(&messages, self.max_output_tokens)
            .await
    }
}
