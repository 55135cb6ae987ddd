pub mod ollama;
pub mod prompt_builder;
mod prompts;
mod stream;

use anyhow::Result;

use crate::language::Language;

/// Trait for talking to the local model runtime.
pub trait LlmClient: Send + Sync {
    /// Generate a Git-Flow commit message for the given diff.
    ///
    /// Implementations load the model first, then run a streaming generation
    /// pass; the returned string is the accumulated output, trimmed.
    fn generate_commit_message(&self, diff: &str, language: Language) -> Result<String>;
}
