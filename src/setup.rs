use anyhow::Result;
use log::debug;

use crate::cli_args::Cli;
use crate::config::Config;
use crate::llm::LlmClient;
use crate::llm::ollama::OllamaClient;
use crate::registry;

/// Resolve the configured model against the registry and build the client.
///
/// Resolution happens here, before any generation work, so an unknown model
/// name never reaches the runtime.
pub fn build_llm_client(cfg: &Config, cli: &Cli) -> Result<Box<dyn LlmClient>> {
    let model_id = registry::resolve(&cfg.model)?;

    debug!("Using model {} ({})", cfg.model, model_id);

    Ok(Box::new(OllamaClient::new(
        &cfg.host,
        model_id,
        cli.max_tokens,
        cli.temperature,
    )))
}
