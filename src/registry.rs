use anyhow::{Result, anyhow};
use colored::Colorize;

/// Short model names mapped to the runtime tags they resolve to.
/// Declaration order is the order shown to the user.
pub const AVAILABLE_MODELS: &[(&str, &str)] = &[
    ("gemma-3-270m-it-6bit", "hf.co/unsloth/gemma-3-270m-it-GGUF:Q6_K"),
    ("gemma-2b-it", "gemma:2b-instruct"),
    ("mistral-7b-instruct-v0.3-4bit", "mistral:7b-instruct-v0.3-q4_0"),
    ("llama-3-8b-instruct-4bit", "llama3:8b-instruct-q4_0"),
    ("phi-3-mini-4k-instruct-4bit", "phi3:3.8b-mini-4k-instruct-q4_0"),
];

pub const DEFAULT_MODEL: &str = "gemma-3-270m-it-6bit";

/// Look up the runtime identifier for a registry short name.
///
/// Unknown names report every available short name so the user can correct
/// the flag without a second round trip.
pub fn resolve(short_name: &str) -> Result<&'static str> {
    AVAILABLE_MODELS
        .iter()
        .find(|(name, _)| *name == short_name)
        .map(|(_, id)| *id)
        .ok_or_else(|| {
            anyhow!(
                "model '{}' not available. Available models: {}",
                short_name,
                short_names().join(", ")
            )
        })
}

pub fn short_names() -> Vec<&'static str> {
    AVAILABLE_MODELS.iter().map(|(name, _)| *name).collect()
}

/// Print every registry entry for `--list-models`.
pub fn print_models() {
    println!("Available models:");
    for (name, id) in AVAILABLE_MODELS {
        println!("  {}: {}", name.bold(), id);
    }
}
