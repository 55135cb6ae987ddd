use clap::Parser;

use crate::language::Language;

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "commitgen",
    version,
    about = "Generate Git-Flow commit messages from a diff with a local language model"
)]
pub struct Cli {
    /// Diff text to summarize
    #[arg(long, required_unless_present = "list_models")]
    pub diff: Option<String>,

    /// Model to use (a registry short name, see --list-models)
    #[arg(long, env = "COMMITGEN_MODEL")]
    pub model: Option<String>,

    /// Output language for the commit message
    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// Maximum number of tokens to generate
    #[arg(long, default_value_t = 512)]
    pub max_tokens: u32,

    /// Sampling temperature
    #[arg(long, default_value_t = 0.7)]
    pub temperature: f32,

    /// List available models and exit
    #[arg(long)]
    pub list_models: bool,

    /// Base URL of the local model runtime
    #[arg(long, env = "COMMITGEN_HOST")]
    pub host: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
