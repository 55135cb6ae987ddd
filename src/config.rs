use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::cli_args::Cli;
use crate::language::Language;
use crate::registry;

pub const DEFAULT_HOST: &str = "http://localhost:11434";

/// Final resolved configuration for commitgen.
#[derive(Debug, Clone)]
pub struct Config {
    pub model: String,
    pub language: Language,
    pub host: String,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (env vars `COMMITGEN_MODEL` / `COMMITGEN_HOST` are merged
    ///      into the flags by clap)
    ///   2. TOML `~/.config/commitgen.toml`
    ///   3. Hardcoded defaults
    pub fn from_sources(cli: &Cli) -> Self {
        let file_cfg = load_file_config().unwrap_or_default();

        let model = cli
            .model
            .clone()
            .or(file_cfg.model)
            .unwrap_or_else(|| registry::DEFAULT_MODEL.to_string());

        let language = cli.language.or(file_cfg.language).unwrap_or_default();

        let host = cli
            .host
            .clone()
            .or(file_cfg.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Config {
            model,
            language,
            host,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    /// Default model to use when not provided via CLI or env.
    pub model: Option<String>,
    pub language: Option<Language>,
    pub host: Option<String>,
}

/// Return `~/.config/commitgen.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("commitgen.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    toml::from_str::<FileConfig>(&data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["commitgen", "--diff", "+x"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn file_config_parses_all_fields() {
        let cfg: FileConfig = toml::from_str(
            "model = \"gemma-2b-it\"\nlanguage = \"zh\"\nhost = \"http://10.0.0.2:11434\"",
        )
        .unwrap();
        assert_eq!(cfg.model.as_deref(), Some("gemma-2b-it"));
        assert_eq!(cfg.language, Some(Language::Zh));
        assert_eq!(cfg.host.as_deref(), Some("http://10.0.0.2:11434"));
    }

    #[test]
    fn file_config_tolerates_missing_fields() {
        let cfg: FileConfig = toml::from_str("model = \"gemma-2b-it\"").unwrap();
        assert!(cfg.language.is_none());
        assert!(cfg.host.is_none());
    }

    #[test]
    fn cli_flags_override_defaults() {
        let cfg = Config::from_sources(&cli(&[
            "--model",
            "llama-3-8b-instruct-4bit",
            "--language",
            "zh",
            "--host",
            "http://10.0.0.2:11434",
        ]));
        assert_eq!(cfg.model, "llama-3-8b-instruct-4bit");
        assert_eq!(cfg.language, Language::Zh);
        assert_eq!(cfg.host, "http://10.0.0.2:11434");
    }
}
