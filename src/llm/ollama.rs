use anyhow::{Result, anyhow};
use indicatif::ProgressBar;
use musli::json;
use musli::{Decode, Encode};
use reqwest::blocking::Client;
use std::io::BufReader;
use std::time::Duration;

use crate::language::Language;

use super::stream::read_stream_to_string;
use super::{LlmClient, prompt_builder};

#[derive(Debug, Encode)]
struct GenerateOptions {
    num_predict: u32,
    temperature: f32,
}

#[derive(Debug, Encode)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

/// A generate call without a prompt asks the runtime to load the model
/// into memory and return once it is resident.
#[derive(Debug, Encode)]
struct LoadRequest {
    model: String,
    stream: bool,
}

#[derive(Debug, Decode)]
struct GenerateStreamChunk {
    response: Option<String>,
    done: Option<bool>,
}

/// Synchronous client for a local Ollama-compatible runtime, using
/// /api/generate for both the load and the generation phase.
pub struct OllamaClient {
    http: Client,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OllamaClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        let http = Client::builder()
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            max_tokens,
            temperature,
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    /// Load the model into runtime memory, with a spinner on stderr.
    fn load_model(&self) -> Result<()> {
        let req_body = LoadRequest {
            model: self.model.clone(),
            stream: false,
        };

        let body_str = json::to_string(&req_body)
            .map_err(|e| anyhow!("Failed to encode load request: {e}"))?;

        let url = self.generate_url();

        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Loading model: {}", self.model));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body_str)
            .send()
            .map_err(|e| {
                anyhow!("Error calling the model runtime at {url}: {e}. Is Ollama running?")
            })
            .and_then(|resp| {
                resp.error_for_status()
                    .map_err(|e| anyhow!("Model runtime HTTP error from {url}: {e}"))
            });

        spinner.finish_and_clear();
        let resp = result?;

        // Drain the body; the load call carries no text we need.
        let _ = resp.text();
        log::info!("Model {} loaded", self.model);
        Ok(())
    }

    /// Streaming generation pass over /api/generate.
    fn generate(&self, prompt: &str) -> Result<String> {
        let req_body = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_owned(),
            stream: true,
            options: GenerateOptions {
                num_predict: self.max_tokens,
                temperature: self.temperature,
            },
        };

        let body_str = json::to_string(&req_body)
            .map_err(|e| anyhow!("Failed to encode generate request: {e}"))?;

        log::trace!("Runtime request body: {body_str}");

        let url = self.generate_url();

        eprintln!("Generating commit message...");

        let resp = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body_str)
            .send()
            .map_err(|e| anyhow!("Error calling the model runtime at {url}: {e}"))?
            .error_for_status()
            .map_err(|e| anyhow!("Model runtime HTTP error from {url}: {e}"))?;

        let reader = BufReader::new(resp);
        let out = read_stream_to_string(reader, parse_stream_line)?;

        Ok(out.trim().to_string())
    }
}

fn parse_stream_line(line: &str) -> Result<Option<String>> {
    let chunk: GenerateStreamChunk =
        json::from_str(line).map_err(|e| anyhow!("Failed to decode runtime stream JSON: {e}"))?;

    if chunk.done.unwrap_or(false) {
        return Ok(None);
    }

    Ok(chunk.response.filter(|text| !text.is_empty()))
}

impl LlmClient for OllamaClient {
    fn generate_commit_message(&self, diff: &str, language: Language) -> Result<String> {
        self.load_model()?;

        let prompt = prompt_builder::build_commit_prompt(diff, language);
        log::debug!("Commit-message prompt:\n{}", truncate(&prompt, 3000));

        self.generate(&prompt)
    }
}

/// Truncate long strings for debug logging, never splitting a character.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }

    format!("{}...\n[truncated {} bytes]", &s[..end], s.len() - end)
}
