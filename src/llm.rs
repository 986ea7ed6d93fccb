use serde::{Deserialize, Serialize};
use crate::config::Config;
use crate::error::CompletionError;

/// Anything that turns a prompt into generated text.
pub trait Completion {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    response: String,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    error: String,
}

/// Blocking client for a local Ollama server.
pub struct OllamaClient {
    client: reqwest::blocking::Client,
    model: String,
    base_url: String,
}

impl OllamaClient {
    pub fn new(config: &Config) -> Result<Self, CompletionError> {
        // reqwest's blocking client defaults to 30s; only time out when asked to.
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        })
    }
}

impl Completion for OllamaClient {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let url = format!("{}/api/generate", self.base_url);
        log::debug!("POST {} (model {}, {} prompt chars)", url, self.model, prompt.len());

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: false,
            })
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(err) => err.error,
                Err(_) => body.trim().to_string(),
            };
            return Err(CompletionError::Status { status, message });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        log::debug!("Completion returned {} chars", parsed.response.len());
        Ok(parsed.response)
    }
}
