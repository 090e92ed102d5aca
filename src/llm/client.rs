use crate::config::Config;
use crate::llm::interpreter::{self, ModificationResult};
use crate::llm::prompt::PromptBuilder;
use crate::llm::ModificationRequest;
use anyhow::{anyhow, Context, Result};
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Generation settings for the connectivity probe: a throwaway reply, so keep
/// it cheap and deterministic.
const PROBE_TEMPERATURE: f32 = 0.1;
const PROBE_MAX_TOKENS: u32 = 10;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no API key configured; set GEMINI_API_KEY or run `component-assist config --api-key <KEY>`")]
    MissingApiKey,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
    #[serde(rename = "safetySettings")]
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: String,
    threshold: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Reachability/authentication check outcome. Never carries a panic or an
/// error across the probe boundary; failures land in `error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionProbe {
    pub success: bool,
    pub error: Option<String>,
}

pub struct GeminiClient {
    client: Client,
    config: Config,
}

impl GeminiClient {
    /// Fails before any I/O when no API key is configured.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        if config.llm.api_key.trim().is_empty() {
            return Err(ClientError::MissingApiKey);
        }

        Ok(Self {
            client: Client::new(),
            config: config.clone(),
        })
    }

    /// Run one full modification exchange: build the prompt, call the API,
    /// interpret the reply. Transport failures propagate; interpretation
    /// failures are folded into the returned result so the caller always has
    /// something to show the user.
    pub async fn modify_component(&self, request: &ModificationRequest) -> Result<ModificationResult> {
        let prompt = PromptBuilder::build_modification_prompt(
            &request.component_title,
            &request.component_source,
            &request.instruction,
        );

        let raw = self
            .generate(
                &prompt,
                self.config.llm.temperature,
                self.config.llm.max_output_tokens,
            )
            .await?;

        Ok(interpreter::interpret(&raw, &request.component_source))
    }

    /// Send a trivial prompt to verify the endpoint is reachable and the key
    /// is accepted. All failures are converted into the probe shape.
    pub async fn test_connection(&self) -> ConnectionProbe {
        let prompt = PromptBuilder::build_probe_prompt();
        match self.generate(&prompt, PROBE_TEMPERATURE, PROBE_MAX_TOKENS).await {
            Ok(_) => ConnectionProbe {
                success: true,
                error: None,
            },
            Err(e) => ConnectionProbe {
                success: false,
                error: Some(format!("{:#}", e)),
            },
        }
    }

    async fn generate(&self, prompt: &str, temperature: f32, max_output_tokens: u32) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature,
                top_k: self.config.llm.top_k,
                top_p: self.config.llm.top_p,
                max_output_tokens,
            },
            safety_settings: default_safety_settings(),
        };

        debug!(
            "Sending generateContent request to model {} ({} prompt bytes)",
            self.config.llm.model,
            prompt.len()
        );

        let url = format!(
            "{}/{}:generateContent?key={}",
            API_BASE, self.config.llm.model, self.config.llm.api_key
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to the generative language API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Generative language API error: {} {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status"),
                body
            ));
        }

        let decoded: GenerateResponse = response
            .json()
            .await
            .context("Failed to decode the API response")?;

        first_candidate_text(decoded)
    }
}

/// The four standard harm categories, all blocking medium severity and above.
fn default_safety_settings() -> Vec<SafetySetting> {
    [
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ]
    .iter()
    .map(|category| SafetySetting {
        category: category.to_string(),
        threshold: "BLOCK_MEDIUM_AND_ABOVE".to_string(),
    })
    .collect()
}

fn first_candidate_text(response: GenerateResponse) -> Result<String> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("API response contained no candidates"))?;

    let part = candidate
        .content
        .parts
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("API candidate contained no text parts"))?;

    Ok(part.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> Config {
        let mut config = Config::default();
        config.llm.api_key = key.to_string();
        config
    }

    #[test]
    fn construction_requires_api_key() {
        assert!(matches!(
            GeminiClient::new(&config_with_key("")),
            Err(ClientError::MissingApiKey)
        ));
        assert!(matches!(
            GeminiClient::new(&config_with_key("   ")),
            Err(ClientError::MissingApiKey)
        ));
        assert!(GeminiClient::new(&config_with_key("k")).is_ok());
    }

    #[test]
    fn request_body_matches_wire_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                top_k: 40,
                top_p: 0.95,
                max_output_tokens: 2048,
            },
            safety_settings: default_safety_settings(),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        let generation = &body["generationConfig"];
        assert!((generation["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(generation["topK"], 40);
        assert!((generation["topP"].as_f64().unwrap() - 0.95).abs() < 1e-6);
        assert_eq!(generation["maxOutputTokens"], 2048);
        assert_eq!(body["safetySettings"].as_array().unwrap().len(), 4);
        assert_eq!(
            body["safetySettings"][0]["threshold"],
            "BLOCK_MEDIUM_AND_ABOVE"
        );
    }

    #[test]
    fn decodes_candidate_text() {
        let decoded: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"reply"}]}}]}"#,
        )
        .unwrap();

        assert_eq!(first_candidate_text(decoded).unwrap(), "reply");
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let decoded: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(first_candidate_text(decoded).is_err());

        let missing: GenerateResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(first_candidate_text(missing).is_err());
    }
}
