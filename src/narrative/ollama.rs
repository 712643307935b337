use serde::{Deserialize, Serialize};

use crate::models::{Assessment, Patient};

use super::prompt;
use super::{NarrativeError, NarrativeProvider};

/// Preferred narrative models in order of preference.
const PREFERRED_MODELS: &[&str] = &[
    "medgemma",
    "medgemma:27b",
    "medgemma:4b",
    "medgemma:latest",
];

/// Ollama HTTP client for local narrative generation.
pub struct OllamaNarrative {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
    /// Pinned model; when None the best preferred model is resolved per call.
    model: Option<String>,
}

impl OllamaNarrative {
    /// Create a client pointing at an Ollama instance.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
            model: None,
        }
    }

    /// Default Ollama instance at localhost:11434 with 5-minute timeout.
    pub fn default_local() -> Self {
        Self::new("http://localhost:11434", 300)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Pin a specific model instead of resolving the preference list.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }

    /// Find the best available narrative model.
    pub fn find_best_model(&self) -> Result<String, NarrativeError> {
        let available = self.list_models()?;
        for preferred in PREFERRED_MODELS {
            if available.iter().any(|m| m.starts_with(preferred)) {
                return Ok(preferred.to_string());
            }
        }
        Err(NarrativeError::NoModelAvailable)
    }

    /// Is the service reachable and serving any model at all?
    pub fn is_available(&self) -> bool {
        self.list_models().map(|m| !m.is_empty()).unwrap_or(false)
    }

    pub fn list_models(&self) -> Result<Vec<String>, NarrativeError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self.client.get(&url).send().map_err(|e| {
            if e.is_connect() {
                NarrativeError::Connection(self.base_url.clone())
            } else {
                NarrativeError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(NarrativeError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaTagsResponse = response
            .json()
            .map_err(|e| NarrativeError::ResponseParsing(e.to_string()))?;
        Ok(parsed.models.into_iter().map(|m| m.name).collect())
    }

    fn generate(&self, model: &str, prompt: &str, system: &str) -> Result<String, NarrativeError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = OllamaGenerateRequest {
            model,
            prompt,
            system,
            stream: false,
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                NarrativeError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                NarrativeError::HttpClient(format!(
                    "Request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                NarrativeError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(NarrativeError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaGenerateResponse = response
            .json()
            .map_err(|e| NarrativeError::ResponseParsing(e.to_string()))?;
        Ok(parsed.response)
    }
}

impl NarrativeProvider for OllamaNarrative {
    fn clinical_narrative(
        &self,
        patient: &Patient,
        assessment: &Assessment,
    ) -> Result<String, NarrativeError> {
        let model = match &self.model {
            Some(model) => model.clone(),
            None => self.find_best_model()?,
        };
        tracing::debug!(model = %model, patient_id = %patient.id, "requesting narrative");
        self.generate(
            &model,
            &prompt::user_prompt(patient, assessment),
            prompt::system_prompt(),
        )
    }
}

/// Request body for Ollama /api/generate
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
}

/// Response body from Ollama /api/generate
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

/// Response body from Ollama /api/tags
#[derive(Deserialize)]
struct OllamaTagsResponse {
    models: Vec<OllamaModel>,
}

#[derive(Deserialize)]
struct OllamaModel {
    name: String,
}
