//! Gemini REST client implementing the content-driver seam.

use super::dto::{
    GeminiContent, GeminiGenerationConfig, GeminiRequest, GeminiResponse, GeminiTool,
};
use async_trait::async_trait;
use magpie_core::{ContentDriver, GenerateRequest, GenerateResponse};
use magpie_error::{GeminiError, GeminiErrorKind, MagpieResult};
use reqwest::Client;
use std::env;
use tracing::{debug, error, instrument};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default model used when a request does not name one.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Client for the Google Gemini `generateContent` REST endpoint.
///
/// One client is created at startup and held for the process lifetime; the
/// underlying `reqwest::Client` pools connections internally.
///
/// # Example
///
/// ```no_run
/// use magpie_models::GeminiClient;
/// use magpie_core::{ContentDriver, GenerateRequest};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::from_env(None)?;
/// let request = GenerateRequest {
///     prompt: "Say 'ok'".to_string(),
///     temperature: Some(0.7),
///     grounded: false,
///     model: None,
/// };
/// let response = client.generate(&request).await?;
/// println!("{}", response.text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Creates a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key
    /// * `model` - Default model identifier (e.g., "gemini-2.5-flash")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new Gemini client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Creates a client from the `GEMINI_API_KEY` environment variable.
    ///
    /// Uses [`DEFAULT_GEMINI_MODEL`] when `model` is None.
    pub fn from_env(model: Option<String>) -> MagpieResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Ok(Self::new(
            api_key,
            model.unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
        ))
    }

    /// Sends a request to the Gemini API.
    #[instrument(skip(self, request), fields(model = %model))]
    pub async fn generate_gemini(
        &self,
        request: &GeminiRequest,
        model: &str,
    ) -> Result<GeminiResponse, GeminiError> {
        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, model);
        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                GeminiError::new(GeminiErrorKind::ApiRequest(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini API returned error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: body,
            }));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            GeminiError::new(GeminiErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })
    }

    /// Converts a generation request into the Gemini request body.
    fn convert_request(request: &GenerateRequest) -> Result<GeminiRequest, GeminiError> {
        let tools = request.grounded.then(|| vec![GeminiTool::default()]);

        let generation_config = request.temperature.map(|temperature| {
            GeminiGenerationConfig {
                temperature: Some(temperature),
                max_output_tokens: None,
            }
        });

        GeminiRequest::builder()
            .contents(vec![GeminiContent::user(request.prompt.clone())])
            .tools(tools)
            .generation_config(generation_config)
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))
    }
}

#[async_trait]
impl ContentDriver for GeminiClient {
    #[instrument(skip(self, req))]
    async fn generate(&self, req: &GenerateRequest) -> MagpieResult<GenerateResponse> {
        let model = req.model.as_deref().unwrap_or(&self.model);
        let gemini_request = Self::convert_request(req)?;

        let response = self.generate_gemini(&gemini_request, model).await?;

        let text = response.text();
        if text.is_empty() {
            let reason = response
                .candidates()
                .first()
                .and_then(|c| c.finish_reason().clone())
                .unwrap_or_else(|| "no candidates".to_string());
            return Err(GeminiError::new(GeminiErrorKind::EmptyResponse(reason)).into());
        }

        Ok(GenerateResponse { text })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
