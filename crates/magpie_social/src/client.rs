//! X API v2 client implementing the publisher seam.

use crate::dto::{CreatePostRequest, CreatePostResponse};
use crate::oauth::OauthToken;
use async_trait::async_trait;
use magpie_core::{PostReceipt, SocialPublisher};
use magpie_error::{MagpieResult, XError, XErrorKind};
use reqwest::Client;
use std::env;
use tracing::{debug, error, info, instrument, warn};

const X_CREATE_POST_URL: &str = "https://api.x.com/2/tweets";

/// The five credentials required for the X API v2.
///
/// The bearer token authenticates app-level read endpoints; tweet creation
/// itself is signed with the OAuth 1.0a user context. All five are required
/// at startup so a partially configured deployment fails before scheduling.
#[derive(Debug, Clone)]
pub struct XCredentials {
    /// Consumer (API) key
    pub api_key: String,
    /// Consumer (API) secret
    pub api_secret: String,
    /// User access token
    pub access_token: String,
    /// User access token secret
    pub access_secret: String,
    /// App bearer token
    pub bearer_token: String,
}

impl XCredentials {
    /// Load all five credentials from the environment.
    ///
    /// # Errors
    ///
    /// Returns an [`XError`] naming the first missing variable.
    pub fn from_env() -> Result<Self, XError> {
        let var = |name: &str| {
            env::var(name)
                .map_err(|_| XError::new(XErrorKind::MissingCredential(name.to_string())))
        };
        Ok(Self {
            api_key: var("TWITTER_API_KEY")?,
            api_secret: var("TWITTER_API_SECRET")?,
            access_token: var("TWITTER_ACCESS_TOKEN")?,
            access_secret: var("TWITTER_ACCESS_SECRET")?,
            bearer_token: var("TWITTER_BEARER_TOKEN")?,
        })
    }

    fn oauth_token(&self) -> OauthToken {
        OauthToken {
            consumer_key: self.api_key.clone(),
            consumer_secret: self.api_secret.clone(),
            access_token: self.access_token.clone(),
            access_secret: self.access_secret.clone(),
        }
    }
}

/// Client for the X API v2 tweet-creation endpoint.
///
/// # Example
///
/// ```no_run
/// use magpie_social::{XClient, XCredentials};
/// use magpie_core::SocialPublisher;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = XCredentials::from_env()?;
/// let client = XClient::new(credentials);
/// let receipt = client.publish("Hello from the bot!").await?;
/// println!("posted {}", receipt.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct XClient {
    client: Client,
    token: OauthToken,
}

impl XClient {
    /// Creates a new X client from validated credentials.
    pub fn new(credentials: XCredentials) -> Self {
        debug!("Creating new X client");
        Self {
            client: Client::new(),
            token: credentials.oauth_token(),
        }
    }

    /// Submit one post to the creation endpoint.
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn create_post(&self, text: &str) -> Result<CreatePostResponse, XError> {
        // JSON bodies contribute no parameters to the OAuth signature.
        let authorization = self
            .token
            .authorization_header("POST", X_CREATE_POST_URL, &[]);

        let body = CreatePostRequest {
            text: text.to_string(),
        };

        let response = self
            .client
            .post(X_CREATE_POST_URL)
            .header("authorization", authorization)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to X API");
                XError::new(XErrorKind::Network(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            let err = XError::new(XErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            });
            if err.kind.is_rate_limit() {
                warn!(status = %status, "X API rate limit hit");
            } else {
                error!(status = %status, "X API returned error");
            }
            return Err(err);
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse X response");
            XError::new(XErrorKind::Parse(format!("Failed to parse response: {}", e)))
        })
    }
}

#[async_trait]
impl SocialPublisher for XClient {
    async fn publish(&self, text: &str) -> MagpieResult<PostReceipt> {
        let response = self.create_post(text).await?;
        info!(id = %response.data.id, "Post published");
        Ok(PostReceipt {
            id: response.data.id,
            text: response.data.text,
        })
    }

    fn platform_name(&self) -> &'static str {
        "x"
    }
}
