use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lobby::{QuestionAnswer, RoundStatus};
use crate::round::{Mode, Nickname, RoundSetup};
use crate::word::Category;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("No remote guess service is configured.")]
    NotConfigured,
    #[error("Error from reqwest: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("The remote guess service rejected the guess. Error: '{0}'.")]
    Rejected(String),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    pub guess: String,
    pub word_length: usize,
    pub category: Category,
    pub mode: Mode,
    #[serde(default)]
    pub nickname: Option<Nickname>,
}

impl GuessRequest {
    pub fn new(guess: &str, setup: &RoundSetup) -> Self {
        Self {
            guess: guess.to_string(),
            word_length: setup.word_length,
            category: setup.category,
            mode: setup.mode,
            nickname: setup.nickname.clone(),
        }
    }

    pub fn setup(&self) -> RoundSetup {
        RoundSetup {
            word_length: self.word_length,
            category: self.category,
            mode: self.mode,
            nickname: self.nickname.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    #[serde(default)]
    pub nickname: Option<Nickname>,
    pub question: String,
}

#[derive(Clone, Debug)]
pub struct RemoteSettings {
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl RemoteSettings {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1500);
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: RemoteSettings::DEFAULT_TIMEOUT,
        }
    }
}

/// Best effort client of the game service: `POST {base}/round`, `{base}/question` and
/// `{base}/guess`.
///
/// Every request is bounded by the configured timeout, so a dead service can't hang a round.
#[derive(Clone, Debug)]
pub struct RemoteGuessClient {
    base_url: Option<String>,
    http: reqwest::Client,
}

impl RemoteGuessClient {
    pub fn new(settings: &RemoteSettings) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            base_url: settings
                .base_url
                .as_deref()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            http,
        })
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        RemoteGuessClient::new(&RemoteSettings {
            base_url: Some(base_url.to_string()),
            timeout,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    pub async fn start_round(&self, setup: &RoundSetup) -> Result<RoundStatus, RemoteError> {
        self.post("round", setup).await
    }

    pub async fn ask(&self, request: &QuestionRequest) -> Result<QuestionAnswer, RemoteError> {
        self.post("question", request).await
    }

    pub async fn guess(&self, request: &GuessRequest) -> Result<GuessResponse, RemoteError> {
        let response: GuessResponse = self.post("guess", request).await?;

        match response.error {
            Some(error) => Err(RemoteError::Rejected(error)),
            None => Ok(response),
        }
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, RemoteError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let base_url = self.base_url.as_ref().ok_or(RemoteError::NotConfigured)?;

        let response = self
            .http
            .post(format!("{base_url}/{path}"))
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response)
    }
}
