use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::lobby::actor_client::LobbyClient;
use crate::lobby::{QuestionAnswer, RoundStatus};
use crate::remote::{GuessRequest, GuessResponse, QuestionRequest};
use crate::round::RoundSetup;
use crate::routes::error::status_code;

pub async fn start(
    State(lobby): State<Arc<LobbyClient>>,
    Json(setup): Json<RoundSetup>,
) -> Result<Json<RoundStatus>, Error> {
    lobby.start_round(setup).await.map(Json)
}

pub async fn status(
    State(lobby): State<Arc<LobbyClient>>,
    Path(nickname): Path<String>,
) -> Result<Json<RoundStatus>, Error> {
    lobby.status(nickname.into()).await.map(Json)
}

pub async fn abandon(
    State(lobby): State<Arc<LobbyClient>>,
    Path(nickname): Path<String>,
) -> Result<StatusCode, Error> {
    lobby.abandon_round(nickname.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn ask(
    State(lobby): State<Arc<LobbyClient>>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<QuestionAnswer>, Error> {
    let nickname = request
        .nickname
        .filter(|nickname| !nickname.is_empty())
        .ok_or(DomainError::NicknameRequired)?;

    lobby.ask(nickname, request.question).await.map(Json)
}

/// Always answers with the `{isCorrect, hint?, error?}` shape, errors included.
pub async fn guess(
    State(lobby): State<Arc<LobbyClient>>,
    Json(request): Json<GuessRequest>,
) -> Response {
    match lobby.guess(request).await {
        Ok(response) => Json(response).into_response(),
        Err(error) => (
            status_code(&error),
            Json(GuessResponse {
                is_correct: false,
                hint: None,
                error: Some(error.code().to_string()),
            }),
        )
            .into_response(),
    }
}
