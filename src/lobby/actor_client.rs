use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot::error::RecvError;
use tokio::sync::oneshot::{self, Receiver as OneshotReceiver, Sender as OneshotSender};

use crate::error::Error;
use crate::lobby::actor::{LobbyCommand, LobbyResponse};
use crate::lobby::{QuestionAnswer, RoundStatus};
use crate::remote::{GuessRequest, GuessResponse};
use crate::round::{Nickname, RoundSetup};

#[derive(Clone, Debug)]
pub struct LobbyClient {
    pub(super) lobby_tx: Sender<LobbyCommand>,
}

impl LobbyClient {
    pub async fn start_round(&self, setup: RoundSetup) -> Result<RoundStatus, Error> {
        let (response_tx, rx) = LobbyClient::channel();

        self.send_command(
            LobbyCommand::StartRound { setup, response_tx },
            "The Lobby is not alive. Can't start a Round",
        )
        .await?;

        match rx.await {
            Ok(LobbyResponse::RoundStarted { status }) => Ok(status),
            error => Err(LobbyClient::handle_response_error(error)),
        }
    }

    pub async fn ask(&self, nickname: Nickname, question: String) -> Result<QuestionAnswer, Error> {
        let (response_tx, rx) = LobbyClient::channel();

        self.send_command(
            LobbyCommand::AskQuestion {
                nickname,
                question,
                response_tx,
            },
            "The Lobby is not alive. Can't ask a question",
        )
        .await?;

        match rx.await {
            Ok(LobbyResponse::QuestionAnswered { answer }) => Ok(answer),
            error => Err(LobbyClient::handle_response_error(error)),
        }
    }

    pub async fn guess(&self, request: GuessRequest) -> Result<GuessResponse, Error> {
        let (response_tx, rx) = LobbyClient::channel();

        self.send_command(
            LobbyCommand::SubmitGuess {
                request,
                response_tx,
            },
            "The Lobby is not alive. Can't submit a guess",
        )
        .await?;

        match rx.await {
            Ok(LobbyResponse::GuessChecked { response }) => Ok(response),
            error => Err(LobbyClient::handle_response_error(error)),
        }
    }

    pub async fn status(&self, nickname: Nickname) -> Result<RoundStatus, Error> {
        let (response_tx, rx) = LobbyClient::channel();

        self.send_command(
            LobbyCommand::GetStatus {
                nickname,
                response_tx,
            },
            "The Lobby is not alive. Can't get the Round",
        )
        .await?;

        match rx.await {
            Ok(LobbyResponse::Status { status }) => Ok(status),
            error => Err(LobbyClient::handle_response_error(error)),
        }
    }

    pub async fn abandon_round(&self, nickname: Nickname) -> Result<(), Error> {
        let (response_tx, rx) = LobbyClient::channel();

        self.send_command(
            LobbyCommand::AbandonRound {
                nickname,
                response_tx,
            },
            "The Lobby is not alive. Can't abandon the Round",
        )
        .await?;

        match rx.await {
            Ok(LobbyResponse::RoundAbandoned) => Ok(()),
            error => Err(LobbyClient::handle_response_error(error)),
        }
    }

    fn channel() -> (OneshotSender<LobbyResponse>, OneshotReceiver<LobbyResponse>) {
        oneshot::channel()
    }

    async fn send_command(&self, command: LobbyCommand, error_message: &str) -> Result<(), Error> {
        self.lobby_tx.send(command).await.map_err(|error| {
            Error::log_and_create_internal(&format!("{error_message}. Error: '{error}'"))
        })
    }

    fn handle_response_error(error: Result<LobbyResponse, RecvError>) -> Error {
        match error {
            Ok(LobbyResponse::Error { error }) => error,
            Ok(unexpected_response) => Error::log_and_create_internal(&format!(
                "Received an unexpected LobbyResponse. LobbyResponse: '{unexpected_response}'."
            )),
            Err(_) => Error::log_and_create_internal(
                "Sent a command to the Lobby actor, but the actor channel died.",
            ),
        }
    }
}
