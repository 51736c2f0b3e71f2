use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;
use tokio::select;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::sync::oneshot::Sender as OneshotSender;
use tokio::time::{self, MissedTickBehavior};

use crate::error::Error;
use crate::lobby::actor_client::LobbyClient;
use crate::lobby::{Lobby, QuestionAnswer, RoundStatus};
use crate::remote::{GuessRequest, GuessResponse};
use crate::round::{Nickname, RoundSetup};
use crate::word::WordTable;

pub struct LobbyActor {
    lobby: Lobby,
    lobby_rx: Receiver<LobbyCommand>,
    inactivity_timeout: Duration,
}

impl LobbyActor {
    /// Runs the Lobby Actor in background and returns a Client to communicate with it.
    /// Rounds without requests for `inactivity_timeout` are dropped.
    pub fn spawn(words: Arc<WordTable>, inactivity_timeout: Duration) -> LobbyClient {
        let (lobby_tx, lobby_rx): (Sender<LobbyCommand>, Receiver<LobbyCommand>) =
            mpsc::channel(512);

        tokio::spawn(
            LobbyActor {
                lobby: Lobby::new(words),
                lobby_rx,
                inactivity_timeout,
            }
            .start(),
        );

        LobbyClient { lobby_tx }
    }

    async fn start(mut self) {
        let mut idle_sweep = time::interval(self.inactivity_timeout);
        idle_sweep.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            select! {
                _ = idle_sweep.tick() => {
                    self.lobby.remove_idle_rounds(self.inactivity_timeout);
                },
                command = self.lobby_rx.recv() => match command {
                    Some(command) => self.handle_command(command),
                    None => break,
                },
            }
        }

        log::info!("Lobby channel has been dropped. Stopping lobby actor.");
    }

    fn handle_command(&mut self, command: LobbyCommand) {
        let (result, response_tx) = match command {
            LobbyCommand::StartRound { setup, response_tx } => {
                let result = self
                    .lobby
                    .start_round(setup)
                    .map(|status| LobbyResponse::RoundStarted { status });
                (result, response_tx)
            }
            LobbyCommand::AskQuestion {
                nickname,
                question,
                response_tx,
            } => {
                let result = self
                    .lobby
                    .ask(&nickname, &question)
                    .map(|answer| LobbyResponse::QuestionAnswered { answer });
                (result, response_tx)
            }
            LobbyCommand::SubmitGuess {
                request,
                response_tx,
            } => {
                let result = self
                    .lobby
                    .guess(&request)
                    .map(|response| LobbyResponse::GuessChecked { response });
                (result, response_tx)
            }
            LobbyCommand::GetStatus {
                nickname,
                response_tx,
            } => {
                let result = self
                    .lobby
                    .status(&nickname)
                    .map(|status| LobbyResponse::Status { status });
                (result, response_tx)
            }
            LobbyCommand::AbandonRound {
                nickname,
                response_tx,
            } => {
                let result = self
                    .lobby
                    .abandon_round(&nickname)
                    .map(|_| LobbyResponse::RoundAbandoned);
                (result, response_tx)
            }
        };

        let response = match result {
            Ok(response) => response,
            Err(error) => LobbyResponse::Error { error },
        };
        if let Err(response) = response_tx.send(response) {
            log::error!("Sent LobbyResponse but the response channel is closed. Response: '{response}'.");
        }
    }
}

#[derive(Debug)]
pub(crate) enum LobbyCommand {
    StartRound {
        setup: RoundSetup,
        response_tx: OneshotSender<LobbyResponse>,
    },
    AskQuestion {
        nickname: Nickname,
        question: String,
        response_tx: OneshotSender<LobbyResponse>,
    },
    SubmitGuess {
        request: GuessRequest,
        response_tx: OneshotSender<LobbyResponse>,
    },
    GetStatus {
        nickname: Nickname,
        response_tx: OneshotSender<LobbyResponse>,
    },
    AbandonRound {
        nickname: Nickname,
        response_tx: OneshotSender<LobbyResponse>,
    },
}

#[derive(Debug)]
pub(crate) enum LobbyResponse {
    RoundStarted { status: RoundStatus },
    QuestionAnswered { answer: QuestionAnswer },
    GuessChecked { response: GuessResponse },
    Status { status: RoundStatus },
    RoundAbandoned,
    Error { error: Error },
}

impl Display for LobbyResponse {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LobbyResponse::RoundStarted { .. } => write!(formatter, "RoundStarted"),
            LobbyResponse::QuestionAnswered { .. } => write!(formatter, "QuestionAnswered"),
            LobbyResponse::GuessChecked { response } => {
                write!(formatter, "GuessChecked(is_correct: {})", response.is_correct)
            }
            LobbyResponse::Status { .. } => write!(formatter, "Status"),
            LobbyResponse::RoundAbandoned => write!(formatter, "RoundAbandoned"),
            LobbyResponse::Error { error } => write!(formatter, "Error '{error}'"),
        }
    }
}
