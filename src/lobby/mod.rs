pub mod actor;
pub mod actor_client;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::metrics::{ACTIVE_ROUNDS, ROUNDS_EXPIRED, ROUNDS_STARTED, ROUNDS_WON};
use crate::remote::{GuessRequest, GuessResponse};
use crate::round::round_fsm::RoundFsmState;
use crate::round::{Mode, Nickname, Round, RoundSetup};
use crate::word::{Category, WordTable};

/// The live round of every player playing against the server, one per nickname.
pub struct Lobby {
    rounds: HashMap<Nickname, Seat>,
    words: Arc<WordTable>,
}

struct Seat {
    round: Round,
    last_active: Instant,
}

impl Seat {
    fn new(round: Round) -> Self {
        Self {
            round,
            last_active: Instant::now(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStatus {
    pub word_length: usize,
    pub category: Category,
    pub mode: Mode,
    pub hints_remaining: usize,
    pub score: u32,
}

impl From<&Round> for RoundStatus {
    fn from(round: &Round) -> Self {
        Self {
            word_length: round.setup().word_length,
            category: round.setup().category,
            mode: round.setup().mode,
            hints_remaining: round.hints_remaining(),
            score: round.score(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnswer {
    pub answer: String,
    pub hints_remaining: usize,
    pub score: u32,
}

impl Lobby {
    pub fn new(words: Arc<WordTable>) -> Self {
        Self {
            rounds: HashMap::default(),
            words,
        }
    }

    /// Starts a round for the player, replacing the one they had.
    pub fn start_round(&mut self, setup: RoundSetup) -> Result<RoundStatus, Error> {
        let nickname = Lobby::required_nickname(setup.nickname.as_ref())?.clone();
        let round = Round::start(setup, &self.words)?;
        let status = RoundStatus::from(&round);

        if self.rounds.insert(nickname.clone(), Seat::new(round)).is_none() {
            ACTIVE_ROUNDS.inc();
        }
        ROUNDS_STARTED.inc();
        log::info!(
            "Round started. Nickname: '{nickname}', Category: '{}', WordLength: '{}'.",
            status.category,
            status.word_length
        );

        Ok(status)
    }

    pub fn ask(&mut self, nickname: &Nickname, question: &str) -> Result<QuestionAnswer, Error> {
        let round = self.get_round_mut(nickname)?;
        let answer = round.ask(question)?.answer().to_string();

        Ok(QuestionAnswer {
            answer,
            hints_remaining: round.hints_remaining(),
            score: round.score(),
        })
    }

    /// Checks the guess against the player's round. A player without a round for the requested
    /// setup gets a new one first. Won rounds leave the lobby.
    pub fn guess(&mut self, request: &GuessRequest) -> Result<GuessResponse, Error> {
        let nickname = Lobby::required_nickname(request.nickname.as_ref())?.clone();
        let setup = request.setup();

        let needs_new_round = match self.rounds.get(&nickname) {
            Some(Seat { round, .. }) => {
                round.state() != &RoundFsmState::InProgress || !Lobby::same_game(round, &setup)
            }
            None => true,
        };
        if needs_new_round {
            self.start_round(setup)?;
        }

        let round = self.get_round_mut(&nickname)?;
        match round.guess(&request.guess) {
            Ok(result) => {
                log::info!(
                    "Player guessed the word. Nickname: '{nickname}', Questions: '{}'.",
                    result.questions_count
                );
                self.remove_round(&nickname);
                ROUNDS_WON.inc();
                Ok(GuessResponse {
                    is_correct: true,
                    ..GuessResponse::default()
                })
            }
            Err(Error::Domain(DomainError::IncorrectGuess)) => Ok(GuessResponse::default()),
            Err(error) => Err(error),
        }
    }

    pub fn status(&self, nickname: &Nickname) -> Result<RoundStatus, Error> {
        self.rounds
            .get(nickname)
            .map(|seat| RoundStatus::from(&seat.round))
            .ok_or_else(|| DomainError::NoActiveRound(nickname.to_string()).into())
    }

    /// Drops the player's round without finishing it.
    pub fn abandon_round(&mut self, nickname: &Nickname) -> Result<(), Error> {
        match self.remove_round(nickname) {
            Some(_) => {
                log::info!("Round abandoned. Nickname: '{nickname}'.");
                Ok(())
            }
            None => Err(DomainError::NoActiveRound(nickname.to_string()).into()),
        }
    }

    /// Drops every round nobody touched for at least `max_idle`. Returns how many were dropped.
    pub fn remove_idle_rounds(&mut self, max_idle: Duration) -> usize {
        let before = self.rounds.len();
        self.rounds.retain(|_, seat| seat.last_active.elapsed() < max_idle);
        let expired = before - self.rounds.len();

        if expired > 0 {
            ACTIVE_ROUNDS.sub(expired as i64);
            ROUNDS_EXPIRED.inc_by(expired as u64);
            log::info!(
                "Removed idle rounds. Expired: '{expired}', Remaining: '{}'.",
                self.rounds.len()
            );
        }
        expired
    }

    pub fn remove_round(&mut self, nickname: &Nickname) -> Option<Round> {
        let seat = self.rounds.remove(nickname);
        if seat.is_some() {
            ACTIVE_ROUNDS.dec();
        }
        seat.map(|seat| seat.round)
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    fn get_round_mut(&mut self, nickname: &Nickname) -> Result<&mut Round, Error> {
        let seat = self
            .rounds
            .get_mut(nickname)
            .ok_or_else(|| Error::from(DomainError::NoActiveRound(nickname.to_string())))?;
        seat.last_active = Instant::now();
        Ok(&mut seat.round)
    }

    fn same_game(round: &Round, setup: &RoundSetup) -> bool {
        let current = round.setup();
        current.word_length == setup.word_length
            && current.category == setup.category
            && current.mode == setup.mode
    }

    fn required_nickname(nickname: Option<&Nickname>) -> Result<&Nickname, Error> {
        nickname
            .filter(|nickname| !nickname.is_empty())
            .ok_or_else(|| DomainError::NicknameRequired.into())
    }
}
