mod nickname;
pub mod round_fsm;

pub use nickname::Nickname;

use rust_fsm::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::time::{Duration, Instant};

use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::metrics::REMOTE_FALLBACKS;
use crate::question;
use crate::remote::{GuessRequest, QuestionRequest, RemoteError, RemoteGuessClient};
use crate::round::round_fsm::{RoundFsm, RoundFsmInput, RoundFsmState};
use crate::word::{Category, WordTable};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Fun,
    Challenge,
}

/// Parameters chosen by the player before a round starts.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSetup {
    pub word_length: usize,
    pub category: Category,
    pub mode: Mode,
    #[serde(default)]
    pub nickname: Option<Nickname>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HintEntry {
    question: String,
    answer: String,
}

impl HintEntry {
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoundResult {
    pub word: String,
    pub score: u32,
    pub questions_count: usize,
    pub time_taken: Duration,
}

/// Advisory for the player. The round keeps going.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    RemoteUnavailable(String),
}

impl Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::RemoteUnavailable(reason) => write!(
                f,
                "The game service is unavailable, switched to offline mode. Reason: '{reason}'."
            ),
        }
    }
}

#[derive(Debug)]
pub struct GuessAttempt {
    pub outcome: Result<RoundResult, Error>,
    /// Extra clue the game service may send along with its verdict.
    pub hint: Option<String>,
    pub notice: Option<Notice>,
}

#[derive(Debug)]
pub struct QuestionAttempt {
    pub outcome: Result<HintEntry, Error>,
    pub notice: Option<Notice>,
}

pub struct Round {
    setup: RoundSetup,
    target: String,
    fsm: StateMachine<RoundFsm>,
    hints: Vec<HintEntry>,
    score: u32,
    started_at: Instant,
    using_remote: bool,
    result: Option<RoundResult>,
}

impl Round {
    pub const MAXIMUM_HINTS: usize = 5;
    pub const CHALLENGE_POINTS: u32 = 10;

    /// Draws the word and starts the round. Nothing is created when no word can be drawn.
    pub fn start(setup: RoundSetup, words: &WordTable) -> Result<Self, Error> {
        let word = words.pick(setup.category, setup.word_length)?;
        Round::start_with_word(setup, &word)
    }

    /// Like [`Round::start`], but the round is also started on the game service, which then
    /// answers the questions and checks the guesses until it fails. The locally drawn word is
    /// only played once the round is offline.
    pub async fn start_online(
        setup: RoundSetup,
        words: &WordTable,
        client: &RemoteGuessClient,
    ) -> Result<(Self, Option<Notice>), Error> {
        let mut round = Round::start(setup, words)?;

        match client.start_round(&round.setup).await {
            Ok(_) => {
                round.using_remote = true;
                Ok((round, None))
            }
            Err(error) => {
                let notice = round.switch_to_offline(&error);
                Ok((round, Some(notice)))
            }
        }
    }

    pub fn start_with_word(setup: RoundSetup, word: &str) -> Result<Self, Error> {
        let mut round = Self {
            setup,
            target: word.trim().to_string(),
            fsm: StateMachine::default(),
            hints: Vec::with_capacity(Round::MAXIMUM_HINTS),
            score: 0,
            started_at: Instant::now(),
            using_remote: false,
            result: None,
        };
        round.process_event(&RoundFsmInput::Start)?;
        log::debug!(
            "Round started. Nickname: '{}', Category: '{}', WordLength: '{}', Mode: '{:?}'.",
            round.nickname_or_anonymous(),
            round.setup.category,
            round.setup.word_length,
            round.setup.mode
        );
        Ok(round)
    }

    pub fn setup(&self) -> &RoundSetup {
        &self.setup
    }

    pub fn state(&self) -> &RoundFsmState {
        self.fsm.state()
    }

    pub fn hints(&self) -> &[HintEntry] {
        &self.hints
    }

    pub fn hints_remaining(&self) -> usize {
        Round::MAXIMUM_HINTS.saturating_sub(self.hints.len())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed(&self) -> Duration {
        match &self.result {
            Some(result) => result.time_taken,
            None => self.started_at.elapsed(),
        }
    }

    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    pub fn is_using_remote(&self) -> bool {
        self.using_remote
    }

    pub fn ask(&mut self, question: &str) -> Result<&HintEntry, Error> {
        let question = self.validate_question(question)?;
        let answer = question::answer(&question, &self.target);
        self.record_hint(question, answer)
    }

    /// Asks the game service while the round is online, with the same fallback as
    /// [`Round::guess_online`].
    pub async fn ask_online(
        &mut self,
        question: &str,
        client: &RemoteGuessClient,
    ) -> QuestionAttempt {
        let question = match self.validate_question(question) {
            Ok(question) => question,
            Err(error) => {
                return QuestionAttempt {
                    outcome: Err(error),
                    notice: None,
                }
            }
        };

        if !self.using_remote {
            return QuestionAttempt {
                outcome: self.ask(&question).cloned(),
                notice: None,
            };
        }

        let request = QuestionRequest {
            nickname: self.setup.nickname.clone(),
            question: question.clone(),
        };
        match client.ask(&request).await {
            Ok(answer) => QuestionAttempt {
                outcome: self.record_hint(question, answer.answer).cloned(),
                notice: None,
            },
            Err(error) => {
                let notice = self.switch_to_offline(&error);
                QuestionAttempt {
                    outcome: self.ask(&question).cloned(),
                    notice: Some(notice),
                }
            }
        }
    }

    pub fn guess(&mut self, candidate: &str) -> Result<RoundResult, Error> {
        let candidate = self.validate_guess(candidate)?;
        let is_correct = candidate.to_lowercase() == self.target.to_lowercase();
        let word = self.target.clone();
        self.settle(is_correct, word)
    }

    /// Checks the guess with the remote service while the round is online. Any failure of the
    /// service switches the round to offline for good and the guess is checked locally instead.
    pub async fn guess_online(
        &mut self,
        candidate: &str,
        client: &RemoteGuessClient,
    ) -> GuessAttempt {
        let candidate = match self.validate_guess(candidate) {
            Ok(candidate) => candidate,
            Err(error) => {
                return GuessAttempt {
                    outcome: Err(error),
                    hint: None,
                    notice: None,
                }
            }
        };

        if !self.using_remote {
            return GuessAttempt {
                outcome: self.guess(&candidate),
                hint: None,
                notice: None,
            };
        }

        match client.guess(&GuessRequest::new(&candidate, &self.setup)).await {
            Ok(response) => GuessAttempt {
                outcome: self.settle(response.is_correct, candidate),
                hint: response.hint,
                notice: None,
            },
            Err(error) => {
                let notice = self.switch_to_offline(&error);
                GuessAttempt {
                    outcome: self.guess(&candidate),
                    hint: None,
                    notice: Some(notice),
                }
            }
        }
    }

    fn switch_to_offline(&mut self, error: &RemoteError) -> Notice {
        log::warn!(
            "Game service failed, switching to offline mode. Nickname: '{}', Error: '{error}'.",
            self.nickname_or_anonymous()
        );
        REMOTE_FALLBACKS.inc();
        self.using_remote = false;
        Notice::RemoteUnavailable(error.to_string())
    }

    fn validate_question(&self, question: &str) -> Result<String, Error> {
        self.ensure_in_progress(DomainError::InvalidStateForQuestion)?;

        let question = question.trim();
        if question.is_empty() {
            return Err(DomainError::EmptyQuestion.into());
        }
        if self.hints.len() >= Round::MAXIMUM_HINTS {
            return Err(DomainError::HintLimitReached(Round::MAXIMUM_HINTS).into());
        }
        Ok(question.to_string())
    }

    fn record_hint(&mut self, question: String, answer: String) -> Result<&HintEntry, Error> {
        self.process_event(&RoundFsmInput::Ask)?;
        self.add_challenge_points();
        self.hints.push(HintEntry { question, answer });

        Ok(&self.hints[self.hints.len() - 1])
    }

    fn validate_guess(&self, candidate: &str) -> Result<String, Error> {
        self.ensure_in_progress(DomainError::InvalidStateForGuess)?;

        let candidate = candidate.trim();
        if candidate.is_empty() {
            return Err(DomainError::EmptyGuess.into());
        }
        Ok(candidate.to_string())
    }

    fn settle(&mut self, is_correct: bool, word: String) -> Result<RoundResult, Error> {
        if !is_correct {
            self.process_event(&RoundFsmInput::MissedGuess)?;
            self.add_challenge_points();
            return Err(DomainError::IncorrectGuess.into());
        }

        self.process_event(&RoundFsmInput::CorrectGuess)?;
        let result = RoundResult {
            word,
            score: self.score,
            questions_count: self.hints.len(),
            time_taken: self.started_at.elapsed(),
        };
        log::info!(
            "Round won. Nickname: '{}', Questions: '{}', Score: '{}', Seconds: '{}'.",
            self.nickname_or_anonymous(),
            result.questions_count,
            result.score,
            result.time_taken.as_secs()
        );
        self.result = Some(result.clone());
        Ok(result)
    }

    fn add_challenge_points(&mut self) {
        if self.setup.mode == Mode::Challenge {
            self.score = self.score.saturating_add(Round::CHALLENGE_POINTS);
        }
    }

    fn ensure_in_progress(
        &self,
        error: fn(RoundFsmState, RoundFsmState) -> DomainError,
    ) -> Result<(), Error> {
        if self.state() == &RoundFsmState::InProgress {
            Ok(())
        } else {
            Err(error(self.state().clone(), RoundFsmState::InProgress).into())
        }
    }

    fn process_event(&mut self, event: &RoundFsmInput) -> Result<(), Error> {
        self.fsm.consume(event).map(|_| ()).map_err(|error| {
            Error::log_and_create_internal(&format!(
                "The fsm in state {:?} can't transition with an event {:?}. Error: '{error}'.",
                self.fsm.state(),
                event
            ))
        })
    }

    fn nickname_or_anonymous(&self) -> &str {
        self.setup
            .nickname
            .as_ref()
            .map(Nickname::as_slice)
            .unwrap_or("anonymous")
    }
}
