use thiserror::Error;

use crate::round::round_fsm::RoundFsmState;
use crate::word::Category;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("No word is available, not even in the general category. Category: '{category}', WordLength: '{length}'.")]
    NoWordAvailable { category: Category, length: usize },
    #[error("The word length is not supported. ActualLength: '{0}', SupportedLengths: '{1}..={2}'.")]
    UnsupportedWordLength(usize, usize, usize),
    #[error("The category does not exist. Category: '{0}'.")]
    UnknownCategory(String),
    #[error("No more questions can be asked in this round. MaximumHints: '{0}'.")]
    HintLimitReached(usize),
    #[error("The guess does not match the word.")]
    IncorrectGuess,
    #[error("The question cannot be empty.")]
    EmptyQuestion,
    #[error("The guess cannot be empty.")]
    EmptyGuess,
    #[error("Invalid state for asking a question. ActualState: '{0}', ExpectedState: '{1}'.")]
    InvalidStateForQuestion(RoundFsmState, RoundFsmState),
    #[error("Invalid state for submitting a guess. ActualState: '{0}', ExpectedState: '{1}'.")]
    InvalidStateForGuess(RoundFsmState, RoundFsmState),
    #[error("The player does not have a round in progress. Nickname: '{0}'.")]
    NoActiveRound(String),
    #[error("A nickname is required to play against the server.")]
    NicknameRequired,
}

impl DomainError {
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::NoWordAvailable { .. } => "NO_WORD_AVAILABLE",
            DomainError::UnsupportedWordLength(..) => "UNSUPPORTED_WORD_LENGTH",
            DomainError::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            DomainError::HintLimitReached(_) => "HINT_LIMIT_REACHED",
            DomainError::IncorrectGuess => "INCORRECT_GUESS",
            DomainError::EmptyQuestion => "EMPTY_QUESTION",
            DomainError::EmptyGuess => "EMPTY_GUESS",
            DomainError::InvalidStateForQuestion(..) => "INVALID_STATE_FOR_QUESTION",
            DomainError::InvalidStateForGuess(..) => "INVALID_STATE_FOR_GUESS",
            DomainError::NoActiveRound(_) => "NO_ACTIVE_ROUND",
            DomainError::NicknameRequired => "NICKNAME_REQUIRED",
        }
    }
}
