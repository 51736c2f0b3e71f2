use std::fmt;

use rust_fsm::state_machine;

/*
 * NotStarted
 * InProgress
 *    Questions and missed guesses keep the round going
 *    A correct guess wins it
 * Won
 */
state_machine! {
    derive(Debug, Clone, PartialEq)
    pub RoundFsm(NotStarted)

    NotStarted => {
        Start => InProgress
    },
    InProgress => {
        Ask => InProgress,
        MissedGuess => InProgress,
        CorrectGuess => Won,
    }
}

impl fmt::Display for RoundFsmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
