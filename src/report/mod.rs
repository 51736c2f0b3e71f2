use std::time::Duration;

use serde::Serialize;

use crate::round::RoundResult;

pub const SHARE_TITLE: &str = "Word Guess Game Results";

/// `m:ss`, with the seconds floored.
pub fn format_time(time: Duration) -> String {
    let seconds = time.as_secs();
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// What the result screen shows for a won round.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub word: String,
    pub questions_count: usize,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl From<&RoundResult> for Summary {
    fn from(result: &RoundResult) -> Self {
        Self {
            word: result.word.clone(),
            questions_count: result.questions_count,
            time: format_time(result.time_taken),
            score: (result.score > 0).then_some(result.score),
        }
    }
}

pub fn share_text(result: &RoundResult) -> String {
    let summary = Summary::from(result);
    let mut text = format!(
        "I just played Word Guess Game!\n\nWord: {}\nQuestions Asked: {}\nTime: {}\n",
        summary.word, summary.questions_count, summary.time
    );
    if let Some(score) = summary.score {
        text.push_str(&format!("Score: {score}\n"));
    }
    text.push_str("\nCan you beat my score? Play now!");
    text
}
