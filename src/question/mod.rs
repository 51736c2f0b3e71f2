//! Keyword based answers to the yes/no questions a player asks about the hidden word.
//!
//! The rules are checked in order and the first one that matches wins:
//! starting letter, ending letter, contained letters, length. Anything else gets a refusal.

pub const UNRECOGNIZED_ANSWER: &str =
    "I cannot answer that question. Try asking about specific letters or the word length.";
pub const LETTER_NOT_CONTAINED_ANSWER: &str = "No, the word does not contain that letter";

#[derive(Clone, Debug, PartialEq)]
pub enum QuestionIntent {
    StartingLetter,
    EndingLetter,
    /// Letters mentioned by the question, in the order they were written.
    ContainsLetter(Vec<char>),
    Length,
    Unrecognized,
}

impl QuestionIntent {
    pub fn classify(question: &str) -> Self {
        let question = question.to_lowercase();
        let mentions = |keyword: &str| question.contains(keyword);

        if mentions("start") && mentions("letter") {
            QuestionIntent::StartingLetter
        } else if mentions("end") && mentions("letter") {
            QuestionIntent::EndingLetter
        } else if mentions("contain") || mentions("has") {
            QuestionIntent::ContainsLetter(letter_tokens(&question))
        } else if mentions("length") || mentions("long") {
            QuestionIntent::Length
        } else {
            QuestionIntent::Unrecognized
        }
    }

    pub fn answer(&self, word: &str) -> String {
        let word = word.to_lowercase();

        match self {
            QuestionIntent::StartingLetter => match word.chars().next() {
                Some(letter) => format!("The word starts with '{letter}'"),
                None => UNRECOGNIZED_ANSWER.to_string(),
            },
            QuestionIntent::EndingLetter => match word.chars().last() {
                Some(letter) => format!("The word ends with '{letter}'"),
                None => UNRECOGNIZED_ANSWER.to_string(),
            },
            QuestionIntent::ContainsLetter(letters) => letters
                .iter()
                .find(|letter| word.contains(**letter))
                .map(|letter| format!("Yes, the word contains the letter '{letter}'"))
                .unwrap_or_else(|| LETTER_NOT_CONTAINED_ANSWER.to_string()),
            QuestionIntent::Length => {
                format!("The word is {} letters long", word.chars().count())
            }
            QuestionIntent::Unrecognized => UNRECOGNIZED_ANSWER.to_string(),
        }
    }
}

pub fn answer(question: &str, word: &str) -> String {
    QuestionIntent::classify(question).answer(word)
}

/// Single letter tokens of an already lowercased question.
///
/// An unquoted `a` followed by a word starting with a consonant is the article, as in
/// "does it contain a z?", and is not taken as a letter.
fn letter_tokens(question: &str) -> Vec<char> {
    let tokens: Vec<&str> = question.split_whitespace().collect();
    let mut letters = Vec::new();

    for (index, raw_token) in tokens.iter().enumerate() {
        let token = raw_token.trim_matches(|char: char| !char.is_alphanumeric());
        let mut chars = token.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            continue;
        };
        if !letter.is_ascii_lowercase() {
            continue;
        }

        let is_quoted = raw_token.starts_with(['\'', '"']);
        let is_article = letter == 'a'
            && !is_quoted
            && tokens
                .get(index + 1)
                .and_then(|next| {
                    next.trim_start_matches(|char: char| !char.is_alphanumeric())
                        .chars()
                        .next()
                })
                .is_some_and(|next| next.is_ascii_lowercase() && !"aeiou".contains(next));
        if !is_article {
            letters.push(letter);
        }
    }

    letters
}
