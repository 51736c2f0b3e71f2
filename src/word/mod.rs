mod category;

pub use category::Category;

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::domain_error::DomainError;
use crate::error::Error;

pub const MIN_WORD_LENGTH: usize = 3;
pub const MAX_WORD_LENGTH: usize = 10;

/// Candidate words bucketed by category and by their own length.
///
/// Once built the table is only read, so it can be shared behind an `Arc`.
#[derive(Clone, Debug, Default)]
pub struct WordTable {
    words: HashMap<(Category, usize), Vec<String>>,
}

impl WordTable {
    const BUILTIN_WORDS: &'static str = include_str!("../../words/en.txt");

    pub fn builtin() -> Self {
        WordTable::parse(WordTable::BUILTIN_WORDS)
    }

    pub fn from_file(file_path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(file_path).map_err(|error| {
            Error::log_and_create_internal(&format!(
                "Could not load words file. File: '{}', Error: '{error}'.",
                file_path.display()
            ))
        })?;
        let table = WordTable::parse(&text);
        log::info!(
            "Words loaded. File: '{}', Words: '{}'.",
            file_path.display(),
            table.len()
        );
        Ok(table)
    }

    /// Reads `category: word word ...` lines. Blank lines and `#` comments are skipped, and so is
    /// anything that can't be played.
    pub fn parse(text: &str) -> Self {
        let mut table = WordTable::default();

        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((category, words)) = line.split_once(':') else {
                log::warn!("Skipping a word line without a category. Line: '{line}'.");
                continue;
            };
            let category = match category.parse::<Category>() {
                Ok(category) => category,
                Err(error) => {
                    log::warn!("Skipping a word line. Line: '{line}', Error: '{error}'.");
                    continue;
                }
            };
            for word in words.split_whitespace() {
                if !table.insert(category, word) {
                    log::warn!("Skipping an unplayable word. Category: '{category}', Word: '{word}'.");
                }
            }
        }

        table
    }

    /// Returns false when the word is not 3 to 10 ASCII letters.
    pub fn insert(&mut self, category: Category, word: &str) -> bool {
        let word = word.to_lowercase();
        if !WordTable::is_supported_length(word.len())
            || !word.chars().all(|char| char.is_ascii_alphabetic())
        {
            return false;
        }

        let bucket = self.words.entry((category, word.len())).or_default();
        if !bucket.contains(&word) {
            bucket.push(word);
        }
        true
    }

    pub fn candidates(&self, category: Category, length: usize) -> &[String] {
        self.words
            .get(&(category, length))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_supported_length(length: usize) -> bool {
        (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length)
    }

    pub fn pick(&self, category: Category, length: usize) -> Result<String, DomainError> {
        self.pick_with(&mut thread_rng(), category, length)
    }

    pub fn pick_with<R>(
        &self,
        rng: &mut R,
        category: Category,
        length: usize,
    ) -> Result<String, DomainError>
    where
        R: Rng + ?Sized,
    {
        if !WordTable::is_supported_length(length) {
            return Err(DomainError::UnsupportedWordLength(
                length,
                MIN_WORD_LENGTH,
                MAX_WORD_LENGTH,
            ));
        }

        let mut candidates = self.candidates(category, length);
        if candidates.is_empty() && category != Category::General {
            log::debug!(
                "No words for the category, falling back to general. Category: '{category}', WordLength: '{length}'."
            );
            candidates = self.candidates(Category::General, length);
        }

        candidates
            .choose(rng)
            .cloned()
            .ok_or(DomainError::NoWordAvailable { category, length })
    }
}
