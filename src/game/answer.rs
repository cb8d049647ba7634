use crate::{HangmanError, Result};
use std::fmt;

/// The secret word or phrase of a round.
///
/// Always lowercase, made of letters and spaces, with at least one letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Answer(String);

impl Answer {
    pub fn new(text: &str) -> Result<Self> {
        let text = text.trim().to_lowercase();

        if !text.chars().any(char::is_alphabetic) {
            return Err(HangmanError::InvalidAnswer(format!(
                "{:?} contains no letters",
                text
            )));
        }
        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic() && *c != ' ') {
            return Err(HangmanError::InvalidAnswer(format!(
                "{:?} contains {:?}; only letters and spaces are allowed",
                text, bad
            )));
        }

        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    /// Number of character positions, separators included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
