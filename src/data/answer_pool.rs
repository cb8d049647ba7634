use crate::game::answer::Answer;
use crate::{HangmanError, Result};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One row of `answers.csv`. Extra columns (such as a leading index) are ignored.
#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(rename = "Answer")]
    answer: String,
}

/// The candidate answers a game can draw from.
#[derive(Debug, Clone)]
pub struct AnswerPool {
    answers: Vec<Answer>,
}

impl AnswerPool {
    pub fn new(answers: Vec<Answer>) -> Result<Self> {
        if answers.is_empty() {
            return Err(HangmanError::EmptyAnswerPool);
        }
        Ok(Self { answers })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let pool = Self::from_reader(std::fs::File::open(path)?)?;
        log::info!("Loaded {} answers from {}", pool.len(), path.display());
        Ok(pool)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers()?.clone();
        let mut answers = Vec::new();

        for record in reader.records() {
            let record = record?;
            let row: AnswerRow = record.deserialize(Some(&headers))?;
            let answer = Answer::new(&row.answer).map_err(|e| {
                let line = record.position().map_or(0, |p| p.line());
                HangmanError::InvalidAnswer(format!("line {}: {}", line, e))
            })?;
            answers.push(answer);
        }

        Self::new(answers)
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Answer {
        // The pool is never empty.
        self.answers.choose(rng).unwrap_or(&self.answers[0])
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    // Never empty, see `new`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.answers.len()
    }
}
