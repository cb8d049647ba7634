//! Round evaluator: the rules of a single Hangman round.
//!
//! A [`Round`] owns the [`Answer`], the letters guessed so far and the
//! remaining lives. Every accepted guess either reveals letters in the
//! [`Mask`] or costs one life.

use crate::game::answer::Answer;
use crate::game::mask::Mask;
use crate::{HangmanError, Result};

/// Lives at the start of every round.
pub const STARTING_LIVES: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_over(self) -> bool {
        self != RoundStatus::InProgress
    }
}

/// Outcome of one accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessResult {
    pub letter: char,
    pub correct: bool,
    pub lives: u8,
    pub status: RoundStatus,
}

#[derive(Debug, Clone)]
pub struct Round {
    answer: Answer,
    guesses: Vec<char>,
    lives: u8,
    mask: Mask,
}

impl Round {
    pub fn new(answer: Answer) -> Self {
        let mask = Mask::reveal(&answer, &[]);
        Self {
            answer,
            guesses: Vec::new(),
            lives: STARTING_LIVES,
            mask,
        }
    }

    /// Apply one guess. The comparison is case-insensitive.
    ///
    /// Rejected guesses (non-letters, repeats, or guesses after the round
    /// ended) leave the round untouched.
    pub fn submit_guess(&mut self, guess: char) -> Result<GuessResult> {
        if self.status().is_over() {
            return Err(HangmanError::RoundOver);
        }
        if !guess.is_alphabetic() {
            return Err(HangmanError::InvalidGuess(guess));
        }
        // Some letters lowercase to more than one char; those can never match.
        let mut lower = guess.to_lowercase();
        let letter = match (lower.next(), lower.next()) {
            (Some(c), None) => c,
            _ => return Err(HangmanError::InvalidGuess(guess)),
        };
        if self.guesses.contains(&letter) {
            return Err(HangmanError::AlreadyGuessed(letter));
        }

        self.guesses.push(letter);

        let correct = self.answer.contains(letter);
        if correct {
            self.mask = Mask::reveal(&self.answer, &self.guesses);
        } else {
            self.lives = self.lives.saturating_sub(1);
        }

        let status = self.status();
        log::debug!(
            "guess '{}' correct={} lives={} status={:?}",
            letter,
            correct,
            self.lives,
            status
        );

        Ok(GuessResult {
            letter,
            correct,
            lives: self.lives,
            status,
        })
    }

    pub fn is_won(&self) -> bool {
        self.mask.is_complete()
    }

    pub fn is_lost(&self) -> bool {
        self.lives == 0
    }

    pub fn status(&self) -> RoundStatus {
        if self.is_won() {
            RoundStatus::Won
        } else if self.is_lost() {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Guessed letters in the order they were submitted.
    pub fn guesses(&self) -> &[char] {
        &self.guesses
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guesses.iter().any(|g| g.to_lowercase().eq(letter.to_lowercase()))
    }

    /// Guessed letters that are not part of the answer.
    pub fn misses(&self) -> Vec<char> {
        self.guesses
            .iter()
            .copied()
            .filter(|c| !self.answer.contains(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn round(answer: &str) -> Round {
        Round::new(Answer::new(answer).unwrap())
    }

    #[test]
    fn test_cat_is_won_on_last_letter() {
        let mut round = round("cat");

        assert!(round.submit_guess('c').unwrap().correct);
        assert!(round.submit_guess('a').unwrap().correct);
        assert_eq!(round.mask().to_string(), "c a _");
        assert!(!round.is_won());

        let result = round.submit_guess('t').unwrap();
        assert_eq!(result.status, RoundStatus::Won);
        assert_eq!(round.mask().to_string(), "c a t");
        assert!(round.is_won());
        assert!(!round.is_lost());
    }

    #[test]
    fn test_dog_is_lost_after_six_misses() {
        let mut round = round("dog");

        for (i, c) in ['x', 'y', 'z', 'q', 'w', 'v'].into_iter().enumerate() {
            let result = round.submit_guess(c).unwrap();
            assert!(!result.correct);
            assert_eq!(result.lives, STARTING_LIVES - 1 - i as u8);
        }

        assert_eq!(round.lives(), 0);
        assert!(round.is_lost());
        assert!(!round.is_won());
        assert_eq!(round.mask().to_string(), "_ _ _");
    }

    #[test]
    fn test_miss_order_does_not_matter() {
        let misses = ['v', 'w', 'q', 'z', 'y', 'x'];
        let mut forward = round("dog");
        let mut backward = round("dog");

        for c in misses {
            forward.submit_guess(c).unwrap();
        }
        for c in misses.iter().rev() {
            backward.submit_guess(*c).unwrap();
        }

        assert!(forward.is_lost());
        assert!(backward.is_lost());
    }

    #[test]
    fn test_won_only_when_last_missing_letter_arrives() {
        let answer = "mississippi";
        let mut round = round(answer);
        let letters = ['i', 's', 'p', 'm'];

        for (i, c) in letters.into_iter().enumerate() {
            assert!(!round.is_won());
            round.submit_guess(c).unwrap();
            assert_eq!(round.is_won(), i == letters.len() - 1);
        }
    }

    #[test]
    fn test_correct_guess_keeps_lives_and_miss_keeps_mask() {
        let mut round = round("ant");

        round.submit_guess('n').unwrap();
        assert_eq!(round.lives(), STARTING_LIVES);

        let before = round.mask().clone();
        round.submit_guess('e').unwrap();
        assert_eq!(round.mask(), &before);
        assert_eq!(round.lives(), STARTING_LIVES - 1);
        assert_eq!(round.misses(), vec!['e']);
    }

    #[test]
    fn test_mask_length_matches_answer_in_every_state() {
        let mut round = round("hello world");
        let len = round.answer().len();

        assert_eq!(round.mask().len(), len);
        for c in ['o', 'z', 'l', 'h', 'q'] {
            round.submit_guess(c).unwrap();
            assert_eq!(round.mask().len(), len);
        }
    }

    #[test]
    fn test_guess_is_case_insensitive() {
        let mut round = round("Cat");

        let result = round.submit_guess('C').unwrap();
        assert!(result.correct);
        assert_eq!(result.letter, 'c');
        assert!(round.has_guessed('c'));
        assert_matches!(round.submit_guess('c'), Err(HangmanError::AlreadyGuessed('c')));
    }

    #[test]
    fn test_rejected_guesses_leave_state_untouched() {
        let mut round = round("cat");
        round.submit_guess('x').unwrap();

        assert_matches!(round.submit_guess('7'), Err(HangmanError::InvalidGuess('7')));
        assert_matches!(round.submit_guess(' '), Err(HangmanError::InvalidGuess(' ')));
        assert_matches!(round.submit_guess('x'), Err(HangmanError::AlreadyGuessed('x')));

        assert_eq!(round.lives(), STARTING_LIVES - 1);
        assert_eq!(round.guesses(), &['x']);
    }

    #[test]
    fn test_no_guesses_after_round_is_over() {
        let mut round = round("a");
        round.submit_guess('a').unwrap();

        assert_matches!(round.submit_guess('b'), Err(HangmanError::RoundOver));
        assert_eq!(round.guesses(), &['a']);
    }

    #[test]
    fn test_status_queries_are_idempotent() {
        let mut round = round("go");
        round.submit_guess('g').unwrap();

        for _ in 0..3 {
            assert!(!round.is_won());
            assert!(!round.is_lost());
            assert_eq!(round.status(), RoundStatus::InProgress);
        }
    }
}
