use thiserror::Error;

/// Keyword that abandons the game at any prompt.
pub const QUIT: &str = "quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInput {
    Letter(char),
    Quit,
}

/// Reasons a line typed at the guess prompt is not a usable guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessInputError {
    #[error("Please insert only one character!")]
    NotOneCharacter,
    #[error("Please insert a letter from the alphabet!")]
    NotALetter,
}

/// Parse one line from the guess prompt. Letters are folded to lowercase.
pub fn parse_guess(line: &str) -> Result<GuessInput, GuessInputError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line == QUIT {
        return Ok(GuessInput::Quit);
    }

    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) => Ok(GuessInput::Letter(l)),
                _ => Err(GuessInputError::NotALetter),
            }
        }
        (Some(_), None) => Err(GuessInputError::NotALetter),
        _ => Err(GuessInputError::NotOneCharacter),
    }
}
