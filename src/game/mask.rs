use crate::game::answer::Answer;
use std::fmt;

pub const PLACEHOLDER: char = '_';

/// One position of the displayed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Hidden,
    Revealed(char),
    Separator,
}

/// Partially revealed view of an [`Answer`], one cell per character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    cells: Vec<Cell>,
}

impl Mask {
    /// Reveal every letter of `answer` that appears in `guessed`.
    pub fn reveal(answer: &Answer, guessed: &[char]) -> Self {
        let cells = answer
            .chars()
            .map(|c| {
                if c == ' ' {
                    Cell::Separator
                } else if guessed.contains(&c) {
                    Cell::Revealed(c)
                } else {
                    Cell::Hidden
                }
            })
            .collect();

        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn placeholders(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Hidden).count()
    }

    pub fn is_complete(&self) -> bool {
        self.placeholders() == 0
    }

    /// Uppercase rendering used on the terminal.
    pub fn to_display_string(&self) -> String {
        self.to_string().to_uppercase()
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cell {
                Cell::Hidden => write!(f, "{}", PLACEHOLDER)?,
                Cell::Revealed(c) => write!(f, "{}", c)?,
                Cell::Separator => f.write_str(" ")?,
            }
        }
        Ok(())
    }
}
