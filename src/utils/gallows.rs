use crate::game::round::STARTING_LIVES;

const FRAMES: [&str; 7] = [
    // 0 lives
    r"  +------+
  |      |
  O      |
 /|\     |
 / \     |
         |
  ========",
    r"  +------+
  |      |
  O      |
 /|\     |
 /       |
         |
  ========",
    r"  +------+
  |      |
  O      |
 /|\     |
         |
         |
  ========",
    r"  +------+
  |      |
  O      |
 /|      |
         |
         |
  ========",
    r"  +------+
  |      |
  O      |
  |      |
         |
         |
  ========",
    r"  +------+
  |      |
  O      |
         |
         |
         |
  ========",
    // full lives
    r"  +------+
  |      |
         |
         |
         |
         |
  ========",
];

/// Hangman figure for the given number of remaining lives.
pub fn gallows(lives: u8) -> &'static str {
    FRAMES[usize::from(lives.min(STARTING_LIVES))]
}
