pub mod answer;
pub mod guess;
pub mod mask;
pub mod player_name;
pub mod round;
