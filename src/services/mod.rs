pub mod game_session;
