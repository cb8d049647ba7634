//! Interactive game loop.
//!
//! A [`GameSession`] reads player input line by line, drives one [`Round`]
//! and keeps the scoreboard and action log of its [`RecordStore`] up to date.
//! Input and output are plain `BufRead`/`Write` handles so the whole
//! conversation can be scripted.

use crate::data::answer_pool::AnswerPool;
use crate::game::guess::{parse_guess, GuessInput, GuessInputError, QUIT};
use crate::game::player_name::check_name;
use crate::game::round::{Round, RoundStatus};
use crate::recording::{Action, ActionLog, RecordStore, Scoreboard};
use crate::utils::gallows::gallows;
use crate::Result;
use rand::Rng;
use std::io::{BufRead, Write};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
    Quit,
}

/// One line read at a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PromptLine {
    Text(String),
    /// Bytes that are not valid UTF-8.
    Unreadable,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameRole {
    Player,
    Stickman,
}

impl NameRole {
    fn prompt(self) -> &'static str {
        match self {
            NameRole::Player => "Your Name >> ",
            NameRole::Stickman => "Stickman's Name >> ",
        }
    }
}

pub struct GameSession<S, R, I, O> {
    store: S,
    answers: AnswerPool,
    rng: R,
    input: I,
    output: O,
}

impl<S, R, I, O> GameSession<S, R, I, O>
where
    S: RecordStore,
    R: Rng,
    I: BufRead,
    O: Write,
{
    pub fn new(store: S, answers: AnswerPool, rng: R, input: I, output: O) -> Self {
        Self {
            store,
            answers,
            rng,
            input,
            output,
        }
    }

    /// Play one game from the welcome banner to the goodbye line.
    pub fn run(&mut self) -> Result<GameOutcome> {
        writeln!(
            self.output,
            "WELCOME TO HANGMAN!!!\nTo quit the game, simply type '{}'",
            QUIT
        )?;

        let mut scoreboard = self.store.load_scoreboard()?;
        let mut actions = self.store.load_actions()?;

        let player = self.prompt_name(NameRole::Player)?;
        let outcome = match &player {
            Some(player) => self.play(player, &mut scoreboard, &mut actions)?,
            None => GameOutcome::Quit,
        };

        self.quit_game(player.as_deref(), &scoreboard, &mut actions)?;
        log::info!("Session ended: {:?}", outcome);
        Ok(outcome)
    }

    pub fn into_output(self) -> O {
        self.output
    }

    fn play(
        &mut self,
        player: &str,
        scoreboard: &mut Scoreboard,
        actions: &mut ActionLog,
    ) -> Result<GameOutcome> {
        let Some(stickman) = self.prompt_name(NameRole::Stickman)? else {
            return Ok(GameOutcome::Quit);
        };

        let answer = self.answers.choose(&mut self.rng).clone();
        log::info!("{} starts a game ({} letters)", player, answer.len());
        log::debug!("answer: {}", answer);
        actions.append(player, &Action::StartGame);

        let mut round = Round::new(answer);
        writeln!(self.output, "{}", round.mask().to_display_string())?;

        let outcome = loop {
            match round.status() {
                RoundStatus::InProgress => {}
                RoundStatus::Won => {
                    writeln!(
                        self.output,
                        "WELL DONE {}!!! {} can live for another day!",
                        player, stickman
                    )?;
                    break GameOutcome::Won;
                }
                RoundStatus::Lost => {
                    writeln!(
                        self.output,
                        "Uh oh!! It looks like {} is dead! Sorry, {}, maybe you can save {} next time!!",
                        stickman, player, stickman
                    )?;
                    writeln!(self.output, "The answer was: {}", round.answer().as_str().to_uppercase())?;
                    break GameOutcome::Lost;
                }
            }

            let letter = match self.prompt_guess(player, actions)? {
                GuessInput::Quit => return Ok(GameOutcome::Quit),
                GuessInput::Letter(letter) => letter,
            };

            if round.has_guessed(letter) {
                self.report_repeat(letter, round.guesses())?;
                continue;
            }

            let result = round.submit_guess(letter)?;
            if result.correct {
                writeln!(
                    self.output,
                    "{} is in the word(s)! Good job, {}!",
                    result.letter, player
                )?;
            } else {
                writeln!(
                    self.output,
                    "Poor {}!!! {} is not in the word(s)! Sorry, {}",
                    stickman, result.letter, player
                )?;
                writeln!(self.output, "{}", gallows(result.lives))?;
            }
            writeln!(self.output, "{}", round.mask().to_display_string())?;
        };
        scoreboard.record(player, outcome == GameOutcome::Won);

        Ok(outcome)
    }

    /// `None` when the player typed `quit` or the input ended.
    fn prompt_name(&mut self, role: NameRole) -> Result<Option<String>> {
        loop {
            let line = match self.read_line(role.prompt())? {
                PromptLine::Text(line) => line,
                PromptLine::Unreadable => {
                    writeln!(self.output, "Please type a valid name (e.g. Joe Blogs or Joe)")?;
                    continue;
                }
                PromptLine::Closed => return Ok(None),
            };
            if line == QUIT {
                return Ok(None);
            }

            let check = check_name(&line);
            if check.is_valid() {
                return Ok(Some(line));
            }
            if !check.well_formed {
                writeln!(self.output, "Please type a valid name (e.g. Joe Blogs or Joe)")?;
            }
            if !check.within_length {
                writeln!(
                    self.output,
                    "The name you have given is too long. Please write a shorter name!"
                )?;
            }
        }
    }

    /// Re-prompt until the line is a letter or `quit`. End of input counts as `quit`.
    fn prompt_guess(&mut self, player: &str, actions: &mut ActionLog) -> Result<GuessInput> {
        loop {
            let line = match self.read_line(">>>")? {
                PromptLine::Text(line) => line,
                PromptLine::Unreadable => {
                    writeln!(self.output, "{}", GuessInputError::NotALetter)?;
                    continue;
                }
                PromptLine::Closed => {
                    actions.append(player, &Action::Input(QUIT.to_string()));
                    return Ok(GuessInput::Quit);
                }
            };

            match parse_guess(&line) {
                Ok(input) => {
                    let entry = match input {
                        GuessInput::Letter(letter) => letter.to_string(),
                        GuessInput::Quit => QUIT.to_string(),
                    };
                    actions.append(player, &Action::Input(entry));
                    return Ok(input);
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn report_repeat(&mut self, letter: char, guesses: &[char]) -> Result<()> {
        let others: Vec<String> = guesses
            .iter()
            .filter(|g| **g != letter)
            .map(|g| g.to_string())
            .collect();

        if others.is_empty() {
            writeln!(
                self.output,
                "You have already guessed {}, please try another character.",
                letter
            )?;
        } else {
            writeln!(
                self.output,
                "You have already guessed {} (along with {}!), please try another character.",
                letter,
                others.join(", ")
            )?;
        }
        Ok(())
    }

    fn quit_game(
        &mut self,
        player: Option<&str>,
        scoreboard: &Scoreboard,
        actions: &mut ActionLog,
    ) -> Result<()> {
        actions.append(player.unwrap_or_default(), &Action::QuitGame);
        self.store.save_actions(actions)?;

        if !scoreboard.is_empty() {
            write!(self.output, "{}", scoreboard.render_leaderboard())?;
        }
        self.store.save_scoreboard(scoreboard)?;

        match player {
            Some(player) => writeln!(self.output, "Goodbye, {}!", player)?,
            None => writeln!(self.output, "Goodbye!")?,
        }
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<PromptLine> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(PromptLine::Closed);
        }
        match String::from_utf8(bytes) {
            Ok(line) => Ok(PromptLine::Text(line.trim_end_matches(['\r', '\n']).to_string())),
            Err(e) => {
                log::warn!("ignoring non UTF-8 input: {}", e);
                Ok(PromptLine::Unreadable)
            }
        }
    }
}
