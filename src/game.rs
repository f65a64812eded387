use std::io::{BufRead, Write};

use log::{debug, info};

use crate::{
    dice::DiceSet,
    display::{DEFAULT_WIDTH, Screen},
    error::{DiceError, Result},
    roller::Roller,
};

const CHOICE_PROMPT: &str = "Enter your choice (1-3):";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub starting_dice: i64,
    pub max_dice: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            starting_dice: 1,
            max_dice: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Roll,
    ChangeDiceCount,
    Exit,
    Invalid,
}

impl From<&str> for MenuChoice {
    fn from(value: &str) -> Self {
        match value {
            "1" => MenuChoice::Roll,
            "2" => MenuChoice::ChangeDiceCount,
            "3" | "exit" | "quit" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingChoice,
    AwaitingQuantity,
    Terminal,
}

/// Parses a dice quantity, accepting only integers in `1..=max`.
pub fn parse_quantity(input: &str, max: i64) -> Result<i64> {
    let quantity = input
        .trim()
        .parse::<i64>()
        .map_err(|_| DiceError::InputParse)?;
    if !(1..=max).contains(&quantity) {
        return Err(DiceError::OutOfRange { min: 1, max });
    }
    Ok(quantity)
}

#[derive(Debug)]
pub struct Game<R, W> {
    config: GameConfig,
    dice: DiceSet,
    roller: Roller,
    input: R,
    screen: Screen<W>,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(config: GameConfig, roller: Roller, input: R, output: W) -> Self {
        Self {
            config,
            dice: DiceSet::new(),
            roller,
            input,
            screen: Screen::new(output, config.width),
        }
    }

    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    pub fn into_output(self) -> W {
        self.screen.into_inner()
    }

    /// Prints the banner and prepares the starting dice.
    ///
    /// A configuration failure is reported on screen and returned; the
    /// session cannot continue without dice.
    pub fn start(&mut self) -> anyhow::Result<()> {
        self.screen.header()?;
        if let Err(err) = self.dice.configure(self.config.starting_dice) {
            self.screen.line(&format!("ERROR: {err}"))?;
            return Err(err.into());
        }
        info!("Session started with {} dice", self.dice.dice_count());
        Ok(())
    }

    /// Runs the menu loop until the player exits or input ends, then prints
    /// the footer. Returns the total number of rolls made.
    pub fn run(&mut self) -> anyhow::Result<u64> {
        let mut state = State::AwaitingChoice;
        while state != State::Terminal {
            state = match state {
                State::AwaitingChoice => self.await_choice()?,
                State::AwaitingQuantity => self.await_quantity()?,
                State::Terminal => State::Terminal,
            };
        }

        let total_rolls = self.dice.roll_count();
        self.screen.footer(total_rolls)?;
        info!("Session ended after {total_rolls} rolls");
        Ok(total_rolls)
    }

    fn await_choice(&mut self) -> anyhow::Result<State> {
        self.screen.menu()?;
        self.screen.prompt(CHOICE_PROMPT)?;
        let Some(choice) = self.read_line()? else {
            debug!("Input closed at menu");
            return Ok(State::Terminal);
        };

        match MenuChoice::from(choice.as_str()) {
            MenuChoice::Roll => {
                let outcome = self.dice.roll_all(&mut self.roller);
                self.screen.roll(&outcome)?;
                Ok(State::AwaitingChoice)
            }
            MenuChoice::ChangeDiceCount => Ok(State::AwaitingQuantity),
            MenuChoice::Exit => Ok(State::Terminal),
            MenuChoice::Invalid => {
                debug!("Rejected menu choice `{choice}`");
                self.screen.notice("Invalid choice. Please try again.")?;
                Ok(State::AwaitingChoice)
            }
        }
    }

    fn await_quantity(&mut self) -> anyhow::Result<State> {
        let prompt = format!(
            "How many dice would you like to roll (1-{})?",
            self.config.max_dice
        );
        loop {
            self.screen.prompt(&prompt)?;
            let Some(input) = self.read_line()? else {
                debug!("Input closed while choosing dice count");
                return Ok(State::Terminal);
            };

            match parse_quantity(&input, self.config.max_dice) {
                Ok(quantity) => {
                    self.dice.configure(quantity)?;
                    info!("Dice count changed to {quantity}");
                    return Ok(State::AwaitingChoice);
                }
                Err(err) => {
                    debug!("Rejected dice count `{input}`: {err}");
                    self.screen.notice(err)?;
                }
            }
        }
    }

    /// Reads one line without its line terminator, or `None` at end of input.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn game(input: &str) -> Game<Cursor<Vec<u8>>, Vec<u8>> {
        Game::new(
            GameConfig::default(),
            Roller::test_rng(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    #[test]
    fn test_menu_choice() {
        assert_eq!(MenuChoice::from("1"), MenuChoice::Roll);
        assert_eq!(MenuChoice::from("2"), MenuChoice::ChangeDiceCount);
        for exit in ["3", "exit", "quit"] {
            assert_eq!(MenuChoice::from(exit), MenuChoice::Exit);
        }
        for invalid in ["7", "", "abc", "QUIT", "Exit", " 1", "1 "] {
            assert_eq!(MenuChoice::from(invalid), MenuChoice::Invalid);
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3", 10), Ok(3));
        assert_eq!(parse_quantity(" 10 ", 10), Ok(10));
        assert_eq!(parse_quantity("1", 10), Ok(1));
        assert_eq!(parse_quantity("abc", 10), Err(DiceError::InputParse));
        assert_eq!(parse_quantity("", 10), Err(DiceError::InputParse));
        assert_eq!(parse_quantity("2.5", 10), Err(DiceError::InputParse));
        assert_eq!(
            parse_quantity("99999999999999999999", 10),
            Err(DiceError::InputParse)
        );
        for out_of_range in ["0", "11", "15", "-5"] {
            assert_eq!(
                parse_quantity(out_of_range, 10),
                Err(DiceError::OutOfRange { min: 1, max: 10 })
            );
        }
    }

    #[test]
    fn test_start_prepares_default_dice() {
        let mut game = game("");
        game.start().unwrap();
        assert_eq!(game.dice().dice_count(), 1);
        assert_eq!(game.dice().roll_count(), 0);
        let out = String::from_utf8(game.into_output()).unwrap();
        assert!(out.contains("*       DICE ROLLER GAME       *"));
    }

    #[test]
    fn test_start_fails_without_dice() {
        let config = GameConfig {
            starting_dice: 0,
            ..GameConfig::default()
        };
        let mut game = Game::new(
            config,
            Roller::test_rng(),
            Cursor::new(Vec::new()),
            Vec::new(),
        );
        assert!(game.start().is_err());
        let out = String::from_utf8(game.into_output()).unwrap();
        assert!(out.contains("ERROR: You need at least one dice"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut game = game("1\n");
        game.start().unwrap();
        assert_eq!(game.run().unwrap(), 1);
        let out = String::from_utf8(game.into_output()).unwrap();
        assert!(out.contains("You made 1 rolls!"));
    }

    #[test]
    fn test_end_of_input_while_choosing_count() {
        let mut game = game("2\nabc\n");
        game.start().unwrap();
        assert_eq!(game.run().unwrap(), 0);
        assert_eq!(game.dice().dice_count(), 1);
    }

    #[test]
    fn test_crlf_input() {
        let mut game = game("2\r\n4\r\n1\r\nexit\r\n");
        game.start().unwrap();
        assert_eq!(game.run().unwrap(), 1);
        assert_eq!(game.dice().dice_count(), 4);
    }
}
