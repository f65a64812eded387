use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::dice::RollOutcome;

pub const DEFAULT_WIDTH: usize = 80;

const BORDER: &str = "*********************************";

/// Left-pads `text` so it sits in the middle of a `width`-cell line.
///
/// Width is measured in terminal cells. Text wider than the line is returned
/// unchanged; it is never truncated.
pub fn center_text(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width()) / 2;
    format!("{}{text}", " ".repeat(padding))
}

/// Centered line-oriented output for the game.
#[derive(Debug)]
pub struct Screen<W> {
    out: W,
    width: usize,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self { out, width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}", center_text(text, self.width))
    }

    pub fn blank(&mut self) -> std::io::Result<()> {
        writeln!(self.out)
    }

    pub fn header(&mut self) -> std::io::Result<()> {
        self.blank()?;
        self.blank()?;
        self.line(BORDER)?;
        self.line("*       DICE ROLLER GAME       *")?;
        self.line(BORDER)?;
        self.blank()
    }

    pub fn footer(&mut self, total_rolls: u64) -> std::io::Result<()> {
        self.blank()?;
        self.line(BORDER)?;
        self.line(&format!("*   You made {total_rolls} rolls!      *"))?;
        self.line("*                               *")?;
        self.line("*   Thank you for playing!     *")?;
        self.line(BORDER)?;
        self.blank()
    }

    pub fn menu(&mut self) -> std::io::Result<()> {
        self.line("1. Roll Dice")?;
        self.line("2. Change Dice Count")?;
        self.line("3. Exit")?;
        self.blank()
    }

    /// Shows the prompt and leaves the cursor after a centered `> ` marker.
    pub fn prompt(&mut self, prompt: &str) -> std::io::Result<()> {
        self.line(prompt)?;
        write!(self.out, "{}", center_text("> ", self.width))?;
        self.out.flush()
    }

    pub fn roll(&mut self, outcome: &RollOutcome) -> std::io::Result<()> {
        self.line(&format!("=== Roll #{} ===", outcome.roll_number))?;
        self.blank()?;
        let mut results = String::new();
        // writing into a String cannot fail
        outcome.pretty_print(&mut results).ok();
        self.line(&results)?;
        self.blank()
    }

    pub fn notice(&mut self, message: impl std::fmt::Display) -> std::io::Result<()> {
        self.line(&format!("! {message}"))?;
        self.blank()
    }
}
