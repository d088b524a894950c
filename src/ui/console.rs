//! Line-based console I/O
//!
//! Wraps any `BufRead` + `Write` pair so the game can be played on stdin /
//! stdout or driven by scripted input in tests.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::error::{GameError, GameResult};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line
    pub fn say(&mut self, line: impl Display) -> GameResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print an empty line
    pub fn blank(&mut self) -> GameResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Show a prompt on the same line and read the reply without its line
    /// ending. Fails with `InputClosed` at end of input.
    pub fn prompt(&mut self, message: &str) -> GameResult<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Read a 1-based menu choice in `1..=count`
    ///
    /// Returns `None` for anything that is not a number in range.
    pub fn prompt_index(&mut self, message: &str, count: usize) -> GameResult<Option<usize>> {
        let reply = self.prompt(message)?;
        Ok(parse_menu_index(&reply, count))
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse a 1-based menu index, rejecting 0, out-of-range values and
/// non-numbers
pub fn parse_menu_index(reply: &str, count: usize) -> Option<usize> {
    match reply.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n),
        _ => None,
    }
}
