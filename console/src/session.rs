//! # Interactive Session
//!
//! The login gate and the menu loop, driven line by line from any
//! [`BufRead`] and printing to any [`Write`]. The binary wires them to
//! stdin/stdout; tests wire them to in-memory buffers.
//!
//! The menu has a single state, awaiting a choice:
//!
//! ```text
//! "1" → dataset table  ─┐
//! "2" → all records    ─┤→ awaiting choice
//! other → error text   ─┘
//! "3" → quit
//! ```
//!
//! Closing the input ends the session the same way quitting does.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use carchain::report::{write_chain, write_dataset};
use carchain::{authenticate, Credentials, Dataset, Palette, SupplyChain};

const MENU: &str = "\
--------------- Menu --------------
|   1. Display the dataset        |
|   2. Display the blockchains    |
|   3. Quit                       |
-----------------------------------";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowDataset,
    ShowChain,
    Quit,
}

/// Why a line is not a menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuChoiceError {
    #[error("menu input is not a number: {0:?}")]
    NotANumber(String),
    #[error("no menu entry {0}")]
    OutOfRange(i64),
}

impl FromStr for MenuChoice {
    type Err = MenuChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let n: i64 = s
            .parse()
            .map_err(|_| MenuChoiceError::NotANumber(s.to_string()))?;
        match n {
            1 => Ok(MenuChoice::ShowDataset),
            2 => Ok(MenuChoice::ShowChain),
            3 => Ok(MenuChoice::Quit),
            other => Err(MenuChoiceError::OutOfRange(other)),
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked "Quit".
    Quit,
    /// The input stream closed.
    EndOfInput,
}

/// Console session over an input and an output stream.
pub struct Session<R, W> {
    input: R,
    output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, palette: Palette) -> Self {
        Self {
            input,
            output,
            palette,
        }
    }

    /// Prompt for credentials until they match `valid`.
    ///
    /// Returns the accepted username, or `None` if the input closed first.
    pub fn authenticate(&mut self, valid: &Credentials) -> io::Result<Option<String>> {
        loop {
            writeln!(self.output, "=== User Authentication ===")?;
            let Some(username) = self.prompt("Enter username: ")? else {
                return Ok(None);
            };
            let Some(password) = self.prompt("Enter password: ")? else {
                return Ok(None);
            };
            writeln!(self.output)?;

            if authenticate(&username, &password, valid) {
                tracing::info!(%username, "authentication succeeded");
                writeln!(self.output, "Authentication successful. Welcome, {username}!")?;
                writeln!(self.output)?;
                return Ok(Some(username));
            }

            tracing::warn!(%username, "authentication failed");
            writeln!(
                self.output,
                "Authentication failed. Invalid username or password."
            )?;
            writeln!(self.output)?;
        }
    }

    /// Run the menu until the user quits or the input closes.
    pub fn run_menu(&mut self, dataset: &Dataset, chain: &SupplyChain) -> io::Result<SessionEnd> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Enter the number: ")? else {
                return Ok(SessionEnd::EndOfInput);
            };

            match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    tracing::debug!(?choice, "menu choice");
                    match choice {
                        MenuChoice::ShowDataset => {
                            write_dataset(&mut self.output, dataset, self.palette)?
                        }
                        MenuChoice::ShowChain => write_chain(&mut self.output, chain, self.palette)?,
                        MenuChoice::Quit => return Ok(SessionEnd::Quit),
                    }
                }
                Err(err) => {
                    tracing::debug!(%err, "rejected menu input");
                    writeln!(self.output, "Please enter the correct number!")?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::warn!("input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
