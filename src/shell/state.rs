//! src/shell/state.rs
//!
//! Shell state (no terminal, no colors).
//!
//! Role: hold the consecutive-attempt counter and turn one input line into a
//! `Turn` (what to show). Rendering lives in view.rs, I/O in shell.rs.
//!
//! Contracts:
//! - commands are matched after trim + lowercase (`exit`, `help`)
//! - empty lines and failed evaluations are attempts
//! - only a failed evaluation can ask for the help hint
//! - a success or `help` resets the counter
//! - reaching `help_after` attempts asks for the help hint and resets

use log::debug;

use crate::rational::evaluate;

/// Default number of failed attempts before the help is shown again.
pub const HELP_AFTER_DEFAULT: usize = 5;

pub const EXIT_COMMAND: &str = "exit";
pub const HELP_COMMAND: &str = "help";

/// Shell configuration (command line / environment).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    /// Consecutive failed attempts before the help is shown. At least 1.
    pub help_after: usize,
    /// Colored output.
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            help_after: HELP_AFTER_DEFAULT,
            color: true,
        }
    }
}

/// What a line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Exit,
    Help,
    Blank,
    Value(String),
    Error(String),
}

/// One handled line: the reply, plus whether the help hint must follow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub reply: Reply,
    pub hint_help: bool,
}

#[derive(Clone, Debug)]
pub struct ShellState {
    attempts: usize,
    help_after: usize,
}

impl ShellState {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            attempts: 0,
            help_after: config.help_after.max(1),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Handles one input line (without its newline).
    pub fn handle_line(&mut self, line: &str) -> Turn {
        let command = line.trim().to_lowercase();

        if command.is_empty() {
            self.attempts += 1;
            return Turn {
                reply: Reply::Blank,
                hint_help: false,
            };
        }
        if command == EXIT_COMMAND {
            return Turn {
                reply: Reply::Exit,
                hint_help: false,
            };
        }
        if command == HELP_COMMAND {
            self.attempts = 0;
            return Turn {
                reply: Reply::Help,
                hint_help: false,
            };
        }

        match evaluate(line) {
            Ok(v) => {
                self.attempts = 0;
                Turn {
                    reply: Reply::Value(v.to_mixed_text()),
                    hint_help: false,
                }
            }
            Err(e) => {
                debug!("line {line:?} failed: {e:?}");
                self.failed(e.to_string())
            }
        }
    }

    fn failed(&mut self, message: String) -> Turn {
        self.attempts += 1;
        let hint_help = self.attempts >= self.help_after;
        if hint_help {
            self.attempts = 0;
        }
        Turn {
            reply: Reply::Error(message),
            hint_help,
        }
    }
}
