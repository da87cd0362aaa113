// src/shell.rs
//
// Rational Number Shell — module root
// -----------------------------------
// Role:
// - Declare the sub-modules (state.rs + view.rs)
// - Re-export ShellConfig / ShellState
// - Drive the line editor (interactive) or a single expression (one-shot)
//
// Important:
// - No evaluation logic here: state.rs decides, view.rs renders.

pub mod state;
pub mod view;

pub use state::{Reply, ShellConfig, ShellState, Turn};

use colored::ColoredString;
use log::{debug, info};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::rational::evaluate_to_text;

fn print_lines(lines: &[ColoredString]) {
    for l in lines {
        println!("{l}");
    }
}

/// Blank lines stay out of the editor history.
fn worth_remembering(line: &str) -> bool {
    !line.trim().is_empty()
}

/// Interactive loop: `? ` prompt until `exit`, Ctrl-D or an editor failure.
/// Ctrl-C drops the current line only.
pub fn run_interactive(config: &ShellConfig) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut state = ShellState::new(config);

    print_lines(&view::welcome_lines());

    loop {
        let line = match rl.readline(view::PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        if worth_remembering(&line) {
            if let Err(e) = rl.add_history_entry(line.as_str()) {
                debug!("history entry not recorded: {e}");
            }
        }

        let turn = state.handle_line(&line);
        print_lines(&view::render(&turn));

        if turn.reply == Reply::Exit {
            break;
        }
    }

    info!("shell closed");
    Ok(())
}

/// One-shot mode: prints the result (stdout) or the error (stderr).
/// Returns whether the expression evaluated.
pub fn run_once(expression: &str) -> bool {
    match evaluate_to_text(expression) {
        Ok(text) => {
            println!("{text}");
            true
        }
        Err(e) => {
            let turn = Turn {
                reply: Reply::Error(e.to_string()),
                hint_help: false,
            };
            for l in view::render(&turn) {
                eprintln!("{l}");
            }
            false
        }
    }
}
