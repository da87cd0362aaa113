// src/main.rs
//
// Rational Number Shell — entry point
// -----------------------------------
// - interactive : line editor, `exit` / `help`
// - one-shot    : `-e "1/2 + 1/3"`, exit status 1 on failure
// - logging     : RUST_LOG=debug (env_logger, stderr)

use clap::Parser;

use rational_shell::shell::state::HELP_AFTER_DEFAULT;
use rational_shell::shell::{self, ShellConfig};

#[derive(Parser, Debug)]
#[command(name = "rational-shell")]
#[command(about = "Solves arithmetic expressions between two fractions")]
#[command(version)]
struct Cli {
    /// Evaluate one expression and exit
    #[arg(short, long)]
    expression: Option<String>,

    /// Consecutive failed attempts before the help is shown again
    #[arg(
        long,
        env = "RATIONAL_SHELL_HELP_AFTER",
        default_value_t = HELP_AFTER_DEFAULT as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    help_after: u32,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn config(&self) -> ShellConfig {
        ShellConfig {
            help_after: self.help_after as usize,
            color: !self.no_color,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config();
    log::debug!("config: {config:?}");

    if !config.color {
        colored::control::set_override(false);
    }

    if let Some(expr) = cli.expression.as_deref() {
        if !shell::run_once(expr) {
            std::process::exit(1);
        }
        return Ok(());
    }

    shell::run_interactive(&config)
}
