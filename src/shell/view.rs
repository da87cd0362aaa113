// src/shell/view.rs
//
// View (terminal text + colors)
// -----------------------------
// - Errors in red, help in green, remarks in yellow, hint banner in magenta
// - Returns colored lines; printing is left to shell.rs
//
// Note: `colored` honours NO_COLOR / CLICOLOR; `--no-color` forces it off.

use colored::{ColoredString, Colorize};

use super::state::{Reply, Turn, EXIT_COMMAND, HELP_COMMAND};

pub const PROMPT: &str = "? ";

pub fn welcome_lines() -> Vec<ColoredString> {
    vec![
        "Welcome to the Rational Number Shell.".normal(),
        format!("To exit the application, enter {EXIT_COMMAND}").normal(),
        format!("To display instructions, enter {HELP_COMMAND}").normal(),
    ]
}

const HELP_BODY: &[&str] = &[
    "This application solves arithmetic expressions between two fractions.",
    "Supported operators are: + - * /. They must be surrounded by at least one space.",
    "Supported fractions format:",
    "- Whole Numbers (e.g., 0, 1, -0, -10, 0005)",
    "- Improper Fractions (e.g., 7/5, -11/7)",
    "- Proper Fractions (e.g., 1/2, -2/3)",
    "- Whole Number plus Proper or Improper Fraction (e.g., 0_0/1, -0_5/3, 1_7/5)",
    "Examples of invalid formats:",
    "- Underscore without a whole number preceding it (e.g., _1/3)",
    "- Underscore without a fraction number following it (e.g., 3_)",
    "- Missing either numerator or denominator of a fraction (e.g., /3, 2/, 5_2/)",
    "- Spaces (e.g., 3_ 2/3, 3 _2/3, 10 /4)",
    "- Minus sign anywhere except at the start of the string (e.g., 2/-3, 3_-1/3)",
];

const HELP_REMARKS: &[&str] = &[
    "Remarks:",
    "0_0/3 and 0_1/3 are valid representations of fractions.",
    "To avoid ambiguity, the minus sign of a negative number must always be at the beginning of the fraction.",
    "A whole number with an improper fraction is valid: 3_4/3 is 3 + 4/3.",
    "Numbers in a fraction are limited to 32-bit integers; results are not.",
];

pub fn help_lines() -> Vec<ColoredString> {
    HELP_BODY
        .iter()
        .map(|l| l.green())
        .chain(HELP_REMARKS.iter().map(|l| l.yellow()))
        .collect()
}

/// Lines to print for one handled input line.
pub fn render(turn: &Turn) -> Vec<ColoredString> {
    let mut out = match &turn.reply {
        Reply::Exit | Reply::Blank => Vec::new(),
        Reply::Help => help_lines(),
        Reply::Value(v) => vec![v.normal()],
        Reply::Error(msg) => vec![msg.red()],
    };

    if turn.hint_help {
        out.push("This information might be helpful:".magenta());
        out.extend(help_lines());
    }

    out
}
