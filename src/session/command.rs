//! Interactive commands, independent of any particular front end

use std::fmt;
use std::str::FromStr;

/// Message shown for the slot-locking form `r <day> <slot>`.
pub const SLOT_LOCK_UNSUPPORTED: &str = "Regenerating a single slot is not supported; use 'r' to regenerate the week";

/// One user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Draw a new tag schedule.
    Generate,
    /// Redraw the current stage (tag schedule, or tasks once distributed).
    Regenerate,
    /// One step easier.
    Relax,
    /// One step harder.
    Intensify,
    /// Move on to task distribution, or export once there.
    Continue,
    Help,
    Exit,
    /// Anything unrecognized, with the reason.
    Invalid(String),
}

impl Command {
    /// Parse a command line; never fails, unknown input becomes `Invalid`.
    pub fn parse(input: &str) -> Self {
        let mut words = input.split_whitespace();
        let Some(head) = words.next() else {
            return Command::Invalid("empty command".to_string());
        };
        let head = head.to_lowercase();
        let has_args = words.next().is_some();

        match head.as_str() {
            "r" | "regenerate" if has_args => Command::Invalid(SLOT_LOCK_UNSUPPORTED.to_string()),
            _ if has_args => Command::Invalid(format!("Unexpected arguments: {}", input.trim())),
            "g" | "generate" => Command::Generate,
            "r" | "regenerate" => Command::Regenerate,
            "d" | "dec" | "relax" => Command::Relax,
            "i" | "inc" | "intensify" => Command::Intensify,
            "c" | "continue" | "export" => Command::Continue,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Exit,
            _ => Command::Invalid(format!("Invalid input: {}", input.trim())),
        }
    }
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Generate => write!(f, "generate"),
            Command::Regenerate => write!(f, "regenerate"),
            Command::Relax => write!(f, "relax"),
            Command::Intensify => write!(f, "intensify"),
            Command::Continue => write!(f, "continue"),
            Command::Help => write!(f, "help"),
            Command::Exit => write!(f, "exit"),
            Command::Invalid(reason) => write!(f, "invalid ({})", reason),
        }
    }
}

/// Help text listing every command.
pub fn help_text() -> &'static str {
    "Enter your option:
  'i' - to increase week difficulty;
  'd' - to decrease week difficulty;
  'r' - to regenerate week;
  'g' - to generate a new tag schedule;
  'c' - to continue;
  'h' - to show this help;
  'q' - to exit;"
}
