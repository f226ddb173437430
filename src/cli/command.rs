//! Parsing of a single line of shell input

use thiserror::Error;

/// One parsed shell command. Indices are exactly as the user typed them (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    List,
    Toggle(i64),
    Delete(i64),
    Help,
    Exit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("Usage: add <title>")]
    MissingTitle,

    #[error("Usage: {0} <number>")]
    MissingIndex(&'static str),

    #[error("Invalid number: '{0}'")]
    InvalidIndex(String),

    #[error("Unknown command: '{0}'. Type 'help' for available commands.")]
    Unknown(String),
}

pub fn parse(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();
    let (keyword, rest) = match input.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (input, ""),
    };

    if keyword.is_empty() {
        return Err(ParseError::Empty);
    }

    match keyword.to_lowercase().as_str() {
        "add" | "a" | "new" => {
            if rest.is_empty() {
                Err(ParseError::MissingTitle)
            } else {
                Ok(Command::Add(rest.to_string()))
            }
        }
        "list" | "ls" | "l" => Ok(Command::List),
        "toggle" | "done" | "t" => parse_index(rest, "toggle").map(Command::Toggle),
        "delete" | "del" | "rm" | "d" => parse_index(rest, "delete").map(Command::Delete),
        "help" | "h" | "?" => Ok(Command::Help),
        "exit" | "quit" | "q" => Ok(Command::Exit),
        _ => Err(ParseError::Unknown(keyword.to_string())),
    }
}

fn parse_index(arg: &str, usage: &'static str) -> Result<i64, ParseError> {
    let arg = arg.split_whitespace().next().ok_or(ParseError::MissingIndex(usage))?;
    arg.parse::<i64>()
        .map_err(|_| ParseError::InvalidIndex(arg.to_string()))
}

/// Map a user-facing 1-based position to the manager's 0-based index.
pub fn to_zero_based(position: i64) -> Option<usize> {
    if position < 1 {
        return None;
    }
    usize::try_from(position - 1).ok()
}
