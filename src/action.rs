use thiserror::Error;

use crate::system::snapshot::SortMode;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Refresh,
    SetSort(SortMode),
    Kill(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Invalid format. Use: k <PID>")]
    InvalidKill,
    #[error("Unknown command: {0}")]
    Unknown(String),
}

/// Parses one submitted command line.
pub fn parse_command(input: &str) -> Result<Action, CommandError> {
    let input = input.trim();
    match input {
        "" => Ok(Action::Refresh),
        "q" => Ok(Action::Quit),
        "m" => Ok(Action::SetSort(SortMode::Memory)),
        "n" => Ok(Action::SetSort(SortMode::None)),
        _ => match input.strip_prefix('k') {
            Some(rest) => parse_pid(rest).map(Action::Kill),
            None => Err(CommandError::Unknown(input.to_string())),
        },
    }
}

fn parse_pid(rest: &str) -> Result<i32, CommandError> {
    // "k 42" is the documented form; "k42" is accepted too.
    rest.trim()
        .parse::<i32>()
        .map_err(|_| CommandError::InvalidKill)
}
