//! Command module
//!
//! Describes possible commands used during gameplay.
use crate::dev_command::parse_dev_command;

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select the numbered entry of the current choice list.
    Choose(usize),
    GoBack,
    Help,
    Inventory,
    Look,
    Quit,
    Restart,
    Unknown,
    /// Use a held item by name or by its `u<n>` number.
    Use(String),
    // developer commands
    SpawnItem(String),
    Teleport(String),
}

/// Parses an input string and returns a corresponding `Command` if recognized.
pub fn parse_command(input: &str) -> Command {
    let lowered = input.trim().to_lowercase();
    if let Some(command) = parse_dev_command(&lowered) {
        return command;
    }
    let words: Vec<&str> = lowered.split_whitespace().collect();
    match words.as_slice() {
        [number] if number.parse::<usize>().is_ok() => number.parse().map_or(Command::Unknown, Command::Choose),
        ["choose" | "choice" | "c" | "pick", number] => number.parse().map_or(Command::Unknown, Command::Choose),
        ["back" | "b"] | ["go", "back"] => Command::GoBack,
        ["look" | "l"] => Command::Look,
        ["inventory" | "inv" | "i"] => Command::Inventory,
        ["restart" | "r"] | ["try", "again"] => Command::Restart,
        ["help" | "?"] => Command::Help,
        ["quit" | "exit"] => Command::Quit,
        [single] if single.len() > 1 && single.starts_with('u') && single[1..].parse::<usize>().is_ok() => {
            Command::Use(single[1..].to_string())
        },
        ["use" | "u", rest @ ..] if !rest.is_empty() => Command::Use(rest.join(" ")),
        _ => Command::Unknown,
    }
}
