//! `dev_command.rs`
//!
//! Implements commands only to be used in developer mode.

use log::warn;

use crate::{DEV_MODE, command::Command};

/// Parse developer-only commands if '`DEV_MODE`' is true.
///
/// Returns `None` for anything that isn't a recognized `:`-prefixed command, and
/// for every developer command when `DEV_MODE` is off.
pub fn parse_dev_command(input: &str) -> Option<Command> {
    let rest = input.strip_prefix(':')?;
    let words: Vec<&str> = rest.split_whitespace().collect();
    let command = match words.as_slice() {
        ["teleport" | "port", location_id] => Command::Teleport((*location_id).into()),
        ["spawn" | "item", item_id] => Command::SpawnItem((*item_id).into()),
        _ => return None,
    };
    if DEV_MODE {
        Some(command)
    } else {
        warn!("player attempted to use developer command '{command:?}' with DEV_MODE = false");
        None
    }
}
