//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities.

use anyhow::Result;
use log::info;

use crate::repl::ReplControl;
use crate::view::HelpCommand;
use crate::{GameState, View, ViewItem, World, WorldObject, project, restart};

/// Queue the current scene for display.
///
/// # Errors
/// - if the current location can't be projected
pub fn look_handler(world: &World, state: &GameState, view: &mut View) -> Result<()> {
    view.push(ViewItem::Scene(project(world, state)?));
    Ok(())
}

/// Restart from the beginning after a special ending.
pub fn restart_handler(world: &mut World, state: &mut GameState, view: &mut View) {
    if restart(world, state, view) {
        view.push(ViewItem::EngineMessage(format!("{} begins again.", world.title)));
    }
}

/// Quit the game.
///
/// # Errors
/// - if the player's current location is missing from the world
pub fn quit_handler(world: &World, state: &GameState, view: &mut View, steps: usize) -> Result<ReplControl> {
    let location = world.location(&state.current)?;
    info!("player quit at '{}' after {steps} steps", state.current);
    info!("ending inventory:");
    state
        .inventory
        .iter()
        .filter_map(|id| world.items.get(id))
        .for_each(|item| info!("- {} ({})", item.name(), item.id()));

    view.push(ViewItem::QuitSummary {
        title: world.title.clone(),
        location: location.name().to_string(),
        items_found: state.taken.len(),
        max_items: world.items.len(),
        steps,
    });

    Ok(ReplControl::Quit)
}

/// Show available commands.
pub fn help_handler(view: &mut View) {
    let commands = [
        ("<n> | choose <n>", "pick numbered choice n"),
        ("use <item> | u<n>", "use a held item by name or by its number"),
        ("back", "return to where you came from"),
        ("look", "show the scene again"),
        ("inventory", "list what you carry"),
        ("restart | try again", "start over after a lucky ending"),
        ("help", "show this list"),
        ("quit", "leave the game"),
        (":port <location>", "jump to any location"),
        (":spawn <item>", "put any item in your inventory"),
    ]
    .into_iter()
    .map(|(command, description)| HelpCommand {
        command: command.to_string(),
        description: description.to_string(),
    })
    .collect();

    view.push(ViewItem::Help {
        basic_text: "Type the number of a choice to act. Everything else is a short word.".to_string(),
        commands,
    });
}
