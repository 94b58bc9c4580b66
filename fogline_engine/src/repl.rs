//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. Every pass projects the current
//! [`Scene`](crate::Scene), reads one command, hands it to a handler in one of
//! the submodules and then shows the updated scene.

pub mod dev;
mod input;
pub mod inventory;
pub mod movement;
pub mod system;

pub use dev::*;
pub use inventory::*;
pub use movement::*;
pub use system::*;

use crate::command::{Command, parse_command};
use crate::style::GameStyle;
use crate::{GameState, View, ViewItem, World, project};

use anyhow::Result;
use colored::Colorize;
use log::info;
use rand::Rng;

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main read–eval–print loop until the user quits.
///
/// The scene is projected before each prompt, and that same scene is used to
/// map the numbers the player types onto choices.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing location for the player.
pub fn run_repl<R: Rng>(world: &mut World, rng: &mut R) -> Result<()> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;
    let mut view = View::new();
    let mut state = GameState::new(world);
    let mut input_manager = InputManager::new();
    let mut steps = 0;

    look_handler(world, &state, &mut view)?;
    view.flush();

    loop {
        let scene = project(world, &state)?;
        let prompt = format!("[{}]>> ", scene.title).prompt_style().to_string();

        let input_event = if let Ok(event) = input_manager.read_line(&prompt) {
            event
        } else {
            view.push(ViewItem::Error("Failed to read input. Try again.".red().to_string()));
            view.flush();
            continue;
        };

        let input = match input_event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
        };

        let command = parse_command(&input);
        info!("command: {command:?}");
        let mut redraw = true;
        match &command {
            Choose(number) => {
                steps += 1;
                choose_handler(world, &mut state, &mut view, &scene, *number, rng, &mut input_manager)?;
            },
            GoBack => {
                steps += 1;
                back_handler(&scene, &mut state, &mut view);
            },
            Look => {},
            Inventory => {
                inv_handler(world, &state, &mut view)?;
                redraw = false;
            },
            Use(thing) => use_handler(world, &state, &mut view, &scene, thing)?,
            Restart => restart_handler(world, &mut state, &mut view),
            Help => {
                help_handler(&mut view);
                redraw = false;
            },
            Quit => {
                if let ReplControl::Quit = quit_handler(world, &state, &mut view, steps)? {
                    view.flush();
                    break;
                }
            },
            Unknown => {
                view.push(ViewItem::Error(
                    "Didn't quite catch that? Type a choice number, or \"help\"."
                        .italic()
                        .to_string(),
                ));
                redraw = false;
            },
            // Commands below only parse when crate::DEV_MODE is enabled.
            SpawnItem(item_id) => dev_spawn_item_handler(world, &mut state, &mut view, item_id)?,
            Teleport(location_id) => dev_teleport_handler(world, &mut state, &mut view, location_id),
        }

        if redraw {
            look_handler(world, &state, &mut view)?;
        }
        view.flush();
    }
    Ok(())
}
