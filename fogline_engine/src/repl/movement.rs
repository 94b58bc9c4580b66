//! `repl::movement` module
//!
//! Contains repl loop handlers for numbered choices and going back.

use anyhow::{Result, anyhow};
use log::info;
use rand::Rng;

use crate::resolve::CodeEntry;
use crate::scene::{Scene, SceneAction};
use crate::{GameState, View, ViewItem, World, apply_choice, go_back, restart};

/// Resolve the choice the player picked by its displayed number.
///
/// # Errors
/// - if the scene points at a choice the current location no longer has
/// - on lookup or input failures while resolving the choice
pub fn choose_handler<R: Rng>(
    world: &mut World,
    state: &mut GameState,
    view: &mut View,
    scene: &Scene,
    number: usize,
    rng: &mut R,
    codes: &mut dyn CodeEntry,
) -> Result<()> {
    let Some(entry) = scene.choice_number(number) else {
        info!("choice number {number} out of range at '{}'", state.current);
        view.push(ViewItem::Error(format!("There's no choice {number} here.")));
        return Ok(());
    };
    match entry.action {
        SceneAction::Choice(idx) => {
            let choice = world
                .location(&state.current)?
                .choices
                .get(idx)
                .cloned()
                .ok_or_else(|| anyhow!("choice {idx} missing at '{}'", state.current))?;
            apply_choice(world, state, view, &choice, rng, codes)?;
        },
        SceneAction::Back => go_back(state, view),
        SceneAction::Restart => {
            restart(world, state, view);
        },
    }
    Ok(())
}

/// Go back to the previous location when the scene offers it.
pub fn back_handler(scene: &Scene, state: &mut GameState, view: &mut View) {
    if scene.can_go_back() {
        go_back(state, view);
    } else {
        info!("back refused at '{}'", state.current);
        view.push(ViewItem::ActionFailure("You can't go back from here.".to_string()));
    }
}
