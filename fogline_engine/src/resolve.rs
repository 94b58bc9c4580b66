//! Choice resolution.
//!
//! Everything that changes the game goes through here: [`apply_choice`] for the
//! numbered choices a location offers, plus [`go_back`], [`use_item`] and
//! [`restart`]. Rejected actions push a failure message to the [`View`] and
//! leave the world and state exactly as they were.

use std::collections::VecDeque;

use anyhow::{Context, Result};
use log::{info, warn};
use rand::Rng;

use crate::location::{CustomEffect, Rewrite};
use crate::state::Ending;
use crate::{Choice, Effect, GameState, ItemHolder, View, ViewItem, World, WorldObject};

/// Source of the one line of free text the code door asks for.
pub trait CodeEntry {
    /// Prompt for a code. `Ok(None)` means the player backed out without entering one.
    ///
    /// # Errors
    /// - if the underlying input can't be read
    fn read_code(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Scripted entries, consumed front to back.
impl CodeEntry for VecDeque<String> {
    fn read_code(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.pop_front())
    }
}

/// Apply a choice from the current location.
///
/// # Errors
/// - if the choice names a location or item the world doesn't have
/// - if code entry fails to read input
pub fn apply_choice<R: Rng>(
    world: &mut World,
    state: &mut GameState,
    view: &mut View,
    choice: &Choice,
    rng: &mut R,
    codes: &mut dyn CodeEntry,
) -> Result<()> {
    if state.is_over() {
        view.push(ViewItem::ActionFailure("The story has ended.".to_string()));
        return Ok(());
    }
    if let Some(required) = &choice.requires_item
        && !state.contains_item(required)
    {
        let name = world.item(required)?.name();
        info!("choice \"{}\" rejected: missing '{required}'", choice.text);
        view.push(ViewItem::ActionFailure(format!("You need the {name} first.")));
        return Ok(());
    }

    info!("choice \"{}\" selected at '{}'", choice.text, state.current);
    match &choice.effect {
        Effect::Go { to, new_description } => {
            world.location(to)?;
            if let Some(text) = new_description {
                rewrite_current(world, state, text)?;
            }
            state.travel_to(to);
        },
        Effect::Describe { new_description } => rewrite_current(world, state, new_description)?,
        Effect::AddItem { item, new_description } => {
            if state.has_taken(item) {
                info!("'{item}' already taken; ignoring repeat take");
                view.push(ViewItem::ActionFailure("You already took that.".to_string()));
                return Ok(());
            }
            take_item(world, state, item)?;
            view.push(ViewItem::ActionSuccess(format!("Taken: {}.", world.item(item)?.name())));
            check_combinations(world, state, view)?;
            if let Some(text) = new_description {
                rewrite_current(world, state, text)?;
            }
        },
        Effect::RemoveItem { item } => {
            if state.contains_item(item) {
                state.remove_item(item);
                world.item_mut(item)?.set_location_nowhere();
                info!("'{item}' removed from inventory");
                check_combinations(world, state, view)?;
            }
        },
        Effect::RandomExit => random_exit(world, state, view, rng)?,
        Effect::InputCode {
            prompt,
            codes: accepted,
            success,
            failure,
        } => enter_code(world, state, view, codes, prompt, accepted, success, failure)?,
        Effect::Ending { text, special } => {
            info!("ending reached at '{}' (special = {special})", state.current);
            state.ending = Some(Ending {
                text: text.clone(),
                special: *special,
            });
        },
        Effect::Custom(custom) => custom_effect(world, state, view, custom)?,
    }
    Ok(())
}

/// Return to the previous location, if there is one.
pub fn go_back(state: &mut GameState, view: &mut View) {
    if state.is_over() {
        view.push(ViewItem::ActionFailure("There's no going back now.".to_string()));
        return;
    }
    if let Some(previous) = state.history.pop() {
        info!("player went back from '{}' to '{previous}'", state.current);
        state.current = previous;
    } else {
        view.push(ViewItem::ActionFailure("There's nowhere to go back to.".to_string()));
    }
}

/// Use a held item and report what happened.
///
/// # Errors
/// - if the item isn't in the world table
pub fn use_item(world: &mut World, state: &GameState, view: &mut View, item_id: &str) -> Result<()> {
    if !state.contains_item(item_id) {
        warn!("attempted to use '{item_id}' which is not in inventory");
        view.push(ViewItem::ActionFailure("You aren't carrying that.".to_string()));
        return Ok(());
    }
    let item = world.item_mut(item_id)?;
    let message = item.use_effect();
    view.push(ViewItem::ItemUsed {
        item_name: item.name.clone(),
        message,
    });
    Ok(())
}

/// Start over after a special ending: fresh state, authored descriptions.
///
/// Returns `false` (and changes nothing) if no special ending has been reached.
pub fn restart(world: &mut World, state: &mut GameState, view: &mut View) -> bool {
    if !state.ending.as_ref().is_some_and(|ending| ending.special) {
        view.push(ViewItem::ActionFailure("There's nothing to restart yet.".to_string()));
        return false;
    }
    world.reset();
    *state = GameState::new(world);
    info!("game restarted at '{}'", state.current);
    view.push(ViewItem::TransitionMessage("The fog lifts. You are back where it all began.".to_string()));
    true
}

/// Normalize a code for comparison: whitespace and hyphens are ignored.
pub fn normalize_code(code: &str) -> String {
    code.chars().filter(|c| !c.is_whitespace() && *c != '-').collect()
}

/// Merge any held item sets that form a known combination, until none apply.
///
/// # Errors
/// - if a combination names an item the world doesn't have
pub fn check_combinations(world: &mut World, state: &mut GameState, view: &mut View) -> Result<()> {
    loop {
        let Some(combo) = world
            .combinations
            .iter()
            .find(|combo| combo.consumes.iter().all(|id| state.contains_item(id)))
            .cloned()
        else {
            return Ok(());
        };
        for input in &combo.consumes {
            state.remove_item(input);
            world.item_mut(input)?.set_location_nowhere();
        }
        take_item(world, state, &combo.produces)?;
        info!("combined {:?} into '{}'", combo.consumes, combo.produces);
        view.push(ViewItem::TriggeredEvent(combo.message.clone()));
    }
}

fn take_item(world: &mut World, state: &mut GameState, item_id: &str) -> Result<()> {
    world.item_mut(item_id)?.set_location_inventory();
    state.add_item(item_id);
    info!("'{item_id}' added to inventory");
    Ok(())
}

fn rewrite_current(world: &mut World, state: &GameState, text: &str) -> Result<()> {
    apply_rewrite(
        world,
        &Rewrite {
            location: state.current.clone(),
            text: text.to_string(),
        },
    )
}

fn apply_rewrite(world: &mut World, rewrite: &Rewrite) -> Result<()> {
    let location = world.location_mut(&rewrite.location)?;
    location.description.clone_from(&rewrite.text);
    info!("description of '{}' rewritten", rewrite.location);
    Ok(())
}

fn random_exit<R: Rng>(world: &World, state: &mut GameState, view: &mut View, rng: &mut R) -> Result<()> {
    let exits = &world.location(&state.current)?.random_exits;
    if exits.is_empty() {
        view.push(ViewItem::ActionFailure("There's no way out here.".to_string()));
        return Ok(());
    }
    let destination = exits[rng.random_range(0..exits.len())].clone();
    world
        .location(&destination)
        .with_context(|| format!("random exit from '{}'", state.current))?;
    state.travel_to(&destination);
    view.push(ViewItem::TransitionMessage(
        "The mirrors spin. You stumble out somewhere else.".to_string(),
    ));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn enter_code(
    world: &World,
    state: &mut GameState,
    view: &mut View,
    codes: &mut dyn CodeEntry,
    prompt: &str,
    accepted: &[String],
    success: &str,
    failure: &str,
) -> Result<()> {
    world.location(success)?;
    let Some(entered) = codes.read_code(prompt).context("while reading door code")? else {
        view.push(ViewItem::ActionFailure("You step away from the keypad.".to_string()));
        return Ok(());
    };
    let entered = normalize_code(&entered);
    if accepted.iter().any(|code| normalize_code(code) == entered) {
        info!("correct code entered at '{}'", state.current);
        state.jump_to(success);
        view.push(ViewItem::ActionSuccess("The keypad beeps. The door swings open.".to_string()));
    } else {
        info!("incorrect code \"{entered}\" entered at '{}'", state.current);
        view.push(ViewItem::ActionFailure(failure.to_string()));
    }
    Ok(())
}

fn custom_effect(world: &mut World, state: &mut GameState, view: &mut View, custom: &CustomEffect) -> Result<()> {
    world.location(&custom.to)?;
    if !state.contains_item(&custom.requires) {
        info!("custom effect '{}' blocked: missing '{}'", custom.name, custom.requires);
        view.push(ViewItem::ActionFailure(custom.blocked.clone()));
        return Ok(());
    }
    if custom.consumes {
        state.remove_item(&custom.requires);
        world.item_mut(&custom.requires)?.set_location_nowhere();
    }
    if let Some(rewrite) = &custom.rewrite {
        apply_rewrite(world, rewrite)?;
    }
    state.jump_to(&custom.to);
    if let Some(message) = &custom.success {
        view.push(ViewItem::ActionSuccess(message.clone()));
    }
    info!("custom effect '{}' applied", custom.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemKind};
    use crate::location::Location;
    use crate::world::{Combination, ItemLocation};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn world() -> World {
        let mut world = World::new_empty();
        world.start_location = "shop".into();

        let mut shop = Location::new("shop", "Shop", "Dusty shelves.");
        shop.choices = vec![
            Choice::new(
                "Take Radio",
                Effect::AddItem {
                    item: "radio".into(),
                    new_description: None,
                },
            ),
            Choice::new(
                "Take Batteries",
                Effect::AddItem {
                    item: "batteries".into(),
                    new_description: Some("Empty shelves.".into()),
                },
            ),
            Choice::new("Drop Radio", Effect::RemoveItem { item: "radio".into() }),
            Choice::new(
                "Leave",
                Effect::Go {
                    to: "street".into(),
                    new_description: None,
                },
            ),
        ];
        let mut street = Location::new("street", "Street", "Wet cobbles.");
        street.random_exits = vec!["shop".into()];
        street.choices = vec![Choice::new("Wander", Effect::RandomExit)];

        world.locations.insert("shop".into(), shop);
        world.locations.insert("street".into(), street);
        for id in ["radio", "batteries"] {
            world.items.insert(
                id.into(),
                Item::new(id, id, id, ItemLocation::Location("shop".into()), ItemKind::Plain),
            );
        }
        world.items.insert(
            "working_radio".into(),
            Item::new(
                "working_radio",
                "working radio",
                "It hums.",
                ItemLocation::Nowhere,
                ItemKind::Receiver("3-7-1".into()),
            ),
        );
        world.combinations.push(Combination {
            consumes: vec!["radio".into(), "batteries".into()],
            produces: "working_radio".into(),
            message: "Combined!".into(),
        });
        world
    }

    fn choose(world: &mut World, state: &mut GameState, view: &mut View, idx: usize) {
        let choice = world.location(&state.current).unwrap().choices[idx].clone();
        let mut rng = StdRng::seed_from_u64(7);
        let mut codes: VecDeque<String> = VecDeque::new();
        apply_choice(world, state, view, &choice, &mut rng, &mut codes).unwrap();
    }

    #[test]
    fn add_item_applies_new_description_after_take() {
        let mut world = world();
        let mut state = GameState::new(&world);
        let mut view = View::new();
        choose(&mut world, &mut state, &mut view, 1);
        assert_eq!(state.inventory, vec!["batteries".to_string()]);
        assert_eq!(world.location("shop").unwrap().description, "Empty shelves.");
        assert_eq!(world.item("batteries").unwrap().location, ItemLocation::Inventory);
    }

    #[test]
    fn remove_item_is_noop_when_absent() {
        let mut world = world();
        let mut state = GameState::new(&world);
        let mut view = View::new();
        choose(&mut world, &mut state, &mut view, 2);
        assert!(state.inventory.is_empty());

        choose(&mut world, &mut state, &mut view, 0);
        choose(&mut world, &mut state, &mut view, 2);
        assert!(state.inventory.is_empty());
        assert!(state.has_taken("radio"));
    }

    #[test]
    fn combination_replaces_inputs_with_product() {
        let mut world = world();
        let mut state = GameState::new(&world);
        let mut view = View::new();
        choose(&mut world, &mut state, &mut view, 0);
        choose(&mut world, &mut state, &mut view, 1);

        assert_eq!(state.inventory, vec!["working_radio".to_string()]);
        assert!(state.has_taken("radio") && state.has_taken("batteries") && state.has_taken("working_radio"));
        assert_eq!(world.item("radio").unwrap().location, ItemLocation::Nowhere);
        assert!(view.queued().any(|item| *item == ViewItem::TriggeredEvent("Combined!".into())));
    }

    #[test]
    fn go_pushes_history_and_back_pops_it() {
        let mut world = world();
        let mut state = GameState::new(&world);
        let mut view = View::new();
        choose(&mut world, &mut state, &mut view, 3);
        assert_eq!(state.current, "street");
        assert_eq!(state.history, vec!["shop".to_string()]);

        go_back(&mut state, &mut view);
        assert_eq!(state.current, "shop");
        assert!(state.history.is_empty());

        go_back(&mut state, &mut view);
        assert_eq!(state.current, "shop");
        assert!(view.queued().any(ViewItem::is_action_failure));
    }

    #[test]
    fn random_exit_pushes_history() {
        let mut world = world();
        let mut state = GameState::at("street");
        let mut view = View::new();
        choose(&mut world, &mut state, &mut view, 0);
        assert_eq!(state.current, "shop");
        assert_eq!(state.history, vec!["street".to_string()]);
    }

    #[test]
    fn missing_required_item_rejects_choice() {
        let mut world = world();
        let mut state = GameState::new(&world);
        let mut view = View::new();
        let mut leave = world.location("shop").unwrap().choices[3].clone();
        leave.requires_item = Some("radio".into());
        let mut rng = StdRng::seed_from_u64(1);
        apply_choice(&mut world, &mut state, &mut view, &leave, &mut rng, &mut VecDeque::<String>::new()).unwrap();

        assert_eq!(state.current, "shop");
        assert!(
            view.queued()
                .any(|item| *item == ViewItem::ActionFailure("You need the radio first.".into()))
        );
    }

    #[test]
    fn unknown_target_is_a_lookup_error() {
        let mut world = world();
        let mut state = GameState::new(&world);
        let mut view = View::new();
        let bad = Choice::new(
            "Fall",
            Effect::Go {
                to: "abyss".into(),
                new_description: None,
            },
        );
        let mut rng = StdRng::seed_from_u64(1);
        let err = apply_choice(&mut world, &mut state, &mut view, &bad, &mut rng, &mut VecDeque::<String>::new()).unwrap_err();
        assert!(err.to_string().contains("abyss"));
        assert_eq!(state.current, "shop");
        assert!(state.history.is_empty());
    }

    #[test]
    fn use_item_requires_holding_it() {
        let mut world = world();
        let state = GameState::new(&world);
        let mut view = View::new();
        use_item(&mut world, &state, &mut view, "radio").unwrap();
        assert!(view.queued().any(ViewItem::is_action_failure));
    }

    #[test]
    fn codes_ignore_spaces_and_hyphens() {
        assert_eq!(normalize_code("3-7-1"), "371");
        assert_eq!(normalize_code(" 3 7 1 "), "371");
        assert_eq!(normalize_code("371"), "371");
        assert_ne!(normalize_code("173"), "371");
    }

    fn apply(world: &mut World, state: &mut GameState, view: &mut View, choice: &Choice) {
        let mut rng = StdRng::seed_from_u64(3);
        apply_choice(world, state, view, choice, &mut rng, &mut VecDeque::<String>::new()).unwrap();
    }

    #[test]
    fn go_rewrites_the_location_being_left() {
        let mut world = world();
        let mut state = GameState::new(&world);
        let mut view = View::new();
        let leave = Choice::new(
            "Leave and lock up",
            Effect::Go {
                to: "street".into(),
                new_description: Some("The shutters are down.".into()),
            },
        );
        apply(&mut world, &mut state, &mut view, &leave);

        assert_eq!(state.current, "street");
        assert_eq!(state.history, vec!["shop".to_string()]);
        assert_eq!(world.location("shop").unwrap().description, "The shutters are down.");
        assert_eq!(world.location("street").unwrap().description, "Wet cobbles.");
    }

    #[test]
    fn describe_overwrites_in_place() {
        let mut world = world();
        let mut state = GameState::new(&world);
        let mut view = View::new();
        let dust = Choice::new(
            "Blow off the dust",
            Effect::Describe {
                new_description: "Clean shelves.".into(),
            },
        );
        apply(&mut world, &mut state, &mut view, &dust);

        assert_eq!(state.current, "shop");
        assert!(state.history.is_empty());
        assert_eq!(world.location("shop").unwrap().description, "Clean shelves.");
        assert_eq!(world.location("shop").unwrap().base_description, "Dusty shelves.");
    }

    #[test]
    fn cancelled_code_entry_changes_nothing() {
        let mut world = world();
        let mut state = GameState::at("street");
        state.history.push("shop".into());
        let mut view = View::new();
        let keypad = Choice::new(
            "Enter code",
            Effect::InputCode {
                prompt: "Code?".into(),
                codes: vec!["3-7-1".into()],
                success: "shop".into(),
                failure: "Wrong.".into(),
            },
        );
        apply(&mut world, &mut state, &mut view, &keypad);

        assert_eq!(state.current, "street");
        assert_eq!(state.history, vec!["shop".to_string()]);
        assert!(
            view.queued()
                .any(|item| *item == ViewItem::ActionFailure("You step away from the keypad.".into()))
        );
    }

    #[test]
    fn restart_without_special_ending_is_rejected() {
        let mut world = world();
        let mut state = GameState::at("street");
        let mut view = View::new();
        assert!(!restart(&mut world, &mut state, &mut view));
        assert_eq!(state.current, "street");

        state.ending = Some(Ending {
            text: "Boom.".into(),
            special: false,
        });
        assert!(!restart(&mut world, &mut state, &mut view));
        assert!(state.is_over());
    }
}
