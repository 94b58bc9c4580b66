//! Scene projection.
//!
//! [`project`] turns the world table and game state into a [`Scene`]: everything
//! the player can currently see and do. It never mutates anything, so the REPL
//! projects before each prompt and uses the same scene to resolve the numbers
//! the player types.

use anyhow::Result;

use crate::state::Ending;
use crate::{GameState, Id, ItemHolder, Location, World, WorldObject};

/// What selecting a scene entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneAction {
    /// Index into the current location's declared choices.
    Choice(usize),
    Back,
    Restart,
}

/// One numbered entry in the choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneChoice {
    pub text: String,
    pub action: SceneAction,
    pub enabled: bool,
    /// Name of the missing item when disabled.
    pub needs: Option<String>,
}

/// A use-affordance for one held item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAction {
    pub item_id: Id,
    pub name: String,
    pub active: bool,
}

/// Everything shown to the player for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub location_id: Id,
    pub title: String,
    pub description: String,
    pub dark: bool,
    pub ended: bool,
    pub choices: Vec<SceneChoice>,
    pub inventory: Vec<String>,
    pub item_actions: Vec<ItemAction>,
}

impl Scene {
    /// Numbered entry `number` (1-based, as displayed).
    pub fn choice_number(&self, number: usize) -> Option<&SceneChoice> {
        number.checked_sub(1).and_then(|idx| self.choices.get(idx))
    }

    pub fn can_go_back(&self) -> bool {
        self.choices.iter().any(|c| c.action == SceneAction::Back)
    }

    pub fn can_restart(&self) -> bool {
        self.choices.iter().any(|c| c.action == SceneAction::Restart)
    }
}

/// Project the current state into a `Scene`.
///
/// # Errors
/// - if the current location or a referenced item is missing from the world
pub fn project(world: &World, state: &GameState) -> Result<Scene> {
    let location = world.location(&state.current)?;
    let (inventory, item_actions) = inventory_view(world, state)?;

    if let Some(ending) = &state.ending {
        return Ok(ending_scene(location, ending, inventory));
    }

    if location.requires_light && !has_light(world, state) {
        return Ok(Scene {
            location_id: location.id.clone(),
            title: location.name.clone(),
            description: location.dark_text().to_string(),
            dark: true,
            ended: false,
            choices: vec![back_choice()],
            inventory,
            item_actions,
        });
    }

    let mut choices = Vec::new();
    for (idx, choice) in location.choices.iter().enumerate() {
        if choice.added_item().is_some_and(|item| state.has_taken(item)) {
            continue;
        }
        let needs = match &choice.requires_item {
            Some(item_id) if !state.contains_item(item_id) => Some(world.item(item_id)?.name.clone()),
            _ => None,
        };
        choices.push(SceneChoice {
            text: choice.text.clone(),
            action: SceneAction::Choice(idx),
            enabled: needs.is_none(),
            needs,
        });
    }
    if back_allowed(world, location) {
        choices.push(back_choice());
    }

    Ok(Scene {
        location_id: location.id.clone(),
        title: location.name.clone(),
        description: visible_description(world, state, location)?,
        dark: false,
        ended: false,
        choices,
        inventory,
        item_actions,
    })
}

/// True if the player holds an active light source.
pub fn has_light(world: &World, state: &GameState) -> bool {
    state
        .inventory
        .iter()
        .filter_map(|id| world.items.get(id))
        .any(crate::Item::gives_light)
}

/// The location's current text with the embedded descriptions of taken items cut out.
///
/// # Errors
/// - if the location lists an item the world doesn't have
pub fn visible_description(world: &World, state: &GameState, location: &Location) -> Result<String> {
    let mut description = location.description.clone();
    for item_id in &location.items {
        if state.has_taken(item_id) {
            let item = world.item(item_id)?;
            description = description.replacen(item.description(), "", 1);
        }
    }
    Ok(description.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn back_allowed(world: &World, location: &Location) -> bool {
    location.id != world.start_location && location.random_exits.is_empty() && !location.offers_ending()
}

fn back_choice() -> SceneChoice {
    SceneChoice {
        text: "Go back".to_string(),
        action: SceneAction::Back,
        enabled: true,
        needs: None,
    }
}

fn ending_scene(location: &Location, ending: &Ending, inventory: Vec<String>) -> Scene {
    let choices = if ending.special {
        vec![SceneChoice {
            text: "Try again?".to_string(),
            action: SceneAction::Restart,
            enabled: true,
            needs: None,
        }]
    } else {
        Vec::new()
    };
    Scene {
        location_id: location.id.clone(),
        title: location.name.clone(),
        description: ending.text.clone(),
        dark: false,
        ended: true,
        choices,
        inventory,
        item_actions: Vec::new(),
    }
}

fn inventory_view(world: &World, state: &GameState) -> Result<(Vec<String>, Vec<ItemAction>)> {
    let mut names = Vec::new();
    let mut actions = Vec::new();
    for item_id in &state.inventory {
        let item = world.item(item_id)?;
        names.push(item.name.clone());
        actions.push(ItemAction {
            item_id: item.id.clone(),
            name: item.name.clone(),
            active: item.is_active,
        });
    }
    Ok((names, actions))
}
