//! Game state -- where the player is and what they carry.
use crate::{Id, World};

use log::info;
use std::collections::HashSet;

/// How the game ended, once it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ending {
    pub text: String,
    /// Special endings offer a restart.
    pub special: bool,
}

/// Everything that changes as the player makes choices.
///
/// `taken` keeps every item that was ever in the inventory, including ones later
/// merged away by a combination, so take choices stay hidden for good.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub current: Id,
    /// Held items in the order they were acquired.
    pub inventory: Vec<Id>,
    pub taken: HashSet<Id>,
    pub history: Vec<Id>,
    pub ending: Option<Ending>,
}

impl GameState {
    /// Fresh state at the world's starting location.
    pub fn new(world: &World) -> Self {
        Self::at(&world.start_location)
    }

    /// Fresh state at an arbitrary location.
    pub fn at(location: &str) -> Self {
        Self {
            current: location.to_string(),
            ..Self::default()
        }
    }

    /// Move to a new location, remembering where we came from.
    pub fn travel_to(&mut self, destination: &str) {
        info!("player moved from '{}' to '{destination}'", self.current);
        self.history.push(std::mem::replace(&mut self.current, destination.to_string()));
    }

    /// Move without touching history (code doors, custom effects, teleports).
    pub fn jump_to(&mut self, destination: &str) {
        info!("player jumped from '{}' to '{destination}'", self.current);
        self.current = destination.to_string();
    }

    /// Returns true if the item has ever been taken.
    pub fn has_taken(&self, item_id: &str) -> bool {
        self.taken.contains(item_id)
    }

    pub fn is_over(&self) -> bool {
        self.ending.is_some()
    }
}

/// Anything that holds items.
pub trait ItemHolder {
    fn add_item(&mut self, item_id: &str);
    fn remove_item(&mut self, item_id: &str);
    fn contains_item(&self, item_id: &str) -> bool;
}

impl ItemHolder for GameState {
    fn add_item(&mut self, item_id: &str) {
        if !self.contains_item(item_id) {
            self.inventory.push(item_id.to_string());
        }
        self.taken.insert(item_id.to_string());
    }

    fn remove_item(&mut self, item_id: &str) {
        self.inventory.retain(|held| held != item_id);
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|held| held == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_empty() {
        let mut world = World::new_empty();
        world.start_location = "beach".into();
        let state = GameState::new(&world);
        assert_eq!(state.current, "beach");
        assert!(state.inventory.is_empty());
        assert!(state.taken.is_empty());
        assert!(state.history.is_empty());
        assert!(!state.is_over());
    }

    #[test]
    fn travel_pushes_history_and_jump_does_not() {
        let mut state = GameState::at("beach");
        state.travel_to("square");
        assert_eq!(state.current, "square");
        assert_eq!(state.history, vec!["beach".to_string()]);

        state.jump_to("diner");
        assert_eq!(state.current, "diner");
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn inventory_keeps_insertion_order_without_duplicates() {
        let mut state = GameState::at("beach");
        state.add_item("lamp");
        state.add_item("key");
        state.add_item("lamp");
        assert_eq!(state.inventory, vec!["lamp".to_string(), "key".to_string()]);
    }

    #[test]
    fn removing_keeps_taken_record() {
        let mut state = GameState::at("beach");
        state.add_item("radio");
        state.remove_item("radio");
        state.remove_item("radio");
        assert!(!state.contains_item("radio"));
        assert!(state.has_taken("radio"));
    }
}
