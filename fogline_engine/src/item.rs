//! Item types and their use-effects.
//!
//! Items are things the player can carry. What happens when one is used is
//! selected by its [`ItemKind`], a closed set matched in one place
//! ([`Item::use_effect`]) rather than spread across per-item types.

use crate::Id;
use crate::{ItemLocation, WorldObject};

use log::info;
use variantly::Variantly;

/// Behaviors an item can have when used.
#[derive(Debug, Default, Clone, Variantly, PartialEq, Eq)]
pub enum ItemKind {
    /// No effect beyond a flavor message.
    #[default]
    Plain,
    /// Toggles `is_active`; an active lamp lights dark locations.
    Lamp,
    /// Returns a hint about where it fits.
    Key(String),
    /// Returns a fixed broadcast (the working radio's code hint).
    Receiver(String),
}

/// Something the player can find, carry and use.
#[derive(Debug, Default, Clone)]
pub struct Item {
    pub id: Id,
    pub name: String,
    /// Also the substring cut from a location's description once the item is taken.
    pub description: String,
    pub location: ItemLocation,
    pub is_active: bool,
    pub kind: ItemKind,
    /// Where the item starts, restored on restart.
    pub home: ItemLocation,
}

impl WorldObject for Item {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl Item {
    /// Create an inactive item at its authored starting location.
    pub fn new(id: &str, name: &str, description: &str, location: ItemLocation, kind: ItemKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            home: location.clone(),
            location,
            is_active: false,
            kind,
        }
    }

    /// Returns true if this item lights dark locations right now.
    pub fn gives_light(&self) -> bool {
        self.kind.is_lamp() && self.is_active
    }

    /// Set location to player inventory.
    pub fn set_location_inventory(&mut self) {
        self.location = ItemLocation::Inventory;
    }

    /// Take the item out of play (consumed by a combination or custom effect).
    pub fn set_location_nowhere(&mut self) {
        self.location = ItemLocation::Nowhere;
    }

    /// Apply this item's use-effect and return the message for the player.
    pub fn use_effect(&mut self) -> String {
        let message = match &self.kind {
            ItemKind::Plain => format!("{} does nothing special.", self.name),
            ItemKind::Lamp => {
                self.is_active = !self.is_active;
                format!(
                    "You {} the {}.",
                    if self.is_active { "light" } else { "extinguish" },
                    self.name
                )
            },
            ItemKind::Key(hint) => hint.clone(),
            ItemKind::Receiver(broadcast) => broadcast.clone(),
        };
        info!("item '{}' used (active = {})", self.id, self.is_active);
        message
    }

    /// Restore authored location and inactive state.
    pub fn reset(&mut self) {
        self.location = self.home.clone();
        self.is_active = false;
    }
}
