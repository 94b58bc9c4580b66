//! Data structures representing the game world.
//!
//! This module defines [`World`], the runtime form of the authored location and
//! item tables. Game progress lives separately in [`GameState`](crate::GameState);
//! the only things that change here during play are location descriptions and
//! item whereabouts, both of which remember their authored values for restarts.

use crate::FOGLINE_VERSION;
use crate::Id;
use crate::{Item, Location};

use log::info;
use std::collections::HashMap;
use thiserror::Error;
use variantly::Variantly;

/// Kinds of places where an `Item` may be.
/// Items consumed by a combination, and products not yet made, are `Nowhere`.
#[derive(Debug, Default, Clone, Variantly, PartialEq, Eq)]
pub enum ItemLocation {
    Inventory,
    #[default]
    Nowhere,
    Location(Id),
}

/// Methods common to any object in the world.
pub trait WorldObject {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
}

/// A reference to something the world table doesn't contain.
///
/// Validation at load time rules these out for authored content, so hitting one
/// during play means the engine itself asked for the wrong id.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("location '{0}' not found in world")]
    UnknownLocation(Id),
    #[error("item '{0}' not found in world")]
    UnknownItem(Id),
}

/// A rule merging several held items into one new item.
#[derive(Debug, Clone)]
pub struct Combination {
    pub consumes: Vec<Id>,
    pub produces: Id,
    pub message: String,
}

/// Complete table of locations, items and combination rules.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub title: String,
    pub intro: String,
    pub start_location: Id,
    pub locations: HashMap<Id, Location>,
    pub items: HashMap<Id, Item>,
    pub combinations: Vec<Combination>,
    pub version: String,
}
impl World {
    /// Create a new empty world.
    pub fn new_empty() -> World {
        let world = Self {
            title: String::new(),
            intro: String::new(),
            start_location: String::new(),
            locations: HashMap::new(),
            items: HashMap::new(),
            combinations: Vec::new(),
            version: FOGLINE_VERSION.to_string(),
        };
        info!("new, empty 'World' created");
        world
    }

    /// Look up a location by id.
    /// # Errors
    /// - if no location has the given id
    pub fn location(&self, id: &str) -> Result<&Location, LookupError> {
        self.locations
            .get(id)
            .ok_or_else(|| LookupError::UnknownLocation(id.to_string()))
    }

    /// Look up a location by id for mutation.
    /// # Errors
    /// - if no location has the given id
    pub fn location_mut(&mut self, id: &str) -> Result<&mut Location, LookupError> {
        self.locations
            .get_mut(id)
            .ok_or_else(|| LookupError::UnknownLocation(id.to_string()))
    }

    /// Look up an item by id.
    /// # Errors
    /// - if no item has the given id
    pub fn item(&self, id: &str) -> Result<&Item, LookupError> {
        self.items.get(id).ok_or_else(|| LookupError::UnknownItem(id.to_string()))
    }

    /// Look up an item by id for mutation.
    /// # Errors
    /// - if no item has the given id
    pub fn item_mut(&mut self, id: &str) -> Result<&mut Item, LookupError> {
        self.items
            .get_mut(id)
            .ok_or_else(|| LookupError::UnknownItem(id.to_string()))
    }

    /// Restore every description and item to its authored state.
    pub fn reset(&mut self) {
        for location in self.locations.values_mut() {
            location.reset_description();
        }
        for item in self.items.values_mut() {
            item.reset();
        }
        info!("world restored to authored state");
    }
}
