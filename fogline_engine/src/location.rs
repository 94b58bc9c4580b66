//! Location definitions and the choices offered at each one.
//!
//! Any place the player can stand is a "Location", from the beach to the
//! bunker. A location carries its current description next to the authored
//! one, so choices can rewrite the text during play and a restart can put it back.

use crate::Id;
use crate::WorldObject;

use variantly::Variantly;

/// A replacement description for some location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub location: Id,
    pub text: String,
}

/// A scripted action that needs a tool in the inventory (e.g. cutting the fence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEffect {
    pub name: String,
    pub requires: Id,
    pub consumes: bool,
    pub rewrite: Option<Rewrite>,
    pub to: Id,
    /// Shown when the tool isn't held.
    pub blocked: String,
    pub success: Option<String>,
}

/// The effect of selecting a choice.
#[derive(Debug, Clone, Variantly, PartialEq, Eq)]
pub enum Effect {
    Go {
        to: Id,
        new_description: Option<String>,
    },
    Describe {
        new_description: String,
    },
    AddItem {
        item: Id,
        new_description: Option<String>,
    },
    RemoveItem {
        item: Id,
    },
    RandomExit,
    InputCode {
        prompt: String,
        codes: Vec<String>,
        success: Id,
        failure: String,
    },
    Ending {
        text: String,
        special: bool,
    },
    Custom(CustomEffect),
}

/// A selectable option at a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub text: String,
    pub requires_item: Option<Id>,
    pub effect: Effect,
}
impl Choice {
    /// Create an unconditional choice.
    pub fn new(text: &str, effect: Effect) -> Self {
        Self {
            text: text.to_string(),
            requires_item: None,
            effect,
        }
    }

    /// The item this choice adds to the inventory, if it is a take action.
    pub fn added_item(&self) -> Option<&str> {
        match &self.effect {
            Effect::AddItem { item, .. } => Some(item),
            _ => None,
        }
    }
}

/// A place on the map.
#[derive(Debug, Clone, Default)]
pub struct Location {
    pub id: Id,
    pub name: String,
    /// Current description, possibly rewritten during play.
    pub description: String,
    /// Description as authored.
    pub base_description: String,
    pub dark_description: Option<String>,
    pub requires_light: bool,
    pub items: Vec<Id>,
    pub choices: Vec<Choice>,
    pub random_exits: Vec<Id>,
}

impl WorldObject for Location {
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

impl Location {
    /// Create a lit location with no items, choices or random exits.
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            base_description: description.to_string(),
            ..Self::default()
        }
    }

    /// Text shown when the player stands here without light.
    pub fn dark_text(&self) -> &str {
        self.dark_description.as_deref().unwrap_or("You can't see anything.")
    }

    /// True if any choice here ends the game.
    pub fn offers_ending(&self) -> bool {
        self.choices.iter().any(|choice| choice.effect.is_ending())
    }

    pub fn reset_description(&mut self) {
        self.description.clone_from(&self.base_description);
    }
}
