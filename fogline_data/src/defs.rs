use serde::{Deserialize, Serialize};

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level authored world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub locations: Vec<LocationDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub combinations: Vec<CombinationDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub intro: String,
    pub start_location: Id,
}

/// Location definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub dark_desc: Option<String>,
    #[serde(default)]
    pub requires_light: bool,
    /// Items whose descriptions are embedded in `desc` and get cut from it once taken.
    #[serde(default)]
    pub items: Vec<Id>,
    #[serde(default)]
    pub choices: Vec<ChoiceDef>,
    #[serde(default)]
    pub random_exits: Vec<Id>,
}

/// A single selectable choice offered at a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceDef {
    pub text: String,
    /// The choice is shown but disabled until the player holds this item.
    #[serde(default)]
    pub requires_item: Option<Id>,
    pub effect: EffectDef,
}

/// What selecting a choice does. Each variant carries only the fields it uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EffectDef {
    /// Move to another location, optionally rewriting the current one first.
    Go {
        to: Id,
        #[serde(default)]
        new_desc: Option<String>,
    },
    /// Rewrite the current location's description without moving.
    Describe { new_desc: String },
    AddItem {
        item: Id,
        #[serde(default)]
        new_desc: Option<String>,
    },
    RemoveItem { item: Id },
    /// Move to one of the location's `random_exits`.
    RandomExit,
    /// Prompt for a code; matching codes move the player to `success`.
    InputCode {
        prompt: String,
        codes: Vec<String>,
        success: Id,
        failure: String,
    },
    Ending {
        text: String,
        #[serde(default)]
        special: bool,
    },
    Custom(CustomEffectDef),
}

/// A scripted action gated on holding a tool item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomEffectDef {
    pub name: String,
    pub requires: Id,
    #[serde(default)]
    pub consumes: bool,
    #[serde(default)]
    pub rewrite: Option<RewriteDef>,
    pub to: Id,
    pub blocked: String,
    #[serde(default)]
    pub success: Option<String>,
}

/// Replacement description for a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteDef {
    pub location: Id,
    pub text: String,
}

/// Item definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    pub location: LocationRef,
    #[serde(default)]
    pub kind: ItemKindDef,
}

/// Authoring-time reference to an item's starting location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum LocationRef {
    Inventory,
    #[default]
    Nowhere,
    Location(Id),
}

/// Closed set of item behaviors selected by the `use` command.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ItemKindDef {
    #[default]
    Plain,
    Lamp,
    Key { hint: String },
    Receiver { broadcast: String },
}

/// Items in `consumes` are merged into `produces` whenever all are held at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinationDef {
    pub consumes: Vec<Id>,
    pub produces: Id,
    pub message: String,
}
