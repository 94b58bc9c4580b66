//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into runtime engine structs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use fogline_data::{
    ChoiceDef, CombinationDef, CustomEffectDef, EffectDef, ItemDef, ItemKindDef, LocationDef, LocationRef, WorldDef,
};

use crate::item::{Item, ItemKind};
use crate::location::{Choice, CustomEffect, Effect, Location, Rewrite};
use crate::world::{Combination, ItemLocation, World};

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - if the file can't be read or isn't a valid `WorldDef`
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))
}

/// Convert a `WorldDef` into a populated `World`.
///
/// # Errors
/// - if two locations or items share an id
pub fn build_world_from_def(def: &WorldDef) -> Result<World> {
    let mut world = World::new_empty();
    world.title.clone_from(&def.game.title);
    world.intro.clone_from(&def.game.intro);
    world.start_location.clone_from(&def.game.start_location);

    for location_def in &def.locations {
        let location = location_from_def(location_def);
        if world.locations.insert(location.id.clone(), location).is_some() {
            anyhow::bail!("duplicate location id '{}'", location_def.id);
        }
    }

    for item_def in &def.items {
        let item = item_from_def(item_def);
        if world.items.insert(item.id.clone(), item).is_some() {
            anyhow::bail!("duplicate item id '{}'", item_def.id);
        }
    }

    world.combinations = def.combinations.iter().map(combination_from_def).collect();

    Ok(world)
}

fn location_from_def(def: &LocationDef) -> Location {
    Location {
        id: def.id.clone(),
        name: def.name.clone(),
        description: def.desc.clone(),
        base_description: def.desc.clone(),
        dark_description: def.dark_desc.clone(),
        requires_light: def.requires_light,
        items: def.items.clone(),
        choices: def.choices.iter().map(choice_from_def).collect(),
        random_exits: def.random_exits.clone(),
    }
}

fn choice_from_def(def: &ChoiceDef) -> Choice {
    Choice {
        text: def.text.clone(),
        requires_item: def.requires_item.clone(),
        effect: effect_from_def(&def.effect),
    }
}

fn effect_from_def(def: &EffectDef) -> Effect {
    match def {
        EffectDef::Go { to, new_desc } => Effect::Go {
            to: to.clone(),
            new_description: new_desc.clone(),
        },
        EffectDef::Describe { new_desc } => Effect::Describe {
            new_description: new_desc.clone(),
        },
        EffectDef::AddItem { item, new_desc } => Effect::AddItem {
            item: item.clone(),
            new_description: new_desc.clone(),
        },
        EffectDef::RemoveItem { item } => Effect::RemoveItem { item: item.clone() },
        EffectDef::RandomExit => Effect::RandomExit,
        EffectDef::InputCode {
            prompt,
            codes,
            success,
            failure,
        } => Effect::InputCode {
            prompt: prompt.clone(),
            codes: codes.clone(),
            success: success.clone(),
            failure: failure.clone(),
        },
        EffectDef::Ending { text, special } => Effect::Ending {
            text: text.clone(),
            special: *special,
        },
        EffectDef::Custom(custom) => Effect::Custom(custom_from_def(custom)),
    }
}

fn custom_from_def(def: &CustomEffectDef) -> CustomEffect {
    CustomEffect {
        name: def.name.clone(),
        requires: def.requires.clone(),
        consumes: def.consumes,
        rewrite: def.rewrite.as_ref().map(|rewrite| Rewrite {
            location: rewrite.location.clone(),
            text: rewrite.text.clone(),
        }),
        to: def.to.clone(),
        blocked: def.blocked.clone(),
        success: def.success.clone(),
    }
}

fn item_from_def(def: &ItemDef) -> Item {
    let location = match &def.location {
        LocationRef::Inventory => ItemLocation::Inventory,
        LocationRef::Nowhere => ItemLocation::Nowhere,
        LocationRef::Location(id) => ItemLocation::Location(id.clone()),
    };
    let kind = match &def.kind {
        ItemKindDef::Plain => ItemKind::Plain,
        ItemKindDef::Lamp => ItemKind::Lamp,
        ItemKindDef::Key { hint } => ItemKind::Key(hint.clone()),
        ItemKindDef::Receiver { broadcast } => ItemKind::Receiver(broadcast.clone()),
    };
    Item::new(&def.id, &def.name, &def.desc, location, kind)
}

fn combination_from_def(def: &CombinationDef) -> Combination {
    Combination {
        consumes: def.consumes.clone(),
        produces: def.produces.clone(),
        message: def.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fogline_data::{GameDef, RewriteDef};

    fn location_def(id: &str) -> LocationDef {
        LocationDef {
            id: id.into(),
            name: id.to_uppercase(),
            desc: format!("The {id}."),
            dark_desc: None,
            requires_light: false,
            items: Vec::new(),
            choices: Vec::new(),
            random_exits: Vec::new(),
        }
    }

    #[test]
    fn custom_effects_convert_with_rewrite() {
        let def = EffectDef::Custom(CustomEffectDef {
            name: "cut_fence".into(),
            requires: "bolt_cutters".into(),
            consumes: true,
            rewrite: Some(RewriteDef {
                location: "alley".into(),
                text: "The fence is open.".into(),
            }),
            to: "sewer_entrance".into(),
            blocked: "You need bolt cutters.".into(),
            success: None,
        });
        let Effect::Custom(custom) = effect_from_def(&def) else {
            panic!("expected custom effect");
        };
        assert!(custom.consumes);
        assert_eq!(custom.rewrite.unwrap().location, "alley");
    }

    #[test]
    fn items_start_inactive_at_home() {
        let item = item_from_def(&ItemDef {
            id: "lamp".into(),
            name: "lamp".into(),
            desc: "A lantern.".into(),
            location: LocationRef::Location("beach".into()),
            kind: ItemKindDef::Lamp,
        });
        assert!(!item.is_active);
        assert_eq!(item.home, ItemLocation::Location("beach".into()));
    }

    #[test]
    fn duplicate_locations_are_rejected() {
        let def = WorldDef {
            game: GameDef {
                title: "Dupes".into(),
                start_location: "a".into(),
                ..GameDef::default()
            },
            locations: vec![location_def("a"), location_def("a")],
            ..WorldDef::default()
        };
        assert!(build_world_from_def(&def).is_err());
    }

    #[test]
    fn base_description_matches_authored_text() {
        let location = location_from_def(&location_def("pier"));
        assert_eq!(location.description, "The pier.");
        assert_eq!(location.base_description, location.description);
    }
}
