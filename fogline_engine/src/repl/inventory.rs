//! `repl::inventory` module
//!
//! Contains repl loop handlers for listing and using held items.

use anyhow::Result;
use log::info;

use crate::scene::{ItemAction, Scene};
use crate::view::InventoryLine;
use crate::{GameState, View, ViewItem, World, WorldObject, use_item};

/// Show the player's inventory with descriptions.
///
/// # Errors
/// - if a held item isn't in the world table
pub fn inv_handler(world: &World, state: &GameState, view: &mut View) -> Result<()> {
    let mut lines = Vec::new();
    for item_id in &state.inventory {
        let item = world.item(item_id)?;
        lines.push(InventoryLine {
            item_name: item.name().to_string(),
            description: item.description().to_string(),
            active: item.is_active,
        });
    }
    view.push(ViewItem::Inventory(lines));
    Ok(())
}

/// Use a held item, chosen by its `u<n>` number or by name.
///
/// # Errors
/// - if the selected item isn't in the world table
pub fn use_handler(world: &mut World, state: &GameState, view: &mut View, scene: &Scene, thing: &str) -> Result<()> {
    if scene.ended {
        view.push(ViewItem::ActionFailure("The story has ended.".to_string()));
        return Ok(());
    }
    let Some(action) = find_item_action(scene, thing) else {
        info!("no held item matches \"{thing}\"");
        view.push(ViewItem::ActionFailure(format!("You aren't carrying any \"{thing}\".")));
        return Ok(());
    };
    let item_id = action.item_id.clone();
    use_item(world, state, view, &item_id)
}

/// Match by 1-based number, then by case-insensitive name prefix.
fn find_item_action<'a>(scene: &'a Scene, thing: &str) -> Option<&'a ItemAction> {
    if let Ok(number) = thing.parse::<usize>() {
        return number.checked_sub(1).and_then(|idx| scene.item_actions.get(idx));
    }
    let wanted = thing.to_lowercase();
    scene
        .item_actions
        .iter()
        .find(|action| action.name.to_lowercase().starts_with(&wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene {
            location_id: "beach".into(),
            title: "Beach".into(),
            description: String::new(),
            dark: false,
            ended: false,
            choices: Vec::new(),
            inventory: vec!["lamp".into(), "bolt cutters".into()],
            item_actions: vec![
                ItemAction {
                    item_id: "lamp".into(),
                    name: "lamp".into(),
                    active: false,
                },
                ItemAction {
                    item_id: "bolt_cutters".into(),
                    name: "bolt cutters".into(),
                    active: false,
                },
            ],
        }
    }

    #[test]
    fn items_match_by_number() {
        let scene = scene();
        assert_eq!(find_item_action(&scene, "2").unwrap().item_id, "bolt_cutters");
        assert!(find_item_action(&scene, "0").is_none());
        assert!(find_item_action(&scene, "3").is_none());
    }

    #[test]
    fn items_match_by_name_prefix() {
        let scene = scene();
        assert_eq!(find_item_action(&scene, "bolt").unwrap().item_id, "bolt_cutters");
        assert_eq!(find_item_action(&scene, "LAMP").unwrap().item_id, "lamp");
        assert!(find_item_action(&scene, "radio").is_none());
    }
}
