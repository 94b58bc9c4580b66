//! Development mode command handlers.
//!
//! These are only reachable when the engine is built with the `dev-mode`
//! feature. They bypass choice requirements entirely, and every use is logged
//! at `warn` level as an audit trail.

use anyhow::Result;
use log::warn;

use crate::resolve::check_combinations;
use crate::{GameState, ItemHolder, View, ViewItem, World, WorldObject};

/// Moves the player straight to a location by id (`DEV_MODE` only).
///
/// History is left alone, like the code door.
pub fn dev_teleport_handler(world: &World, state: &mut GameState, view: &mut View, location_id: &str) {
    if let Ok(location) = world.location(location_id) {
        warn!("DEV_MODE teleport from '{}' to '{location_id}'", state.current);
        state.jump_to(location_id);
        view.push(ViewItem::ActionSuccess(format!("Teleported to {}.", location.name())));
    } else {
        view.push(ViewItem::ActionFailure(format!("No location '{location_id}' in the world data.")));
    }
}

/// Puts an item into the inventory by id (`DEV_MODE` only), then runs combinations.
///
/// # Errors
/// - if a combination triggered by the spawn names a missing item
pub fn dev_spawn_item_handler(world: &mut World, state: &mut GameState, view: &mut View, item_id: &str) -> Result<()> {
    let Ok(item) = world.item_mut(item_id) else {
        view.push(ViewItem::ActionFailure(format!("No item '{item_id}' in the world data.")));
        return Ok(());
    };
    item.set_location_inventory();
    let name = item.name().to_string();
    state.add_item(item_id);
    warn!("DEV_MODE spawned '{item_id}' into inventory");
    view.push(ViewItem::ActionSuccess(format!("{name} moved to inventory.")));
    check_combinations(world, state, view)
}
