//! Loader utilities for building a `World` from serialized data.
//!
//! World content is authored as a `WorldDef` in RON, validated in full, and
//! only then converted into runtime structs.

pub mod worlddef;

use std::path::Path;

use crate::World;
use crate::data_paths::data_path;
use crate::loader::worlddef::{build_world_from_def, load_worlddef};

use anyhow::{Context, Result, bail};
use fogline_data::WorldDef;
use log::info;

/// File name of the authored world inside the data directory.
pub const WORLD_FILE: &str = "world.ron";

/// Load the `World` from the data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or missing references.
pub fn load_world() -> Result<World> {
    load_world_from(&data_path(WORLD_FILE))
}

/// Load, validate and build a `World` from a specific RON file.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or missing references.
pub fn load_world_from(path: &Path) -> Result<World> {
    let worlddef = load_worlddef(path).context("while loading worlddef from file")?;
    validate_worlddef(&worlddef)?;
    let world = build_world_from_def(&worlddef).context("while building world from worlddef")?;
    info!("{} locations added to World", world.locations.len());
    info!("{} items added to World", world.items.len());
    info!("{} combinations added to World", world.combinations.len());
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
///
/// # Errors
/// - listing every dangling reference or invalid value found
pub fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = fogline_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const TINY_WORLD: &str = r#"(
        game: (title: "Tiny", start_location: "cellar"),
        locations: [
            (
                id: "cellar",
                name: "Cellar",
                desc: "Damp stone. A candle stub sits in a niche.",
                items: ["candle"],
                choices: [
                    (text: "Take candle", effect: AddItem(item: "candle")),
                    (text: "Climb out", effect: Go(to: "yard")),
                ],
            ),
            (id: "yard", name: "Yard", desc: "Weeds."),
        ],
        items: [
            (id: "candle", name: "candle", desc: "A candle stub sits in a niche.", location: Location("cellar"), kind: Lamp),
        ],
    )"#;

    #[test]
    fn loads_world_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(WORLD_FILE);
        fs::write(&path, TINY_WORLD).unwrap();

        let world = load_world_from(&path).unwrap();
        assert_eq!(world.title, "Tiny");
        assert_eq!(world.start_location, "cellar");
        assert_eq!(world.locations.len(), 2);
        assert!(world.item("candle").unwrap().kind.is_lamp());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_world_from(&dir.path().join("nope.ron")).unwrap_err();
        assert!(format!("{err:#}").contains("reading worlddef"));
    }

    #[test]
    fn dangling_references_fail_fast() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(WORLD_FILE);
        fs::write(&path, TINY_WORLD.replace("Go(to: \"yard\")", "Go(to: \"attic\")")).unwrap();

        let err = load_world_from(&path).unwrap_err();
        let text = format!("{err:#}");
        assert!(text.contains("validation failed"));
        assert!(text.contains("missing location 'attic'"));
    }
}
