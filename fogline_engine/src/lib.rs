#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const FOGLINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Developer-only commands (`:port`, `:spawn`) are accepted when built with the `dev-mode` feature.
pub const DEV_MODE: bool = cfg!(feature = "dev-mode");

pub use fogline_data::Id;

// Core modules
pub mod command;
pub mod data_paths;
pub mod dev_command;
pub mod item;
pub mod loader;
pub mod location;
pub mod repl;
pub mod resolve;
pub mod scene;
pub mod state;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use item::{Item, ItemKind};
pub use loader::load_world;
pub use location::{Choice, Effect, Location};
pub use repl::run_repl;
pub use resolve::{CodeEntry, apply_choice, go_back, restart, use_item};
pub use scene::{Scene, project};
pub use state::{GameState, ItemHolder};
pub use view::{View, ViewItem};
pub use world::{ItemLocation, LookupError, World, WorldObject};
