#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Fogline **
//! A choice-driven adventure on a fog-bound coast.

use fogline_engine::style::GameStyle;
use fogline_engine::{FOGLINE_VERSION, load_world, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use std::env;
use std::io::Write;

/// Environment variable holding an optional `u64` seed for random exits.
const SEED_ENV: &str = "FOGLINE_SEED";

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Fogline world...");
    let mut world = load_world().context("while loading Fogline world")?;
    info!("Fogline world loaded successfully.");

    let mut rng = seeded_rng();

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;
    info!("Starting the game!");

    println!("{:^84}", world.title.to_uppercase().bright_yellow().underline());
    println!("{:^84}\n", format!("v{FOGLINE_VERSION}").dimmed());
    if !world.intro.is_empty() {
        println!("{}\n", textwrap::fill(&world.intro, 84).description_style());
    }

    run_repl(&mut world, &mut rng)
}

fn seeded_rng() -> StdRng {
    match env::var(SEED_ENV).map(|raw| raw.parse::<u64>()) {
        Ok(Ok(seed)) => {
            info!("random exits seeded from {SEED_ENV}={seed}");
            StdRng::seed_from_u64(seed)
        },
        Ok(Err(err)) => {
            warn!("ignoring {SEED_ENV}: {err}");
            StdRng::from_os_rng()
        },
        Err(_) => StdRng::from_os_rng(),
    }
}
