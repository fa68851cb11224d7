//! Content domain: RON-backed configuration loading.

mod data;
mod loader;
#[cfg(test)]
mod tests;

pub use data::MovementTuningDef;
pub use loader::{ContentLoadError, load_movement_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // PreStartup so the tuning is in place before the player spawns.
        app.add_systems(PreStartup, apply_movement_tuning);
    }
}

fn apply_movement_tuning(mut tuning: ResMut<MovementTuning>) {
    match load_movement_tuning(Path::new("assets/data")) {
        Ok(def) => {
            def.apply(&mut tuning);
            info!(
                "Loaded movement tuning: move_speed={}, jump_force={}, extra_jumps={}",
                tuning.move_speed, tuning.jump_force, tuning.extra_jumps
            );
        }
        Err(e) => {
            warn!("{}; keeping default movement tuning", e);
        }
    }
}
