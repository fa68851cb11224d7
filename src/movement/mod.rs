//! Movement domain: the per-tick platformer movement core.
//!
//! The decision pipeline lives in [`controller`]; everything else in this
//! module adapts it to the ECS: input sampling, avian-backed collision
//! probes, and the spawn helpers.

mod bootstrap;
mod components;
pub mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod resources;
mod systems;

pub use components::{Facing, GameLayer, Ground, MovementState, Player, Wall};
pub use controller::{
    CollisionProbes, InputSample, MovementAnimation, SensorReadings, TickOutput, WallHit,
};
pub use events::{AnimationStateEvent, JumpSoundEvent};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::movement::systems::{advance_movement, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<AnimationStateEvent>()
            .add_message::<JumpSoundEvent>()
            .add_systems(Startup, bootstrap::spawn_player)
            .add_systems(Update, (read_input, advance_movement).chain());

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room);
    }
}
