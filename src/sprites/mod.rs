//! Sprites domain: the animation collaborator.
//!
//! Consumes the per-tick animation state signal from the movement core and
//! applies the facing flip as a sign on the render x-scale.

pub mod animation;
#[cfg(test)]
mod tests;

pub use animation::AnimationController;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{AnimationStateEvent, MovementState, Player};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                apply_animation_signals,
                animation::update_animation_frames,
                sync_facing,
            )
                .chain(),
        );
    }
}

/// Route the movement core's animation signal into each controller.
fn apply_animation_signals(
    mut signals: MessageReader<AnimationStateEvent>,
    mut query: Query<&mut AnimationController>,
) {
    for signal in signals.read() {
        if let Ok(mut controller) = query.get_mut(signal.entity) {
            controller.set_state(signal.state);
        }
    }
}

/// Facing-right renders the authored orientation; facing-left mirrors it by
/// negating the x-scale.
fn sync_facing(mut query: Query<(&MovementState, &mut Transform), With<Player>>) {
    for (state, mut transform) in &mut query {
        let sign = state.facing.sign();
        if transform.scale.x.signum() != sign {
            transform.scale.x = transform.scale.x.abs() * sign;
        }
    }
}
