//! Movement domain: the per-tick controller adapter.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::controller::{self, InputSample};
use crate::movement::systems::collisions::SpatialProbes;
use crate::movement::{
    AnimationStateEvent, JumpSoundEvent, MovementInput, MovementState, MovementTuning, Player,
};

/// Fallback half extents when the collider is not a cuboid.
const DEFAULT_HALF_EXTENTS: Vec2 = Vec2::new(0.45, 0.9);

/// Advance every character by one tick: run the sensors, apply the movement
/// rules, then forward the animation state and jump-sound effects.
///
/// Runs after input sampling and before avian integrates position from
/// velocity. Each character's state is unshared, so iteration order between
/// characters does not matter.
pub(crate) fn advance_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    spatial_query: SpatialQuery,
    mut players: Query<
        (
            Entity,
            &Transform,
            &Collider,
            &mut MovementState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut animation_signals: MessageWriter<AnimationStateEvent>,
    mut jump_sounds: MessageWriter<JumpSoundEvent>,
) {
    let now = time.elapsed_secs_f64();
    let sample = InputSample {
        axis: input.axis,
        jump_pressed: input.jump_just_pressed,
    };
    let probes = SpatialProbes {
        query: &spatial_query,
    };

    for (entity, transform, collider, mut state, mut velocity) in &mut players {
        let half_extents = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => DEFAULT_HALF_EXTENTS,
        };
        let origin = transform.translation.truncate();

        let output = controller::advance(
            &mut state,
            &mut velocity.0,
            &sample,
            &tuning,
            &probes,
            origin,
            half_extents,
            now,
        );

        animation_signals.write(AnimationStateEvent {
            entity,
            state: output.animation,
        });
        if output.jump_sound {
            jump_sounds.write(JumpSoundEvent);
        }
    }
}
