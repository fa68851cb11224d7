//! Movement domain: player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, MovementTuning, Player};
use crate::sprites::AnimationController;

/// Player bounding box in world units.
pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(0.9, 1.8);

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    info!(
        "Spawning player: move_speed={}, jump_force={}, extra_jumps={}",
        tuning.move_speed, tuning.jump_force, tuning.extra_jumps
    );

    commands.spawn((
        // Identity & movement
        (
            Player,
            MovementState {
                extra_jumps_left: tuning.extra_jumps,
                ..default()
            },
            AnimationController::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        // Physics: avian owns gravity and velocity-to-position integration.
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
