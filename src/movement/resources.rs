//! Movement domain: tuning and input resources.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// Immutable movement configuration, set once at startup.
///
/// Numeric knobs can be overridden from `assets/data/movement.ron`.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Horizontal speed in units/s while a direction is held.
    pub move_speed: f32,
    /// Vertical impulse applied by ground, air, and wall jumps.
    pub jump_force: f32,
    /// Size of the airborne jump pool (0 = no double jump).
    pub extra_jumps: u8,
    /// Floor on vertical velocity while wall-sliding. Despite the name this
    /// caps fall speed, it is not a slide speed.
    pub wall_slide_speed: f32,
    /// Length of the horizontal wall probe.
    pub wall_distance: f32,
    /// Seconds of movement lock after a wall jump.
    pub after_wall_jump_delay: f32,
    /// Length of the downward ground probe.
    pub ground_probe_distance: f32,
    pub ground_mask: LayerMask,
    pub wall_mask: LayerMask,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 7.0,
            jump_force: 14.0,
            extra_jumps: 1,
            wall_slide_speed: 0.3,
            wall_distance: 0.6,
            after_wall_jump_delay: 0.6,
            ground_probe_distance: 0.1,
            ground_mask: GameLayer::Ground.into(),
            wall_mask: GameLayer::Wall.into(),
        }
    }
}

/// The one input sample taken per tick. The controller never polls input
/// devices itself.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    /// True only on the tick the jump button transitions to pressed.
    pub jump_just_pressed: bool,
}
