//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces that support sliding and wall jumps
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-character kinematic state mutated once per tick by the controller.
///
/// Velocity is not stored here: it lives in avian's `LinearVelocity`, which
/// the physics backend integrates into position.
#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub facing: Facing,
    /// Jumps left in the airborne pool. Refilled on every grounded tick.
    pub extra_jumps_left: u8,
    pub wall_sliding: bool,
    /// Deadline on the app's elapsed-seconds clock. Horizontal movement and
    /// jump input are ignored while the clock is below it. 0.0 = never locked.
    pub locked_until: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// Sign applied to the render x-scale: right is the authored orientation.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
