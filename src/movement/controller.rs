//! Movement domain: the per-tick decision pipeline.
//!
//! Runs the sensors against an injected collision backend, applies the
//! movement rules in order, and classifies the animation state from the
//! resulting velocity. Pure apart from the probe calls, so the whole pipeline
//! is testable with a scripted backend and a hand-driven clock.

use avian2d::prelude::LayerMask;
use bevy::prelude::*;

use crate::movement::{Facing, MovementState, MovementTuning};

/// Horizontal kick applied by a wall jump, away from the wall.
pub const WALL_JUMP_KICK: f32 = 5.0;

/// Vertical speed beyond which the character reads as rising or falling.
const AIRBORNE_THRESHOLD: f32 = 0.1;

/// Directional intent sampled once per tick. Axes are pre-clamped to
/// `[-1, 1]` by the input collaborator; out-of-range values are undefined.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    pub axis: Vec2,
    /// Edge-triggered: true only on the tick the button went down.
    pub jump_pressed: bool,
}

/// A wall contact reported by the horizontal probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    /// Sign of the contact normal's x component (+1.0 = wall to the left).
    pub normal_sign: f32,
}

/// Collision queries the controller needs from the physics backend.
///
/// Two probes per tick: a box cast downward for ground and a ray toward the
/// held direction for walls. Neither mutates anything.
pub trait CollisionProbes {
    /// Cast the character's bounding box downward. True iff any geometry in
    /// `mask` intersects within `distance`.
    fn cast_ground(
        &self,
        origin: Vec2,
        half_extents: Vec2,
        distance: f32,
        mask: LayerMask,
    ) -> bool;

    /// Ray cast from the character's center toward `sign(toward)`.
    fn cast_wall(
        &self,
        origin: Vec2,
        toward: f32,
        distance: f32,
        mask: LayerMask,
    ) -> Option<WallHit>;
}

/// Sensor results for one tick. Recomputed from scratch every tick, never
/// carried over.
#[derive(Debug, Clone, Copy)]
pub struct SensorReadings {
    pub on_ground: bool,
    pub facing: Facing,
    pub wall: Option<WallHit>,
    pub wall_sliding: bool,
}

/// Flat animation classification. Ordinals are the animation collaborator's
/// integer contract and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementAnimation {
    #[default]
    Idle = 0,
    Running = 1,
    Jumping = 2,
    Falling = 3,
    Crouching = 4,
}

impl MovementAnimation {
    /// Ordinal consumed by the animation collaborator.
    pub fn index(self) -> i32 {
        self as i32
    }
}

/// Effects of one tick, forwarded to the sprite and audio collaborators.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickOutput {
    pub animation: MovementAnimation,
    pub jump_sound: bool,
}

/// Advance one character by one tick.
///
/// `now` is the app's monotonic elapsed clock in seconds; it is compared
/// against the movement-lock deadline set by wall jumps. Velocity is written
/// in place, the physics backend integrates position from it afterwards.
pub fn advance(
    state: &mut MovementState,
    velocity: &mut Vec2,
    input: &InputSample,
    tuning: &MovementTuning,
    probes: &impl CollisionProbes,
    origin: Vec2,
    half_extents: Vec2,
    now: f64,
) -> TickOutput {
    let sensors = sense(state.facing, input, tuning, probes, origin, half_extents);
    state.facing = sensors.facing;
    state.wall_sliding = sensors.wall_sliding;

    // Landing refills the jump pool before any jump input is processed.
    if sensors.on_ground {
        state.extra_jumps_left = tuning.extra_jumps;
    }

    let unlocked = now >= state.locked_until;

    // Horizontal control is suspended while crouch-holding or wall-jump locked.
    if input.axis.y != -1.0 && unlocked {
        velocity.x = input.axis.x * tuning.move_speed;
    }

    let mut jump_sound = false;
    if input.jump_pressed && unlocked {
        if state.wall_sliding {
            // Wall jump: fixed kick away from the wall plus the movement lock.
            state.locked_until = now + f64::from(tuning.after_wall_jump_delay);
            *velocity = Vec2::new(-velocity.x.signum() * WALL_JUMP_KICK, tuning.jump_force);
            state.facing = state.facing.flipped();
            state.extra_jumps_left = state.extra_jumps_left.saturating_sub(1);
            jump_sound = true;
            debug!(
                "Wall jump: normal_sign={:?}, locked until {:.2}, jumps left {}",
                sensors.wall.map(|w| w.normal_sign),
                state.locked_until,
                state.extra_jumps_left
            );
        } else if state.extra_jumps_left > 0 {
            // Ground and air jumps draw from the same pool; the grounded
            // refill above makes the first jump consume one unit of it.
            velocity.y = tuning.jump_force;
            state.extra_jumps_left -= 1;
            jump_sound = true;
            debug!("Jump: jumps left {}", state.extra_jumps_left);
        }
    }

    // Runs after jump dispatch so a same-tick wall jump keeps its upward speed.
    if state.wall_sliding {
        velocity.y = velocity.y.max(tuning.wall_slide_speed);
    }

    TickOutput {
        animation: classify(*velocity, input),
        jump_sound,
    }
}

/// Run the per-tick sensors: ground contact, facing-from-input, wall contact,
/// and wall-slide eligibility.
fn sense(
    facing: Facing,
    input: &InputSample,
    tuning: &MovementTuning,
    probes: &impl CollisionProbes,
    origin: Vec2,
    half_extents: Vec2,
) -> SensorReadings {
    let on_ground = probes.cast_ground(
        origin,
        half_extents,
        tuning.ground_probe_distance,
        tuning.ground_mask,
    );

    // Zero input keeps the previous facing.
    let facing = if input.axis.x > 0.0 {
        Facing::Right
    } else if input.axis.x < 0.0 {
        Facing::Left
    } else {
        facing
    };

    // The wall probe is only meaningful toward held intent; with no
    // horizontal input there is no contact to report.
    let wall = if input.axis.x != 0.0 {
        probes.cast_wall(
            origin,
            input.axis.x.signum(),
            tuning.wall_distance,
            tuning.wall_mask,
        )
    } else {
        None
    };

    let wall_sliding = wall.is_some() && !on_ground && input.axis.x != 0.0;

    SensorReadings {
        on_ground,
        facing,
        wall,
        wall_sliding,
    }
}

/// Classify the animation state from velocity and input.
///
/// Stateless: no transition table, re-derived from scratch every tick.
/// Vertical motion overrides the input-derived base state.
pub fn classify(velocity: Vec2, input: &InputSample) -> MovementAnimation {
    let base = if input.axis.y < 0.0 {
        MovementAnimation::Crouching
    } else if input.axis.x != 0.0 {
        MovementAnimation::Running
    } else {
        MovementAnimation::Idle
    };

    if velocity.y > AIRBORNE_THRESHOLD {
        MovementAnimation::Jumping
    } else if velocity.y < -AIRBORNE_THRESHOLD {
        MovementAnimation::Falling
    } else {
        base
    }
}
