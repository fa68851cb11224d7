//! Animation playback driven by the movement state signal.
//!
//! The movement core re-derives its animation state every tick and emits it
//! as a message; playback only resets frames when the state actually changes.

use bevy::prelude::*;

use crate::movement::MovementAnimation;

/// Component for animation playback on a character sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: MovementAnimation,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation should loop.
    pub looping: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: MovementAnimation::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15, // ~6-7 FPS for retro feel
            looping: true,
        }
    }
}

impl AnimationController {
    /// Set the animation state, resetting the frame if the state changed.
    /// Re-sending the current state every tick is a no-op.
    pub fn set_state(&mut self, state: MovementAnimation) {
        if self.state == state {
            return;
        }

        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;

        self.looping = matches!(state, MovementAnimation::Idle | MovementAnimation::Running);

        self.total_frames = match state {
            MovementAnimation::Idle => 4,
            MovementAnimation::Running => 6,
            MovementAnimation::Jumping => 2,
            MovementAnimation::Falling => 2,
            MovementAnimation::Crouching => 2,
        };
    }

    /// Sprite sheet suffix for the current state (e.g. "player_run").
    pub fn animation_suffix(&self) -> &'static str {
        match self.state {
            MovementAnimation::Idle => "idle",
            MovementAnimation::Running => "run",
            MovementAnimation::Jumping => "jump",
            MovementAnimation::Falling => "fall",
            MovementAnimation::Crouching => "crouch",
        }
    }
}

/// System that updates animation frames based on time. Non-looping
/// animations hold their last frame.
pub(crate) fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<&mut AnimationController>,
) {
    for mut controller in &mut query {
        controller.frame_timer += time.delta_secs();

        if controller.frame_timer >= controller.frame_duration {
            controller.frame_timer -= controller.frame_duration;

            if controller.current_frame + 1 < controller.total_frames {
                controller.current_frame += 1;
            } else if controller.looping {
                controller.current_frame = 0;
            }
        }
    }
}
