//! Sprites domain: tests for animation playback.

use super::animation::AnimationController;
use crate::movement::MovementAnimation;

#[test]
fn test_set_state_resets_playback() {
    let mut controller = AnimationController::default();
    controller.current_frame = 3;
    controller.frame_timer = 0.1;

    controller.set_state(MovementAnimation::Running);

    assert_eq!(controller.state, MovementAnimation::Running);
    assert_eq!(controller.current_frame, 0);
    assert_eq!(controller.frame_timer, 0.0);
    assert!(controller.looping);
    assert_eq!(controller.total_frames, 6);
}

#[test]
fn test_resending_current_state_is_a_no_op() {
    let mut controller = AnimationController::default();
    controller.set_state(MovementAnimation::Running);
    controller.current_frame = 4;
    controller.frame_timer = 0.08;

    // The movement core re-emits the state every tick; playback must not
    // restart unless the state actually changed.
    controller.set_state(MovementAnimation::Running);

    assert_eq!(controller.current_frame, 4);
    assert_eq!(controller.frame_timer, 0.08);
}

#[test]
fn test_airborne_states_do_not_loop() {
    let mut controller = AnimationController::default();

    controller.set_state(MovementAnimation::Jumping);
    assert!(!controller.looping);

    controller.set_state(MovementAnimation::Falling);
    assert!(!controller.looping);
}

#[test]
fn test_animation_suffixes() {
    let mut controller = AnimationController::default();
    assert_eq!(controller.animation_suffix(), "idle");

    controller.set_state(MovementAnimation::Crouching);
    assert_eq!(controller.animation_suffix(), "crouch");
}
