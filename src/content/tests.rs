//! Content domain: tests for RON parsing and tuning overrides.

use super::data::MovementTuningDef;
use super::loader::ron_options;
use crate::movement::MovementTuning;

#[test]
fn test_parse_full_tuning_file() {
    let source = r#"(
        move_speed: 7.0,
        jump_force: 14.0,
        extra_jumps: 1,
        wall_slide_speed: 0.3,
        wall_distance: 0.6,
        after_wall_jump_delay: 0.6,
        ground_probe_distance: 0.1,
    )"#;

    let def: MovementTuningDef = ron_options().from_str(source).unwrap();
    assert_eq!(def.move_speed, Some(7.0));
    assert_eq!(def.extra_jumps, Some(1));
    assert_eq!(def.after_wall_jump_delay, Some(0.6));
}

#[test]
fn test_partial_override_keeps_defaults() {
    let source = "(extra_jumps: 2)";
    let def: MovementTuningDef = ron_options().from_str(source).unwrap();

    let mut tuning = MovementTuning::default();
    def.apply(&mut tuning);

    assert_eq!(tuning.extra_jumps, 2);
    assert_eq!(tuning.move_speed, MovementTuning::default().move_speed);
    assert_eq!(tuning.jump_force, MovementTuning::default().jump_force);
}

#[test]
fn test_empty_def_is_a_no_op() {
    let def = MovementTuningDef::default();
    let mut tuning = MovementTuning::default();
    def.apply(&mut tuning);

    assert_eq!(tuning.wall_distance, MovementTuning::default().wall_distance);
}
