//! Data definitions for RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization.

use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

/// Mirrors assets/data/movement.ron. Every field is optional so a file can
/// override only the knobs it cares about; the rest keep their defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MovementTuningDef {
    pub move_speed: Option<f32>,
    pub jump_force: Option<f32>,
    pub extra_jumps: Option<u8>,
    pub wall_slide_speed: Option<f32>,
    pub wall_distance: Option<f32>,
    pub after_wall_jump_delay: Option<f32>,
    pub ground_probe_distance: Option<f32>,
}

impl MovementTuningDef {
    /// Apply the overrides present in this def onto `tuning`.
    pub fn apply(&self, tuning: &mut MovementTuning) {
        if let Some(v) = self.move_speed {
            tuning.move_speed = v;
        }
        if let Some(v) = self.jump_force {
            tuning.jump_force = v;
        }
        if let Some(v) = self.extra_jumps {
            tuning.extra_jumps = v;
        }
        if let Some(v) = self.wall_slide_speed {
            tuning.wall_slide_speed = v;
        }
        if let Some(v) = self.wall_distance {
            tuning.wall_distance = v;
        }
        if let Some(v) = self.after_wall_jump_delay {
            tuning.after_wall_jump_delay = v;
        }
        if let Some(v) = self.ground_probe_distance {
            tuning.ground_probe_distance = v;
        }
    }
}
