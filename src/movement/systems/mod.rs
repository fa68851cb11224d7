//! Movement domain: system adapters between the ECS and the controller.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::advance_movement;
