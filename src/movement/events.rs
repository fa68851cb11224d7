//! Movement domain: messages emitted toward the sprite and audio collaborators.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::controller::MovementAnimation;

/// Per-tick animation state signal for one character.
#[derive(Debug)]
pub struct AnimationStateEvent {
    pub entity: Entity,
    pub state: MovementAnimation,
}

impl Message for AnimationStateEvent {}

/// Fire-and-forget jump sound trigger, one per successful jump dispatch.
#[derive(Debug)]
pub struct JumpSoundEvent;

impl Message for JumpSoundEvent {}
