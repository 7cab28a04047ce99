//! Movement domain: input and boundary resources.

use bevy::prelude::*;

use crate::movement::MoveBounds;

/// Raw input sampled once per rendered frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub dash_just_pressed: bool,
}

/// The rectangle the player is clamped to, set from the selected level
/// when the arena spawns.
#[derive(Resource, Debug, Default)]
pub struct ArenaBounds(pub MoveBounds);
