//! Arena domain: movement-driven visual feedback.
//!
//! The controller publishes a scalar speed signal; here it drives a
//! walk bob, and the dash phase drives a sprite flash.

use bevy::prelude::*;

use crate::movement::{MovementController, Player, SpeedSignal};

const BOB_FREQUENCY: f32 = 18.0;
const BOB_AMPLITUDE: f32 = 0.06;
const FLASH_MIX: f32 = 0.45;

/// The hero's resting sprite color, kept so the dash flash can restore it.
#[derive(Component, Debug)]
pub(crate) struct BaseTint(pub Color);

pub(crate) fn animate_walk_bob(
    time: Res<Time>,
    mut query: Query<(&SpeedSignal, &mut Transform), With<Player>>,
) {
    for (signal, mut transform) in &mut query {
        if signal.0 > f32::EPSILON {
            let bob = (time.elapsed_secs() * BOB_FREQUENCY).sin() * BOB_AMPLITUDE;
            transform.scale.y = 1.0 + bob;
        } else {
            transform.scale.y = 1.0;
        }
    }
}

pub(crate) fn apply_dash_flash(
    mut query: Query<(&MovementController, &BaseTint, &mut Sprite), With<Player>>,
) {
    for (controller, tint, mut sprite) in &mut query {
        sprite.color = if controller.is_dashing() {
            tint.0.mix(&Color::WHITE, FLASH_MIX)
        } else {
            tint.0
        };
    }
}
