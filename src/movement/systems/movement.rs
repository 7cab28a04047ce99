//! Movement domain: ECS adapters around the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::ControlLocks;
use crate::movement::{
    ArenaBounds, Facing, FrameInput, MovementController, MovementInput, Player, SpeedSignal,
};

/// Syncs the external gate onto every controller. Lock sources (pause,
/// intro, debug) are tracked in `ControlLocks`; the controller only sees
/// open/closed.
pub(crate) fn apply_control_locks(
    locks: Res<ControlLocks>,
    mut query: Query<&mut MovementController, With<Player>>,
) {
    if !locks.is_changed() {
        return;
    }

    for mut controller in &mut query {
        if locks.is_locked() && controller.can_move() {
            controller.stop();
            debug!("movement gate closed: {:?}", locks.active_sources());
        } else if !locks.is_locked() && !controller.can_move() {
            controller.allow();
            debug!("movement gate opened");
        }
    }
}

pub(crate) fn tick_controllers(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<&mut MovementController, With<Player>>,
) {
    let frame = FrameInput {
        axis: input.axis,
        dash_pressed: input.dash_just_pressed,
    };
    let dt = time.delta_secs();

    for mut controller in &mut query {
        controller.tick_frame(&frame, dt);
    }
}

/// Mirrors the sprite when facing flips. Never fires on zero input
/// because the controller leaves facing untouched then.
pub(crate) fn sync_sprite_facing(
    mut query: Query<(&MovementController, &mut Sprite), With<Player>>,
) {
    for (controller, mut sprite) in &mut query {
        sprite.flip_x = controller.facing() == Facing::Left;
    }
}

pub(crate) fn update_speed_signal(
    mut query: Query<(&MovementController, &mut SpeedSignal), With<Player>>,
) {
    for (controller, mut signal) in &mut query {
        signal.0 = controller.speed_signal();
    }
}

/// Fixed-step integration. The kinematic body is driven by velocity
/// toward the clamped target, so the physics engine performs the move
/// rather than the transform being teleported.
pub(crate) fn integrate_players(
    time: Res<Time>,
    bounds: Res<ArenaBounds>,
    mut query: Query<(&Transform, &MovementController, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (transform, controller, mut velocity) in &mut query {
        if !controller.can_move() {
            // Residual momentum is cancelled while the gate is closed.
            velocity.0 = Vec2::ZERO;
            continue;
        }

        let position = transform.translation.truncate();
        let target = controller.step_target(position, &bounds.0, dt);
        velocity.0 = (target - position) / dt;
    }
}
