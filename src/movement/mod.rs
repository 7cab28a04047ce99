//! Movement domain: plugin wiring and public exports.

mod components;
mod controller;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Player, SpeedSignal};
pub use controller::{DashPhase, DashTuning, Facing, FrameInput, MoveBounds, MovementController};
pub use resources::{ArenaBounds, MovementInput};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::systems::{
    apply_control_locks, integrate_players, read_input, sync_sprite_facing, tick_controllers,
    update_speed_signal,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .init_resource::<ArenaBounds>()
            .add_systems(
                Update,
                (
                    read_input,
                    apply_control_locks,
                    tick_controllers,
                    sync_sprite_facing,
                    update_speed_signal,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                FixedUpdate,
                integrate_players.run_if(in_state(GameState::Playing)),
            );
    }
}
