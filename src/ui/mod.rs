//! UI domain: in-run HUD elements.

mod hud_dash;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::hud_dash::{cleanup_dash_meter, spawn_dash_meter, update_dash_meter};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_dash_meter)
            .add_systems(OnExit(GameState::Playing), cleanup_dash_meter)
            .add_systems(
                Update,
                update_dash_meter.run_if(in_state(GameState::Playing)),
            );
    }
}
