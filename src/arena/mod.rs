//! Arena domain: in-run level setup, intro gate, and visuals.

mod spawn;
mod visuals;

use bevy::prelude::*;

use crate::arena::spawn::{begin_intro, cleanup_arena, spawn_arena, spawn_player, tick_intro};
use crate::arena::visuals::{animate_walk_bob, apply_dash_flash};
use crate::core::GameState;

/// Marker for everything that lives only while a run is active.
#[derive(Component, Debug)]
pub struct ArenaEntity;

/// Marker for the "Ready..." banner.
#[derive(Component, Debug)]
pub struct IntroText;

/// Countdown until the intro lock releases the movement gate.
#[derive(Resource, Debug)]
pub struct IntroCountdown {
    pub remaining: f32,
}

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameState::Playing),
            (spawn_arena, spawn_player, begin_intro).chain(),
        )
        .add_systems(OnExit(GameState::Playing), cleanup_arena)
        .add_systems(
            Update,
            (tick_intro, animate_walk_bob, apply_dash_flash)
                .run_if(in_state(GameState::Playing)),
        );
    }
}
