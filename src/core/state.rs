//! Core domain: game state definitions for the menu flow.

use bevy::prelude::*;

/// One state per menu screen, plus the arena itself. Pausing keeps
/// `Playing` and closes the movement gate instead of leaving the state,
/// so the arena stays spawned.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    MainMenu,
    LevelSelect,
    HeroSelect,
    Playing,
}
