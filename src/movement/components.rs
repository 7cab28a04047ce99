//! Movement domain: player marker and animation signal components.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Scalar movement intensity published every frame for the visual layer
/// (walk bob, HUD). Mirrors the controller's `speed_signal`.
#[derive(Component, Debug, Default)]
pub struct SpeedSignal(pub f32);
