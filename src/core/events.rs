//! Core domain: messages for the menu flow.

use bevy::ecs::message::Message;

/// Fired when a level is chosen on the level select screen.
#[derive(Debug)]
pub struct LevelChosenEvent {
    pub level_id: String,
}

impl Message for LevelChosenEvent {}

/// Fired when a hero is chosen, which starts the run.
#[derive(Debug)]
pub struct HeroChosenEvent {
    pub hero_id: String,
}

impl Message for HeroChosenEvent {}
