//! Core domain: camera, session reset, and the pause overlay.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::{HeroChosenEvent, LevelChosenEvent};
use crate::core::resources::{ControlLocks, SessionSelection};
use crate::core::state::GameState;

const PAUSE_LOCK: &str = "pause";

/// Marker for the pause overlay root.
#[derive(Component, Debug)]
pub struct PauseOverlay;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn reset_session(mut session: ResMut<SessionSelection>) {
    session.reset();
}

/// Advances to hero select once a level has been chosen. The select
/// screens only record the choice and fire the message; the flow moves
/// here.
pub(crate) fn advance_after_level_choice(
    mut level_events: MessageReader<LevelChosenEvent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    for event in level_events.read() {
        info!("level chosen: {}", event.level_id);
        game_state.set(GameState::HeroSelect);
    }
}

/// Starts the run once a hero has been chosen.
pub(crate) fn advance_after_hero_choice(
    mut hero_events: MessageReader<HeroChosenEvent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    for event in hero_events.read() {
        info!("hero chosen: {}", event.hero_id);
        game_state.set(GameState::Playing);
    }
}

/// Esc toggles the pause overlay. Pausing closes the movement gate via
/// the lock source rather than leaving `Playing`, so the arena survives.
pub(crate) fn toggle_pause(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut locks: ResMut<ControlLocks>,
    overlay: Query<Entity, With<PauseOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    if overlay.is_empty() {
        locks.lock(PAUSE_LOCK);
        spawn_pause_overlay(&mut commands);
        info!("paused");
    } else {
        locks.unlock(PAUSE_LOCK);
        for entity in &overlay {
            commands.entity(entity).despawn();
        }
        info!("resumed");
    }
}

/// While paused, Q abandons the run and returns to the main menu.
pub(crate) fn handle_pause_quit(
    keyboard: Res<ButtonInput<KeyCode>>,
    overlay: Query<(), With<PauseOverlay>>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if overlay.is_empty() {
        return;
    }
    if keyboard.just_pressed(KeyCode::KeyQ) {
        info!("run abandoned from pause menu");
        game_state.set(GameState::MainMenu);
    }
}

/// Cleans up pause leftovers when the run ends for any reason.
pub(crate) fn close_pause_overlay(
    mut commands: Commands,
    mut locks: ResMut<ControlLocks>,
    overlay: Query<Entity, With<PauseOverlay>>,
) {
    locks.unlock(PAUSE_LOCK);
    for entity in &overlay {
        commands.entity(entity).despawn();
    }
}

fn spawn_pause_overlay(commands: &mut Commands) {
    commands
        .spawn((
            PauseOverlay,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.02, 0.05, 0.75)),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PAUSED"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));
            parent.spawn((
                Text::new("Esc to resume - Q to quit to menu"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.7)),
            ));
        });
}
