//! Debug overlay for fast iteration (dev-tools feature).
//!
//! F1 toggles an info overlay with the controller's live state;
//! Ctrl+G toggles a "debug" movement lock to exercise the gate.

use bevy::prelude::*;

use crate::core::ControlLocks;
use crate::movement::{DashPhase, MovementController, Player};

const DEBUG_LOCK: &str = "debug";

/// Resource tracking debug overlay state.
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
    pub gate_held: bool,
}

/// Marker for the debug info overlay.
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, update_debug_info_overlay));
    }
}

fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut locks: ResMut<ControlLocks>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
        if debug_state.show_info {
            spawn_debug_info_overlay(&mut commands);
        } else {
            for entity in &existing_overlay {
                commands.entity(entity).despawn();
            }
        }
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if ctrl && keyboard.just_pressed(KeyCode::KeyG) {
        debug_state.gate_held = !debug_state.gate_held;
        if debug_state.gate_held {
            locks.lock(DEBUG_LOCK);
            info!("[DEBUG] movement gate held");
        } else {
            locks.unlock(DEBUG_LOCK);
            info!("[DEBUG] movement gate released");
        }
    }
}

fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    locks: Res<ControlLocks>,
    player_query: Query<(&Transform, &MovementController), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        return;
    }

    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let Some((transform, controller)) = player_query.iter().next() else {
        **text = "no player".to_string();
        return;
    };

    let phase = match controller.phase() {
        DashPhase::Idle => "Idle".to_string(),
        DashPhase::Dashing { remaining } => format!("Dashing ({:.2}s)", remaining),
    };

    let pos = transform.translation;
    **text = format!(
        "Pos: ({:.0}, {:.0})\nPhase: {}\nCooldown: {:.2}s\nFacing: {:?}\nGate open: {}\nLocks: {:?}",
        pos.x,
        pos.y,
        phase,
        controller.cooldown_remaining(),
        controller.facing(),
        controller.can_move(),
        locks.active_sources()
    );
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            top: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
