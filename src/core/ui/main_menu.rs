//! Core domain: main menu screen.

use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::GameState;

/// Marker for the main menu UI root.
#[derive(Component, Debug)]
pub struct MainMenuUI;

#[derive(Component, Debug)]
pub struct MainMenuButton {
    pub action: MainMenuAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuAction {
    Play,
    Quit,
}

pub(crate) fn spawn_main_menu(mut commands: Commands) {
    let bg_color = Color::srgba(0.05, 0.05, 0.1, 1.0);
    let panel_color = Color::srgb(0.12, 0.12, 0.18);
    let text_color = Color::srgb(0.9, 0.9, 0.9);
    let muted_text = Color::srgb(0.6, 0.6, 0.7);
    let title_color = Color::srgb(0.35, 0.8, 0.9);

    commands
        .spawn((
            MainMenuUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(bg_color),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("DASHBOUND"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(8.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Outrun the arena"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(text_color),
                Node {
                    margin: UiRect::bottom(Val::Px(32.0)),
                    ..default()
                },
            ));

            spawn_menu_button(parent, "Play", MainMenuAction::Play, panel_color, text_color);
            spawn_menu_button(parent, "Quit", MainMenuAction::Quit, panel_color, text_color);

            parent.spawn((
                Text::new("Enter to play - WASD to move - Shift to dash"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(muted_text),
                Node {
                    margin: UiRect::top(Val::Px(32.0)),
                    ..default()
                },
            ));
        });
}

fn spawn_menu_button(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    action: MainMenuAction,
    panel_color: Color,
    text_color: Color,
) {
    parent
        .spawn((
            MainMenuButton { action },
            Button,
            Node {
                width: Val::Px(220.0),
                padding: UiRect::axes(Val::Px(24.0), Val::Px(12.0)),
                justify_content: JustifyContent::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BorderColor::all(Color::srgb(0.3, 0.3, 0.4)),
            BackgroundColor(panel_color),
        ))
        .with_child((
            Text::new(label),
            TextFont {
                font_size: 24.0,
                ..default()
            },
            TextColor(text_color),
        ));
}

pub(crate) fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuUI>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_main_menu_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::Space) {
        game_state.set(GameState::LevelSelect);
    }
}

pub(crate) fn handle_main_menu_click(
    mut button_query: Query<
        (
            &MainMenuButton,
            &Interaction,
            &mut BackgroundColor,
            &mut BorderColor,
        ),
        Changed<Interaction>,
    >,
    mut game_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    for (button, interaction, mut bg_color, mut border_color) in &mut button_query {
        match interaction {
            Interaction::Pressed => match button.action {
                MainMenuAction::Play => {
                    info!("play selected");
                    game_state.set(GameState::LevelSelect);
                }
                MainMenuAction::Quit => {
                    info!("quit selected");
                    exit.write(AppExit::Success);
                }
            },
            Interaction::Hovered => {
                *bg_color = BackgroundColor(Color::srgb(0.18, 0.18, 0.25));
                *border_color = BorderColor::all(Color::srgb(0.7, 0.7, 0.8));
            }
            Interaction::None => {
                *bg_color = BackgroundColor(Color::srgb(0.12, 0.12, 0.18));
                *border_color = BorderColor::all(Color::srgb(0.3, 0.3, 0.4));
            }
        }
    }
}
