//! Core domain: level selection screen.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::{GameState, LevelChosenEvent, SessionSelection};

/// Marker for the level select UI root.
#[derive(Component, Debug)]
pub struct LevelSelectUI;

/// Button for picking a specific level.
#[derive(Component, Debug)]
pub struct LevelSelectButton {
    pub level_id: String,
    /// Resting border color, restored when the hover ends.
    pub base_border: Color,
}

pub(crate) fn spawn_level_select_ui(mut commands: Commands, registry: Res<ContentRegistry>) {
    let bg_color = Color::srgba(0.05, 0.05, 0.1, 0.98);
    let panel_color = Color::srgb(0.12, 0.12, 0.18);
    let text_color = Color::srgb(0.9, 0.9, 0.9);
    let muted_text = Color::srgb(0.6, 0.6, 0.7);
    let title_color = Color::srgb(0.35, 0.8, 0.9);

    commands
        .spawn((
            LevelSelectUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(bg_color),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Choose an Arena"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Stretch,
                    column_gap: Val::Px(20.0),
                    ..default()
                })
                .with_children(|levels_parent| {
                    for (index, level) in registry.levels_ordered().iter().enumerate() {
                        let floor = Color::srgb(
                            level.floor_color[0],
                            level.floor_color[1],
                            level.floor_color[2],
                        );
                        let size = level.bounds.right - level.bounds.left;
                        let shape = if size > 900.0 {
                            "Wide"
                        } else if level.bounds.top - level.bounds.bottom > size {
                            "Tall"
                        } else {
                            "Square"
                        };

                        let border = floor.with_alpha(0.6);
                        levels_parent
                            .spawn((
                                LevelSelectButton {
                                    level_id: level.id.clone(),
                                    base_border: border,
                                },
                                Button,
                                Node {
                                    width: Val::Px(200.0),
                                    min_height: Val::Px(160.0),
                                    flex_direction: FlexDirection::Column,
                                    align_items: AlignItems::Center,
                                    padding: UiRect::all(Val::Px(15.0)),
                                    border: UiRect::all(Val::Px(3.0)),
                                    ..default()
                                },
                                BorderColor::all(border),
                                BackgroundColor(panel_color),
                            ))
                            .with_children(|card| {
                                card.spawn((
                                    Text::new(format!("[{}]", index + 1)),
                                    TextFont {
                                        font_size: 14.0,
                                        ..default()
                                    },
                                    TextColor(muted_text),
                                    Node {
                                        margin: UiRect::bottom(Val::Px(10.0)),
                                        ..default()
                                    },
                                ));
                                // Miniature floor swatch
                                card.spawn((
                                    Node {
                                        width: Val::Px(100.0),
                                        height: Val::Px(60.0),
                                        margin: UiRect::bottom(Val::Px(12.0)),
                                        border: UiRect::all(Val::Px(2.0)),
                                        ..default()
                                    },
                                    BorderColor::all(floor),
                                    BackgroundColor(floor.with_alpha(0.35)),
                                ));
                                card.spawn((
                                    Text::new(level.name.clone()),
                                    TextFont {
                                        font_size: 18.0,
                                        ..default()
                                    },
                                    TextColor(text_color),
                                    TextLayout::new_with_justify(Justify::Center),
                                    Node {
                                        margin: UiRect::bottom(Val::Px(6.0)),
                                        ..default()
                                    },
                                ));
                                card.spawn((
                                    Text::new(shape),
                                    TextFont {
                                        font_size: 13.0,
                                        ..default()
                                    },
                                    TextColor(muted_text),
                                ));
                            });
                    }
                });

            parent.spawn((
                Text::new("Press 1-9 or click - Esc for main menu"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(muted_text),
                Node {
                    margin: UiRect::top(Val::Px(40.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn cleanup_level_select_ui(
    mut commands: Commands,
    query: Query<Entity, With<LevelSelectUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_level_select_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    registry: Res<ContentRegistry>,
    mut session: ResMut<SessionSelection>,
    mut level_events: MessageWriter<LevelChosenEvent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        game_state.set(GameState::MainMenu);
        return;
    }

    let digits = [
        (KeyCode::Digit1, KeyCode::Numpad1),
        (KeyCode::Digit2, KeyCode::Numpad2),
        (KeyCode::Digit3, KeyCode::Numpad3),
        (KeyCode::Digit4, KeyCode::Numpad4),
        (KeyCode::Digit5, KeyCode::Numpad5),
        (KeyCode::Digit6, KeyCode::Numpad6),
        (KeyCode::Digit7, KeyCode::Numpad7),
        (KeyCode::Digit8, KeyCode::Numpad8),
        (KeyCode::Digit9, KeyCode::Numpad9),
    ];

    let levels = registry.levels_ordered();
    for (index, (digit, numpad)) in digits.iter().enumerate() {
        if !keyboard.just_pressed(*digit) && !keyboard.just_pressed(*numpad) {
            continue;
        }
        if let Some(level) = levels.get(index) {
            session.select_level(&level.id);
            level_events.write(LevelChosenEvent {
                level_id: level.id.clone(),
            });
        }
        return;
    }
}

pub(crate) fn handle_level_select_click(
    mut button_query: Query<
        (
            &LevelSelectButton,
            &Interaction,
            &mut BackgroundColor,
            &mut BorderColor,
        ),
        Changed<Interaction>,
    >,
    mut session: ResMut<SessionSelection>,
    mut level_events: MessageWriter<LevelChosenEvent>,
) {
    for (button, interaction, mut bg_color, mut border_color) in &mut button_query {
        match interaction {
            Interaction::Pressed => {
                session.select_level(&button.level_id);
                level_events.write(LevelChosenEvent {
                    level_id: button.level_id.clone(),
                });
            }
            Interaction::Hovered => {
                *bg_color = BackgroundColor(Color::srgb(0.18, 0.18, 0.25));
                *border_color = BorderColor::all(Color::srgb(0.7, 0.7, 0.8));
            }
            Interaction::None => {
                *bg_color = BackgroundColor(Color::srgb(0.12, 0.12, 0.18));
                *border_color = BorderColor::all(button.base_border);
            }
        }
    }
}
