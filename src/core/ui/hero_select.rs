//! Core domain: hero selection screen. Choosing a hero starts the run.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::{GameState, HeroChosenEvent, SessionSelection};

/// Marker for the hero select UI root.
#[derive(Component, Debug)]
pub struct HeroSelectUI;

/// Button for picking a specific hero.
#[derive(Component, Debug)]
pub struct HeroSelectButton {
    pub hero_id: String,
    /// Resting border color, restored when the hover ends.
    pub base_border: Color,
}

pub(crate) fn spawn_hero_select_ui(mut commands: Commands, registry: Res<ContentRegistry>) {
    let bg_color = Color::srgba(0.05, 0.05, 0.1, 0.98);
    let panel_color = Color::srgb(0.12, 0.12, 0.18);
    let text_color = Color::srgb(0.9, 0.9, 0.9);
    let muted_text = Color::srgb(0.6, 0.6, 0.7);
    let title_color = Color::srgb(0.35, 0.8, 0.9);

    commands
        .spawn((
            HeroSelectUI,
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
                Text::new("Choose Your Hero"),
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
                .with_children(|heroes_parent| {
                    for (index, hero) in registry.heroes_ordered().iter().enumerate() {
                        spawn_hero_card(
                            heroes_parent,
                            index,
                            hero,
                            panel_color,
                            text_color,
                            muted_text,
                        );
                    }
                });

            parent.spawn((
                Text::new("Press 1-4 or click - Esc to reselect arena"),
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

fn spawn_hero_card(
    parent: &mut ChildSpawnerCommands,
    index: usize,
    hero: &crate::content::HeroDef,
    panel_color: Color,
    text_color: Color,
    muted_text: Color,
) {
    let hero_color = Color::srgb(hero.color[0], hero.color[1], hero.color[2]);
    let border = hero_color.with_alpha(0.6);
    let stats = format!(
        "Speed {:.0}\nDash {:.0} for {:.2}s\nCooldown {:.1}s",
        hero.move_speed, hero.dash_speed, hero.dash_duration, hero.dash_cooldown
    );

    parent
        .spawn((
            HeroSelectButton {
                hero_id: hero.id.clone(),
                base_border: border,
            },
            Button,
            Node {
                width: Val::Px(180.0),
                min_height: Val::Px(240.0),
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

            // Hero swatch
            card.spawn((
                Node {
                    width: Val::Px(80.0),
                    height: Val::Px(80.0),
                    margin: UiRect::bottom(Val::Px(15.0)),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BorderColor::all(hero_color),
                BackgroundColor(hero_color.with_alpha(0.3)),
            ));

            card.spawn((
                Text::new(hero.name.clone()),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(text_color),
                TextLayout::new_with_justify(Justify::Center),
                Node {
                    margin: UiRect::bottom(Val::Px(8.0)),
                    ..default()
                },
            ));

            card.spawn((
                Text::new(hero.epithet.clone()),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(muted_text),
                TextLayout::new_with_justify(Justify::Center),
                Node {
                    margin: UiRect::bottom(Val::Px(10.0)),
                    ..default()
                },
            ));

            card.spawn((
                Text::new(stats),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(muted_text),
                TextLayout::new_with_justify(Justify::Center),
            ));
        });
}

pub(crate) fn cleanup_hero_select_ui(
    mut commands: Commands,
    query: Query<Entity, With<HeroSelectUI>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_hero_select_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    registry: Res<ContentRegistry>,
    mut session: ResMut<SessionSelection>,
    mut hero_events: MessageWriter<HeroChosenEvent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        game_state.set(GameState::LevelSelect);
        return;
    }

    let digits = [
        (KeyCode::Digit1, KeyCode::Numpad1),
        (KeyCode::Digit2, KeyCode::Numpad2),
        (KeyCode::Digit3, KeyCode::Numpad3),
        (KeyCode::Digit4, KeyCode::Numpad4),
    ];

    let heroes = registry.heroes_ordered();
    for (index, (digit, numpad)) in digits.iter().enumerate() {
        if !keyboard.just_pressed(*digit) && !keyboard.just_pressed(*numpad) {
            continue;
        }
        if let Some(hero) = heroes.get(index) {
            session.select_hero(&hero.id);
            hero_events.write(HeroChosenEvent {
                hero_id: hero.id.clone(),
            });
        }
        return;
    }
}

pub(crate) fn handle_hero_select_click(
    mut button_query: Query<
        (
            &HeroSelectButton,
            &Interaction,
            &mut BackgroundColor,
            &mut BorderColor,
        ),
        Changed<Interaction>,
    >,
    mut session: ResMut<SessionSelection>,
    mut hero_events: MessageWriter<HeroChosenEvent>,
) {
    for (button, interaction, mut bg_color, mut border_color) in &mut button_query {
        match interaction {
            Interaction::Pressed => {
                session.select_hero(&button.hero_id);
                hero_events.write(HeroChosenEvent {
                    hero_id: button.hero_id.clone(),
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
