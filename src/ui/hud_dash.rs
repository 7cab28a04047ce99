//! UI domain: dash-readiness meter and run caption.

use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::SessionSelection;
use crate::movement::{MovementController, Player};

pub(crate) const DASH_METER_WIDTH: f32 = 180.0;
pub(crate) const DASH_METER_HEIGHT: f32 = 14.0;
pub(crate) const DASH_METER_PADDING: f32 = 16.0;

/// Marker for the dash meter root.
#[derive(Component)]
pub struct DashMeterUI;

/// Marker for the dash meter fill element.
#[derive(Component)]
pub struct DashMeterFill;

/// Marker for the meter's label.
#[derive(Component)]
pub struct DashMeterLabel;

pub(crate) fn spawn_dash_meter(
    mut commands: Commands,
    session: Res<SessionSelection>,
    registry: Res<ContentRegistry>,
) {
    let hero_name = session
        .hero_id
        .as_ref()
        .and_then(|id| registry.heroes.get(id))
        .map(|hero| hero.name.clone())
        .unwrap_or_else(|| "Hero".to_string());
    let level_name = session
        .level_id
        .as_ref()
        .and_then(|id| registry.levels.get(id))
        .map(|level| level.name.clone())
        .unwrap_or_else(|| "Arena".to_string());

    commands
        .spawn((
            DashMeterUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(DASH_METER_PADDING),
                bottom: Val::Px(DASH_METER_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("{} - {}", hero_name, level_name)),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.8)),
            ));

            parent
                .spawn((
                    Node {
                        width: Val::Px(DASH_METER_WIDTH),
                        height: Val::Px(DASH_METER_HEIGHT),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                    BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        DashMeterFill,
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.3, 0.8, 0.9)),
                    ));
                });

            parent.spawn((
                DashMeterLabel,
                Text::new("DASH READY"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.3, 0.8, 0.9)),
            ));
        });
}

pub(crate) fn update_dash_meter(
    player_query: Query<&MovementController, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<DashMeterFill>>,
    mut label_query: Query<(&mut Text, &mut TextColor), With<DashMeterLabel>>,
) {
    let Ok(controller) = player_query.single() else {
        return;
    };

    let ready = controller.cooldown_fraction();

    for (mut node, mut bg_color) in &mut fill_query {
        node.width = Val::Percent(ready * 100.0);
        // Dim while recharging, bright when ready.
        bg_color.0 = if ready >= 1.0 {
            Color::srgb(0.3, 0.8, 0.9)
        } else {
            Color::srgb(0.25, 0.45, 0.55)
        };
    }

    for (mut text, mut color) in &mut label_query {
        if controller.is_dashing() {
            **text = "DASHING".to_string();
            *color = TextColor(Color::srgb(0.95, 0.95, 0.95));
        } else if ready >= 1.0 {
            **text = "DASH READY".to_string();
            *color = TextColor(Color::srgb(0.3, 0.8, 0.9));
        } else {
            **text = "RECHARGING".to_string();
            *color = TextColor(Color::srgb(0.5, 0.5, 0.6));
        }
    }
}

pub(crate) fn cleanup_dash_meter(mut commands: Commands, query: Query<Entity, With<DashMeterUI>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
