//! Arena domain: level and player spawning from the session selection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::arena::visuals::BaseTint;
use crate::arena::{ArenaEntity, IntroCountdown, IntroText};
use crate::content::{ContentRegistry, HeroDef, LevelDef};
use crate::core::{ControlLocks, SessionSelection};
use crate::movement::{
    ArenaBounds, DashTuning, MoveBounds, MovementController, Player, SpeedSignal,
};

const WALL_THICKNESS: f32 = 12.0;
const PLAYER_SIZE: f32 = 26.0;
pub(crate) const INTRO_LOCK: &str = "intro";
const INTRO_DURATION: f32 = 0.8;

/// Spawns the selected level's floor and boundary frame and publishes
/// its bounds. Falls back to the first level if the selection is stale.
pub(crate) fn spawn_arena(
    mut commands: Commands,
    session: Res<SessionSelection>,
    registry: Res<ContentRegistry>,
    mut bounds: ResMut<ArenaBounds>,
) {
    let Some(level) = pick_level(&session, &registry) else {
        warn!("no levels available, arena not spawned");
        return;
    };

    let floor_color = Color::srgb(
        level.floor_color[0],
        level.floor_color[1],
        level.floor_color[2],
    );
    let frame_color = floor_color.mix(&Color::WHITE, 0.35);

    let rect = MoveBounds {
        left: level.bounds.left,
        right: level.bounds.right,
        bottom: level.bounds.bottom,
        top: level.bounds.top,
    };
    bounds.0 = rect;

    info!("spawning arena '{}' ({})", level.name, level.id);

    let size = rect.size();
    let center = rect.center();

    // Floor, padded so the player sprite never overhangs the edge.
    commands.spawn((
        ArenaEntity,
        Sprite {
            color: floor_color,
            custom_size: Some(size + Vec2::splat(PLAYER_SIZE + WALL_THICKNESS * 2.0)),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, -1.0),
    ));

    // Boundary frame: four thin bars just outside the clamp rectangle.
    let half_w = size.x * 0.5 + PLAYER_SIZE * 0.5;
    let half_h = size.y * 0.5 + PLAYER_SIZE * 0.5;
    let horizontal = Vec2::new(size.x + PLAYER_SIZE + WALL_THICKNESS * 2.0, WALL_THICKNESS);
    let vertical = Vec2::new(WALL_THICKNESS, size.y + PLAYER_SIZE);
    for (offset, bar_size) in [
        (Vec2::new(0.0, half_h + WALL_THICKNESS * 0.5), horizontal),
        (Vec2::new(0.0, -half_h - WALL_THICKNESS * 0.5), horizontal),
        (Vec2::new(half_w + WALL_THICKNESS * 0.5, 0.0), vertical),
        (Vec2::new(-half_w - WALL_THICKNESS * 0.5, 0.0), vertical),
    ] {
        commands.spawn((
            ArenaEntity,
            Sprite {
                color: frame_color,
                custom_size: Some(bar_size),
                ..default()
            },
            Transform::from_xyz(center.x + offset.x, center.y + offset.y, 0.0),
        ));
    }
}

/// Spawns the player as a kinematic body tuned from the selected hero.
pub(crate) fn spawn_player(
    mut commands: Commands,
    session: Res<SessionSelection>,
    registry: Res<ContentRegistry>,
    bounds: Res<ArenaBounds>,
    existing_player: Query<(), With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("player already exists, skipping spawn");
        return;
    }

    let Some(hero) = pick_hero(&session, &registry) else {
        warn!("no heroes available, player not spawned");
        return;
    };

    let tuning = DashTuning {
        move_speed: hero.move_speed,
        dash_speed: hero.dash_speed,
        dash_duration: hero.dash_duration,
        dash_cooldown: hero.dash_cooldown,
    };
    let hero_color = Color::srgb(hero.color[0], hero.color[1], hero.color[2]);
    let center = bounds.0.center();

    info!(
        "spawning player: hero={}, move_speed={}, dash_speed={}",
        hero.id, hero.move_speed, hero.dash_speed
    );

    commands.spawn((
        ArenaEntity,
        Player,
        MovementController::new(tuning),
        SpeedSignal::default(),
        BaseTint(hero_color),
        Sprite {
            color: hero_color,
            custom_size: Some(Vec2::splat(PLAYER_SIZE)),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 1.0),
        RigidBody::Kinematic,
        Collider::rectangle(PLAYER_SIZE, PLAYER_SIZE),
        LockedAxes::ROTATION_LOCKED,
        LinearVelocity::default(),
    ));
}

/// Holds the movement gate closed for a short "Ready..." beat.
pub(crate) fn begin_intro(mut commands: Commands, mut locks: ResMut<ControlLocks>) {
    locks.lock(INTRO_LOCK);
    commands.insert_resource(IntroCountdown {
        remaining: INTRO_DURATION,
    });

    commands.spawn((
        ArenaEntity,
        IntroText,
        Text::new("Ready..."),
        TextFont {
            font_size: 40.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            align_self: AlignSelf::Center,
            justify_self: JustifySelf::Center,
            top: Val::Percent(30.0),
            ..default()
        },
        ZIndex(150),
    ));
}

pub(crate) fn tick_intro(
    mut commands: Commands,
    time: Res<Time>,
    countdown: Option<ResMut<IntroCountdown>>,
    mut locks: ResMut<ControlLocks>,
    intro_text: Query<Entity, With<IntroText>>,
) {
    let Some(mut countdown) = countdown else {
        return;
    };

    countdown.remaining -= time.delta_secs();
    if countdown.remaining > 0.0 {
        return;
    }

    locks.unlock(INTRO_LOCK);
    commands.remove_resource::<IntroCountdown>();
    for entity in &intro_text {
        commands.entity(entity).despawn();
    }
    info!("intro finished, movement released");
}

pub(crate) fn cleanup_arena(
    mut commands: Commands,
    mut locks: ResMut<ControlLocks>,
    query: Query<Entity, With<ArenaEntity>>,
) {
    locks.unlock(INTRO_LOCK);
    commands.remove_resource::<IntroCountdown>();
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

fn pick_level<'a>(
    session: &SessionSelection,
    registry: &'a ContentRegistry,
) -> Option<&'a LevelDef> {
    if let Some(id) = &session.level_id {
        if let Some(level) = registry.levels.get(id) {
            return Some(level);
        }
        warn!("selected level '{}' not in registry, using first", id);
    }
    registry.levels_ordered().first().copied()
}

fn pick_hero<'a>(session: &SessionSelection, registry: &'a ContentRegistry) -> Option<&'a HeroDef> {
    if let Some(id) = &session.hero_id {
        if let Some(hero) = registry.heroes.get(id) {
            return Some(hero);
        }
        warn!("selected hero '{}' not in registry, using first", id);
    }
    registry.heroes_ordered().first().copied()
}
