//! Movement domain: unit tests for the dash state machine.

use bevy::prelude::*;

use super::{DashPhase, DashTuning, Facing, FrameInput, MoveBounds, MovementController};

fn tuning() -> DashTuning {
    DashTuning {
        move_speed: 2.5,
        dash_speed: 8.0,
        dash_duration: 0.2,
        dash_cooldown: 1.0,
    }
}

fn wide_bounds() -> MoveBounds {
    MoveBounds {
        left: -1000.0,
        right: 1000.0,
        bottom: -1000.0,
        top: 1000.0,
    }
}

fn frame(axis: Vec2, dash: bool) -> FrameInput {
    FrameInput {
        axis,
        dash_pressed: dash,
    }
}

#[test]
fn dash_starts_on_trigger_and_expires() {
    let mut ctrl = MovementController::new(tuning());
    assert!(!ctrl.is_dashing());

    ctrl.tick_frame(&frame(Vec2::X, true), 0.016);
    assert!(ctrl.is_dashing());
    assert_eq!(ctrl.current_speed(), 8.0);

    // Run out the dash duration.
    for _ in 0..20 {
        ctrl.tick_frame(&frame(Vec2::X, false), 0.016);
    }
    assert!(!ctrl.is_dashing());
    assert_eq!(ctrl.phase(), DashPhase::Idle);
    assert_eq!(ctrl.current_speed(), 2.5);
}

#[test]
fn dash_timer_is_dropped_when_it_expires() {
    let mut ctrl = MovementController::new(tuning());
    ctrl.tick_frame(&frame(Vec2::X, true), 0.016);

    // Whatever dt sequence runs, a Dashing phase always carries a
    // positive remainder; expiry switches to Idle in the same tick.
    for dt in [0.016, 0.3, 0.001, 0.05] {
        ctrl.tick_frame(&frame(Vec2::X, false), dt);
        if let DashPhase::Dashing { remaining } = ctrl.phase() {
            assert!(remaining > 0.0);
        }
    }
    assert_eq!(ctrl.phase(), DashPhase::Idle);
}

#[test]
fn trigger_is_ignored_while_dashing_or_cooling_down() {
    let mut ctrl = MovementController::new(tuning());
    ctrl.tick_frame(&frame(Vec2::X, true), 0.01);
    let DashPhase::Dashing { remaining } = ctrl.phase() else {
        panic!("dash should have started");
    };

    // Re-trigger mid-dash: the running timer is untouched.
    ctrl.tick_frame(&frame(Vec2::X, true), 0.01);
    let remaining_after = match ctrl.phase() {
        DashPhase::Dashing { remaining } => remaining,
        DashPhase::Idle => panic!("dash should still be running"),
    };
    assert!(remaining_after < remaining);

    // Finish the dash, then re-trigger during cooldown.
    for _ in 0..30 {
        ctrl.tick_frame(&frame(Vec2::X, false), 0.01);
    }
    assert!(!ctrl.is_dashing());
    assert!(ctrl.cooldown_remaining() > 0.0);
    ctrl.tick_frame(&frame(Vec2::X, true), 0.01);
    assert!(!ctrl.is_dashing());
}

#[test]
fn stop_movement_freezes_position_and_input() {
    let bounds = wide_bounds();
    let mut ctrl = MovementController::new(tuning());
    ctrl.tick_frame(&frame(Vec2::new(1.0, 1.0), false), 0.01);
    assert!(ctrl.direction() != Vec2::ZERO);

    ctrl.stop();
    assert!(!ctrl.can_move());
    assert_eq!(ctrl.direction(), Vec2::ZERO);

    let pos = Vec2::new(3.0, -2.0);
    // Input keeps arriving but the gate is closed.
    ctrl.tick_frame(&frame(Vec2::X, true), 0.01);
    assert_eq!(ctrl.step_target(pos, &bounds, 0.02), pos);
    assert!(!ctrl.is_dashing());

    ctrl.allow();
    ctrl.tick_frame(&frame(Vec2::X, false), 0.01);
    assert!(ctrl.step_target(pos, &bounds, 0.02).x > pos.x);
}

#[test]
fn stop_and_allow_are_idempotent() {
    let mut ctrl = MovementController::new(tuning());
    ctrl.stop();
    ctrl.stop();
    assert!(!ctrl.can_move());
    ctrl.allow();
    ctrl.allow();
    assert!(ctrl.can_move());
}

#[test]
fn position_stays_inside_bounds() {
    let bounds = MoveBounds {
        left: -5.0,
        right: 5.0,
        bottom: -3.0,
        top: 3.0,
    };
    let mut ctrl = MovementController::new(tuning());
    let mut pos = Vec2::ZERO;

    // Push hard into the top-right corner, dashing.
    ctrl.tick_frame(&frame(Vec2::new(1.0, 1.0), true), 0.02);
    for _ in 0..500 {
        ctrl.tick_frame(&frame(Vec2::new(1.0, 1.0), false), 0.02);
        pos = ctrl.step_target(pos, &bounds, 0.02);
        assert!(pos.x >= bounds.left && pos.x <= bounds.right);
        assert!(pos.y >= bounds.bottom && pos.y <= bounds.top);
    }
    assert_eq!(pos, Vec2::new(5.0, 3.0));
}

#[test]
fn dash_timing_scenario() {
    // moveSpeed 2.5, dashSpeed 8, dashDuration 0.2s, dashCooldown 1s,
    // stepped at 10 ms with frame tick and integration interleaved.
    let dt = 0.01_f32;
    let bounds = wide_bounds();
    let mut ctrl = MovementController::new(tuning());
    let mut pos = Vec2::ZERO;

    let run = |ctrl: &mut MovementController, pos: &mut Vec2, frames: usize, dash: bool| {
        for i in 0..frames {
            ctrl.tick_frame(&frame(Vec2::X, dash && i == 0), dt);
            *pos = ctrl.step_target(*pos, &bounds, dt);
        }
    };

    // Trigger at t=0; by t=0.1 the position reflects dash speed.
    run(&mut ctrl, &mut pos, 10, true);
    assert!((pos.x - 0.8).abs() < 1e-3, "pos.x = {}", pos.x);

    // By t=0.25 the dash has expired and normal speed applies.
    run(&mut ctrl, &mut pos, 15, false);
    assert!(!ctrl.is_dashing());
    let before = pos.x;
    run(&mut ctrl, &mut pos, 10, false);
    assert!((pos.x - before - 2.5 * 0.1).abs() < 1e-3);

    // A second trigger at t=0.5 is swallowed by the cooldown.
    run(&mut ctrl, &mut pos, 15, false);
    run(&mut ctrl, &mut pos, 1, true);
    assert!(!ctrl.is_dashing());
    assert!(ctrl.cooldown_remaining() > 0.0);

    // At t=1.01 the cooldown has fully elapsed and a new dash starts.
    run(&mut ctrl, &mut pos, 50, false);
    assert!(ctrl.cooldown_remaining() <= f32::EPSILON);
    run(&mut ctrl, &mut pos, 1, true);
    assert!(ctrl.is_dashing());
}

#[test]
fn facing_flips_only_on_sign_change() {
    let mut ctrl = MovementController::new(tuning());
    assert_eq!(ctrl.facing(), Facing::Right);

    ctrl.tick_frame(&frame(Vec2::ZERO, false), 0.016);
    assert_eq!(ctrl.facing(), Facing::Right);

    ctrl.tick_frame(&frame(Vec2::new(-1.0, 0.0), false), 0.016);
    assert_eq!(ctrl.facing(), Facing::Left);

    // Zero input keeps the last facing.
    ctrl.tick_frame(&frame(Vec2::ZERO, false), 0.016);
    assert_eq!(ctrl.facing(), Facing::Left);

    ctrl.tick_frame(&frame(Vec2::new(1.0, 0.0), false), 0.016);
    assert_eq!(ctrl.facing(), Facing::Right);
}

#[test]
fn diagonal_input_is_not_normalized() {
    let bounds = wide_bounds();
    let mut ctrl = MovementController::new(tuning());
    ctrl.tick_frame(&frame(Vec2::new(1.0, 1.0), false), 0.016);

    let step = ctrl.step_target(Vec2::ZERO, &bounds, 1.0);
    assert!((step.length() - 2.5 * std::f32::consts::SQRT_2).abs() < 1e-3);
}

#[test]
fn cooldown_fraction_reports_readiness() {
    let mut ctrl = MovementController::new(tuning());
    assert_eq!(ctrl.cooldown_fraction(), 1.0);

    ctrl.tick_frame(&frame(Vec2::X, true), 0.0);
    assert_eq!(ctrl.cooldown_fraction(), 0.0);

    for _ in 0..50 {
        ctrl.tick_frame(&frame(Vec2::X, false), 0.01);
    }
    let halfway = ctrl.cooldown_fraction();
    assert!(halfway > 0.4 && halfway < 0.6, "fraction = {halfway}");
}
