//! Movement domain: the dash state machine and bounded integration.
//!
//! `MovementController` is plain data driven by two entry points: a
//! variable-rate `tick_frame` fed with sampled input, and a fixed-rate
//! `step_target` that produces the position the physics body should be
//! moved to. The ECS systems in `systems/` are thin adapters around it.

use bevy::prelude::*;

/// Speed and timing parameters for a hero's locomotion.
#[derive(Debug, Clone)]
pub struct DashTuning {
    pub move_speed: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
}

impl Default for DashTuning {
    fn default() -> Self {
        Self {
            move_speed: 150.0,
            dash_speed: 480.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
        }
    }
}

/// Tagged dash state. The dash timer only exists while dashing, so an
/// expired timer can never linger next to a stale flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashPhase {
    Idle,
    Dashing { remaining: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Axis-aligned rectangle the player is kept inside after every step.
#[derive(Debug, Clone, Copy)]
pub struct MoveBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl MoveBounds {
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.left, self.right),
            point.y.clamp(self.bottom, self.top),
        )
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.right - self.left, self.top - self.bottom)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.bottom + self.top) * 0.5,
        )
    }
}

impl Default for MoveBounds {
    fn default() -> Self {
        Self {
            left: -400.0,
            right: 400.0,
            bottom: -240.0,
            top: 240.0,
        }
    }
}

/// One frame's worth of sampled input.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Raw axis values, each in [-1, 1]. Diagonals are not normalized.
    pub axis: Vec2,
    /// True only on the frame the dash key went down.
    pub dash_pressed: bool,
}

#[derive(Component, Debug)]
pub struct MovementController {
    tuning: DashTuning,
    phase: DashPhase,
    cooldown_remaining: f32,
    facing: Facing,
    direction: Vec2,
    can_move: bool,
}

impl MovementController {
    pub fn new(tuning: DashTuning) -> Self {
        Self {
            tuning,
            phase: DashPhase::Idle,
            cooldown_remaining: 0.0,
            facing: Facing::Right,
            direction: Vec2::ZERO,
            can_move: true,
        }
    }

    /// Variable-rate update: samples direction, starts and expires the
    /// dash, advances the cooldown, and tracks facing. Does nothing
    /// while the gate is closed.
    pub fn tick_frame(&mut self, input: &FrameInput, dt: f32) {
        if !self.can_move {
            return;
        }

        self.direction = input.axis;

        if input.dash_pressed && self.cooldown_remaining <= 0.0 && !self.is_dashing() {
            self.phase = DashPhase::Dashing {
                remaining: self.tuning.dash_duration,
            };
            self.cooldown_remaining = self.tuning.dash_cooldown;
        }

        if let DashPhase::Dashing { remaining } = &mut self.phase {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.phase = DashPhase::Idle;
            }
        }

        // The cooldown runs in parallel with the dash itself: the next
        // dash becomes available a fixed interval after the previous one
        // started.
        if self.cooldown_remaining > 0.0 {
            self.cooldown_remaining = (self.cooldown_remaining - dt).max(0.0);
        }

        if self.direction.x > 0.0 && self.facing == Facing::Left {
            self.facing = Facing::Right;
        } else if self.direction.x < 0.0 && self.facing == Facing::Right {
            self.facing = Facing::Left;
        }
    }

    /// Fixed-rate integration: the clamped position the physics body
    /// should be moved to this step. Identity while the gate is closed.
    pub fn step_target(&self, position: Vec2, bounds: &MoveBounds, dt: f32) -> Vec2 {
        if !self.can_move {
            return position;
        }
        bounds.clamp(position + self.direction * self.current_speed() * dt)
    }

    /// Closes the gate and drops the sampled direction. Idempotent.
    pub fn stop(&mut self) {
        self.can_move = false;
        self.direction = Vec2::ZERO;
    }

    /// Reopens the gate. Idempotent.
    pub fn allow(&mut self) {
        self.can_move = true;
    }

    pub fn can_move(&self) -> bool {
        self.can_move
    }

    pub fn is_dashing(&self) -> bool {
        matches!(self.phase, DashPhase::Dashing { .. })
    }

    pub fn phase(&self) -> DashPhase {
        self.phase
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn current_speed(&self) -> f32 {
        if self.is_dashing() {
            self.tuning.dash_speed
        } else {
            self.tuning.move_speed
        }
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown_remaining
    }

    /// Fraction of the cooldown already elapsed, in [0, 1]. 1.0 means a
    /// new dash is available.
    pub fn cooldown_fraction(&self) -> f32 {
        if self.tuning.dash_cooldown <= 0.0 {
            return 1.0;
        }
        1.0 - (self.cooldown_remaining / self.tuning.dash_cooldown).clamp(0.0, 1.0)
    }

    /// Scalar movement intensity, the squared magnitude of the sampled
    /// direction. Feeds the visual layer's walk animation.
    pub fn speed_signal(&self) -> f32 {
        self.direction.length_squared()
    }
}
