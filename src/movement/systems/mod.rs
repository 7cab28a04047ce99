//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_control_locks, integrate_players, sync_sprite_facing, tick_controllers,
    update_speed_signal,
};
