//! Core domain: state flow, session selection, pause, and menu screens.

mod events;
mod resources;
mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use events::{HeroChosenEvent, LevelChosenEvent};
pub use resources::{ControlLocks, SessionSelection};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{
    advance_after_hero_choice, advance_after_level_choice, close_pause_overlay, handle_pause_quit,
    reset_session, setup_camera, toggle_pause,
};
use crate::core::ui::hero_select::{
    cleanup_hero_select_ui, handle_hero_select_click, handle_hero_select_input,
    spawn_hero_select_ui,
};
use crate::core::ui::level_select::{
    cleanup_level_select_ui, handle_level_select_click, handle_level_select_input,
    spawn_level_select_ui,
};
use crate::core::ui::main_menu::{
    cleanup_main_menu, handle_main_menu_click, handle_main_menu_input, spawn_main_menu,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<SessionSelection>()
            .init_resource::<ControlLocks>()
            .add_message::<LevelChosenEvent>()
            .add_message::<HeroChosenEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::MainMenu), (reset_session, spawn_main_menu))
            .add_systems(OnExit(GameState::MainMenu), cleanup_main_menu)
            .add_systems(
                Update,
                (handle_main_menu_input, handle_main_menu_click)
                    .run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(OnEnter(GameState::LevelSelect), spawn_level_select_ui)
            .add_systems(OnExit(GameState::LevelSelect), cleanup_level_select_ui)
            .add_systems(
                Update,
                (
                    handle_level_select_input,
                    handle_level_select_click,
                    advance_after_level_choice,
                )
                    .chain()
                    .run_if(in_state(GameState::LevelSelect)),
            )
            .add_systems(OnEnter(GameState::HeroSelect), spawn_hero_select_ui)
            .add_systems(OnExit(GameState::HeroSelect), cleanup_hero_select_ui)
            .add_systems(
                Update,
                (
                    handle_hero_select_input,
                    handle_hero_select_click,
                    advance_after_hero_choice,
                )
                    .chain()
                    .run_if(in_state(GameState::HeroSelect)),
            )
            .add_systems(
                Update,
                (toggle_pause, handle_pause_quit).run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnExit(GameState::Playing), close_pause_overlay);
    }
}
