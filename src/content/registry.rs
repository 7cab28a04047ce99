//! ContentRegistry resource providing lookups for all loaded content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::{BoundsDef, HeroDef, LevelDef};

/// Central registry for all loaded game content, with O(1) lookup by id.
#[derive(Resource, Default)]
pub struct ContentRegistry {
    pub heroes: HashMap<String, HeroDef>,
    pub levels: HashMap<String, LevelDef>,
}

impl ContentRegistry {
    /// Heroes in stable id order, for menu layout and digit hotkeys.
    pub fn heroes_ordered(&self) -> Vec<&HeroDef> {
        let mut heroes: Vec<&HeroDef> = self.heroes.values().collect();
        heroes.sort_by(|a, b| a.id.cmp(&b.id));
        heroes
    }

    /// Levels in stable id order.
    pub fn levels_ordered(&self) -> Vec<&LevelDef> {
        let mut levels: Vec<&LevelDef> = self.levels.values().collect();
        levels.sort_by(|a, b| a.id.cmp(&b.id));
        levels
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded: {} heroes, {} levels",
            self.heroes.len(),
            self.levels.len()
        )
    }

    /// Built-in heroes used when heroes.ron is missing or malformed.
    pub fn fallback_heroes() -> Vec<HeroDef> {
        vec![HeroDef {
            id: "hero_blade".to_string(),
            name: "Blade".to_string(),
            epithet: "Balanced all-rounder".to_string(),
            color: [0.85, 0.3, 0.3],
            move_speed: 150.0,
            dash_speed: 480.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
        }]
    }

    /// Built-in level used when levels.ron is missing or malformed.
    pub fn fallback_levels() -> Vec<LevelDef> {
        vec![LevelDef {
            id: "level_courtyard".to_string(),
            name: "Courtyard".to_string(),
            floor_color: [0.16, 0.2, 0.24],
            bounds: BoundsDef {
                left: -400.0,
                right: 400.0,
                bottom: -240.0,
                top: 240.0,
            },
        }]
    }
}
