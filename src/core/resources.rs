//! Core domain: session selection and movement-gate lock sources.

use bevy::prelude::*;
use std::collections::HashSet;

/// What the player picked on the menu screens. Owned by the session and
/// passed explicitly: the arena spawner reads it, menus write it.
#[derive(Resource, Debug, Default)]
pub struct SessionSelection {
    pub level_id: Option<String>,
    pub hero_id: Option<String>,
}

impl SessionSelection {
    pub fn select_level(&mut self, level_id: impl Into<String>) {
        self.level_id = Some(level_id.into());
    }

    pub fn select_hero(&mut self, hero_id: impl Into<String>) {
        self.hero_id = Some(hero_id.into());
    }

    pub fn reset(&mut self) {
        self.level_id = None;
        self.hero_id = None;
    }
}

/// Named sources that close the movement gate. The gate stays closed
/// while any source is active, so overlapping locks (pause during the
/// intro, say) release correctly.
#[derive(Resource, Debug, Default)]
pub struct ControlLocks {
    sources: HashSet<String>,
}

impl ControlLocks {
    pub fn lock(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unlock(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }

    pub fn is_locked(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn active_sources(&self) -> Vec<&str> {
        let mut sources: Vec<&str> = self.sources.iter().map(String::as_str).collect();
        sources.sort_unstable();
        sources
    }

    pub fn clear(&mut self) {
        self.sources.clear();
    }
}
