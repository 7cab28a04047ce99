//! Content domain: RON-defined heroes and levels.

mod data;
mod loader;
mod registry;

#[cfg(test)]
mod tests;

pub use data::{BoundsDef, DataFile, HeroDef, LevelDef};
pub use loader::{ContentLoadError, load_all_content};
pub use registry::ContentRegistry;

use bevy::prelude::*;
use std::path::Path;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentRegistry>()
            .add_systems(Startup, load_content);
    }
}

/// Loads assets/data at startup. Missing or malformed files are logged
/// and replaced by built-in defaults so the game always boots.
fn load_content(mut registry: ResMut<ContentRegistry>) {
    let (mut loaded, errors) = load_all_content(Path::new("assets/data"));
    for error in &errors {
        warn!("{}", error);
    }

    if loaded.heroes.is_empty() {
        warn!("no heroes loaded, falling back to built-in roster");
        for hero in ContentRegistry::fallback_heroes() {
            loaded.heroes.insert(hero.id.clone(), hero);
        }
    }
    if loaded.levels.is_empty() {
        warn!("no levels loaded, falling back to built-in arena");
        for level in ContentRegistry::fallback_levels() {
            loaded.levels.insert(level.id.clone(), level);
        }
    }

    info!("{}", loaded.summary());
    *registry = loaded;
}
