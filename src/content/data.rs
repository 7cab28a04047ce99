//! Data definitions for the RON content files.
//!
//! These structs mirror the layout of assets/data/*.ron and are only
//! used for deserialization; the ContentRegistry provides lookup by id.

use serde::{Deserialize, Serialize};

/// Common wrapper for RON files: schema_version plus a list of items.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

/// A playable hero and its locomotion tuning (heroes.ron).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeroDef {
    pub id: String,
    pub name: String,
    pub epithet: String,
    /// Linear sRGB components.
    pub color: [f32; 3],
    pub move_speed: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
}

/// A selectable arena (levels.ron).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    pub floor_color: [f32; 3],
    pub bounds: BoundsDef,
}

/// Rectangular movement boundary of a level.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct BoundsDef {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}
