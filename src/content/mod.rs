//! Content domain: tuning data loaded from RON at startup.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{
    AnimationDef, ArenaDef, CURRENT_SCHEMA_VERSION, CharacterTuningFile, ShotgunDef, TuningDef,
};
pub use loader::{ContentLoadError, load_tuning_file, parse_tuning};
pub use validation::{MAX_DECELERATION_PERCENTAGE, TuningError, validate_movement, validate_shotgun};

use std::path::Path;

use bevy::prelude::*;

use crate::arena::ArenaConfig;
use crate::combat::ShotgunTuning;
use crate::movement::{AnimationParams, MovementTuning};

/// Location of the tuning file, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/character_tuning.ron";

/// Validated tuning ready to be inserted as resources.
#[derive(Debug, Clone, Default)]
pub struct LoadedContent {
    pub movement: MovementTuning,
    pub shotgun: ShotgunTuning,
    pub animation: AnimationParams,
    pub arena: ArenaConfig,
}

/// Turn a parsed file into resources. A block that fails validation is
/// replaced by its defaults; the errors are returned alongside.
pub fn resolve_content(file: CharacterTuningFile) -> (LoadedContent, Vec<TuningError>) {
    let mut errors = Vec::new();

    let movement = file.movement.into_tuning().unwrap_or_else(|block_errors| {
        errors.extend(block_errors);
        MovementTuning::default()
    });
    let shotgun = file.shotgun.into_tuning().unwrap_or_else(|block_errors| {
        errors.extend(block_errors);
        ShotgunTuning::default()
    });

    let content = LoadedContent {
        movement,
        shotgun,
        animation: file.animation.into(),
        arena: file.arena.into(),
    };
    (content, errors)
}

/// Load, validate, and resolve the tuning file, logging every problem.
/// Never fails: anything unusable falls back to defaults.
pub fn load_content(path: &Path) -> LoadedContent {
    let file = match load_tuning_file(path) {
        Ok(file) => file,
        Err(e) => {
            warn!("{}; using default tuning", e);
            CharacterTuningFile::default()
        }
    };

    if file.schema_version != CURRENT_SCHEMA_VERSION {
        warn!(
            "Tuning schema version {} does not match expected {}",
            file.schema_version, CURRENT_SCHEMA_VERSION
        );
    }

    let (content, errors) = resolve_content(file);
    for e in &errors {
        error!("Tuning validation error: {}", e);
    }

    info!(
        "Loaded tuning: dash_speed={}, jump_force={}, total_jumps={}, dummies={}",
        content.movement.dash_speed,
        content.movement.jump_force,
        content.movement.total_jumps,
        content.arena.dummy_count
    );
    content
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let content = load_content(Path::new(TUNING_PATH));
        app.insert_resource(content.movement)
            .insert_resource(content.shotgun)
            .insert_resource(content.animation)
            .insert_resource(content.arena);
    }
}
