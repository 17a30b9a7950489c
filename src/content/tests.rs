//! Content domain: tests for tuning parsing and validation.

use std::path::Path;

use super::{
    CURRENT_SCHEMA_VERSION, CharacterTuningFile, ContentLoadError, TuningDef, TuningError,
    load_tuning_file, parse_tuning, resolve_content, validate_movement, validate_shotgun,
};
use crate::combat::ShotgunTuning;
use crate::movement::{BodyMode, MovementTuning};

fn parse(contents: &str) -> Result<CharacterTuningFile, ContentLoadError> {
    parse_tuning(contents, Path::new("test.ron"))
}

#[test]
fn test_defaults_are_valid() {
    assert!(validate_movement(&MovementTuning::default()).is_empty());
    assert!(validate_shotgun(&ShotgunTuning::default()).is_empty());
    assert!(TuningDef::default().into_tuning().is_ok());
}

#[test]
fn test_shipped_tuning_file_loads_and_validates() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(super::TUNING_PATH);
    let file = load_tuning_file(&path).expect("shipped tuning should parse");
    assert_eq!(file.schema_version, CURRENT_SCHEMA_VERSION);

    let (content, errors) = resolve_content(file);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert!(content.movement.dash_speed > 0.0);
}

#[test]
fn test_parse_partial_file_fills_defaults() {
    let file = parse(
        r#"(
            schema_version: 1,
            movement: (
                jump_force: 14.0,
                max_move_speed: (8.0, 0.0),
                dash_body_mode: Kinematic,
            ),
            animation: (
                speed_x: "speed_x",
                positive_params_only: true,
            ),
        )"#,
    )
    .expect("partial file should parse");

    assert_eq!(file.movement.jump_force, 14.0);
    assert_eq!(file.movement.max_move_speed, (8.0, 0.0));
    assert_eq!(file.movement.dash_body_mode, BodyMode::Kinematic);
    assert_eq!(file.movement.total_jumps, 1);
    assert_eq!(file.shotgun.dash_damage, 3.0);
    assert_eq!(file.animation.speed_x.as_deref(), Some("speed_x"));
    assert_eq!(file.animation.jump, None);
    assert!(file.animation.positive_params_only);
}

#[test]
fn test_malformed_file_reports_path() {
    let err = parse("(movement: (jump_force: \"high\"))").unwrap_err();
    assert!(matches!(err, ContentLoadError::Parse { .. }));
    assert!(err.to_string().contains("test.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_tuning_file(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(matches!(err, ContentLoadError::Io { .. }));
}

#[test]
fn test_validation_collects_every_error() {
    let tuning = MovementTuning {
        jump_force: -1.0,
        deceleration_percentage: 1.2,
        body_mass: f32::NAN,
        ..Default::default()
    };
    let errors = validate_movement(&tuning);

    assert_eq!(errors.len(), 3);
    assert!(errors.contains(&TuningError::Negative {
        field: "jump_force",
        value: -1.0
    }));
    assert!(errors.contains(&TuningError::DecelerationOutOfRange(1.2)));
    assert!(errors.iter().any(|e| matches!(
        e,
        TuningError::NotFinite {
            field: "body_mass",
            ..
        }
    )));
}

#[test]
fn test_infinite_tunables_rejected() {
    let def = TuningDef {
        dash_speed: f32::INFINITY,
        dash_cooldown: f32::INFINITY,
        ..Default::default()
    };
    let errors = def.into_tuning().unwrap_err();
    assert_eq!(
        errors,
        vec![
            TuningError::NotFinite {
                field: "dash_speed",
                value: f32::INFINITY
            },
            TuningError::NotFinite {
                field: "dash_cooldown",
                value: f32::INFINITY
            },
        ]
    );

    let shotgun = ShotgunTuning {
        push_power: f32::INFINITY,
        arming_delay: f32::NEG_INFINITY,
        ..Default::default()
    };
    let errors = validate_shotgun(&shotgun);
    assert_eq!(errors.len(), 2);
    assert!(
        errors
            .iter()
            .all(|e| matches!(e, TuningError::NotFinite { .. }))
    );
}

#[test]
fn test_zero_total_jumps_is_allowed() {
    let def = TuningDef {
        total_jumps: 0,
        ..Default::default()
    };
    let tuning = def.into_tuning().expect("no extra jumps is valid");
    assert_eq!(tuning.total_jumps, 0);
}

#[test]
fn test_zero_dash_duration_rejected() {
    let def = TuningDef {
        dash_duration: 0.0,
        ..Default::default()
    };
    let errors = def.into_tuning().unwrap_err();
    assert_eq!(
        errors,
        vec![TuningError::NotPositive {
            field: "dash_duration",
            value: 0.0
        }]
    );
}

#[test]
fn test_invalid_block_falls_back_to_defaults() {
    let mut file = CharacterTuningFile::default();
    file.movement.dash_speed = -5.0;
    file.movement.jump_force = 20.0;
    file.shotgun.push_power = 30.0;

    let (content, errors) = resolve_content(file);

    assert_eq!(errors.len(), 1);
    assert_eq!(content.movement.jump_force, MovementTuning::default().jump_force);
    assert_eq!(content.shotgun.push_power, 30.0);
}
