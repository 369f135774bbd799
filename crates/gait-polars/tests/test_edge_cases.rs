//! Tests for edge cases and malformed input

mod common;

use common::{create_gait_df, WALK};
use gait_core::SegmentationParameters;
use gait_polars::{Error, GaitStepsExt, StepColumns};
use polars::prelude::*;

#[test]
fn test_empty_frame() {
    let df = create_gait_df(&[], &[], &[]);

    let result = df
        .process_steps(&StepColumns::default(), &SegmentationParameters::default())
        .unwrap();
    assert_eq!(result.shape(), (0, 9));

    let summary = df
        .step_summary(&StepColumns::default(), &SegmentationParameters::default())
        .unwrap();
    assert_eq!(summary.height(), 0);
}

#[test]
fn test_missing_column() {
    let df = df![
        "ankle_position_left" => [0i64, 1],
        "condition" => [WALK; 2],
    ]
    .unwrap();

    let result = df.process_steps(&StepColumns::default(), &SegmentationParameters::default());
    assert!(matches!(result, Err(Error::InvalidColumn(name)) if name == "ankle_position_right"));
}

#[test]
fn test_non_numeric_position_column() {
    let df = df![
        "ankle_position_left" => ["a", "b"],
        "ankle_position_right" => [0i64, 1],
        "condition" => [WALK; 2],
    ]
    .unwrap();

    let result = df.process_steps(&StepColumns::default(), &SegmentationParameters::default());
    assert!(matches!(result, Err(Error::TypeMismatch { .. })));
}

#[test]
fn test_non_string_condition_column() {
    let df = df![
        "ankle_position_left" => [0i64, 1],
        "ankle_position_right" => [0i64, 1],
        "condition" => [1i64, 2],
    ]
    .unwrap();

    let result = df.process_steps(&StepColumns::default(), &SegmentationParameters::default());
    assert!(matches!(result, Err(Error::TypeMismatch { .. })));
}

#[test]
fn test_null_positions_rejected() {
    let df = df![
        "ankle_position_left" => [Some(0i64), None, Some(2)],
        "ankle_position_right" => [0i64, 1, 2],
        "condition" => [WALK; 3],
    ]
    .unwrap();

    let result = df.process_steps(&StepColumns::default(), &SegmentationParameters::default());
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_null_conditions_rejected() {
    let df = df![
        "ankle_position_left" => [0i64, 1],
        "ankle_position_right" => [0i64, 1],
        "condition" => [Some(WALK), None],
    ]
    .unwrap();

    let result = df.process_steps(&StepColumns::default(), &SegmentationParameters::default());
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_invalid_parameters() {
    let df = create_gait_df(&[0, 1], &[0, 1], &[WALK; 2]);
    let mut params = SegmentationParameters::default();
    params.completeness.min_distinct_codes = 0;

    let result = df.process_steps(&StepColumns::default(), &params);
    assert!(matches!(result, Err(Error::Core(_))));
}

#[test]
fn test_step_numbers_requires_boolean() {
    let df = df!["t" => [0i64, 1]].unwrap();
    assert!(matches!(df.step_numbers("t", 0), Err(Error::TypeMismatch { .. })));
}

#[test]
fn test_non_finite_positions_rejected() {
    let df = df![
        "ankle_position_left" => [0.0f64, f64::NAN],
        "ankle_position_right" => [0.0f64, f64::INFINITY],
        "condition" => [WALK; 2],
    ]
    .unwrap();

    let result = df.process_steps(&StepColumns::default(), &SegmentationParameters::default());
    assert!(matches!(result, Err(Error::InvalidInput(msg)) if msg.contains("non-integral")));
}

#[test]
fn test_unsigned_positions_out_of_range() {
    let df = df![
        "ankle_position_left" => [0u64, u64::MAX],
        "ankle_position_right" => [0u64, 1],
        "condition" => [WALK; 2],
    ]
    .unwrap();

    let result = df.process_steps(&StepColumns::default(), &SegmentationParameters::default());
    assert!(matches!(
        result,
        Err(Error::InvalidInput(msg)) if msg.contains("outside the Int64 range")
    ));
}

#[test]
fn test_step_numbers_overflow() {
    let df = df!["t" => [true, true]].unwrap();
    let result = df.step_numbers("t", i64::MAX - 1);
    assert!(matches!(result, Err(Error::Core(_))));
}
