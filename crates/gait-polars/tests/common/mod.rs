//! Common test utilities for gait-polars tests

#![allow(dead_code)]

use polars::prelude::*;

pub const WALK: &str = "transparent_WALKING";
pub const UNDEF: &str = "transparent_UNDEFINED";

/// Helper function to create a gait DataFrame with the default column names
pub fn create_gait_df(left: &[i64], right: &[i64], conditions: &[&str]) -> DataFrame {
    df![
        "ankle_position_left" => left,
        "ankle_position_right" => right,
        "condition" => conditions,
    ]
    .unwrap()
}

/// Helper function to extract a boolean column
pub fn bools(df: &DataFrame, name: &str) -> Vec<bool> {
    df.column(name)
        .unwrap()
        .bool()
        .unwrap()
        .into_no_null_iter()
        .collect()
}

/// Helper function to extract an Int64 column
pub fn ints(df: &DataFrame, name: &str) -> Vec<i64> {
    df.column(name)
        .unwrap()
        .i64()
        .unwrap()
        .into_no_null_iter()
        .collect()
}
