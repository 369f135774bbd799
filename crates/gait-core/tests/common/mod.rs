//! Common test utilities

#![allow(dead_code)]

pub const WALK: &str = "transparent_WALKING";
pub const RAMP: &str = "SM_RAMPS_UP";
pub const UNDEF: &str = "transparent_UNDEFINED";

/// Build a recording from `(label, positions)` segments laid end to end
pub fn recording(segments: &[(&str, Vec<i64>)]) -> (Vec<i64>, Vec<String>) {
    let mut positions = Vec::new();
    let mut conditions = Vec::new();
    for (label, codes) in segments {
        positions.extend_from_slice(codes);
        conditions.extend(std::iter::repeat(label.to_string()).take(codes.len()));
    }
    (positions, conditions)
}

/// Repeat a full 0-1-2-3 gait cycle `n` times
pub fn cycles(n: usize) -> Vec<i64> {
    (0..n).flat_map(|_| [0, 0, 1, 1, 2, 2, 3, 3]).collect()
}
