//! Step numbering from transition flags

use crate::{Error, Result};

/// Convert transition flags into per-sample step indices
///
/// `step[i]` is `start_step_number` plus the number of transitions in
/// `transitions[0..=i]`. Fails with [`Error::InvalidParameter`] when the
/// count would run past `i64::MAX`.
pub fn assign_step_numbers(transitions: &[bool], start_step_number: i64) -> Result<Vec<i64>> {
    let mut step = start_step_number;
    transitions
        .iter()
        .map(|&t| -> Result<i64> {
            if t {
                step = step.checked_add(1).ok_or_else(|| {
                    Error::InvalidParameter(format!(
                        "step numbering from {} overflows i64",
                        start_step_number
                    ))
                })?;
            }
            Ok(step)
        })
        .collect()
}
