//! Condition-code mapping

use gait_labels::ConditionMapping;
use polars::prelude::*;

use super::columns::nullable_labels;
use crate::Result;

/// Int32 series of condition codes; unknown or null labels become null
pub(super) fn condition_codes(
    df: &DataFrame,
    condition_col: &str,
    mapping: &ConditionMapping,
    out_col: &str,
) -> Result<Series> {
    let codes: Vec<Option<i32>> = nullable_labels(df, condition_col)?
        .into_iter()
        .map(|label| label.and_then(|l| mapping.code(l)).map(i32::from))
        .collect();
    Ok(Series::new(out_col.into(), codes))
}
