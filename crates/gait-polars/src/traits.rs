//! Extension trait for step segmentation on Polars DataFrames

use gait_core::{
    CompletenessParameters, GaitSegmentation, SegmentationParameters, TransitionParameters,
};
use gait_labels::ConditionMapping;
use polars::prelude::*;

use crate::{Result, StepColumns};

/// Name of the working column added by [`GaitStepsExt::step_completeness`]
pub const STEP_COMPLETE_COLUMN: &str = "step_complete";

/// Extension trait for gait step segmentation on Polars DataFrames
pub trait GaitStepsExt {
    /// Flag samples where a new step begins
    ///
    /// # Arguments
    /// * `position_col` - Ankle-position code column of one leg
    /// * `condition_col` - Condition label column
    /// * `params` - Prior codes and undefined marker
    ///
    /// # Returns
    /// Boolean series named `transition`, one value per row
    fn step_transitions(
        &self,
        position_col: &str,
        condition_col: &str,
        params: &TransitionParameters,
    ) -> Result<Series>;

    /// Number steps from a transition column
    ///
    /// # Arguments
    /// * `transition_col` - Boolean transition column
    /// * `start_step_number` - Step index before the first transition
    ///
    /// # Returns
    /// Int64 series named `step_number`
    fn step_numbers(&self, transition_col: &str, start_step_number: i64) -> Result<Series>;

    /// Mark each row complete or incomplete according to its step
    ///
    /// This adds the working column [`STEP_COMPLETE_COLUMN`] to the frame
    /// (replacing any column of that name) and returns it. Call it on a clone
    /// when the caller's frame must stay untouched.
    ///
    /// # Arguments
    /// * `step_col` - Step index column
    /// * `position_col` - Ankle-position code column of the same leg
    /// * `condition_col` - Condition label column, consulted for the boundary exception
    /// * `params` - Completeness thresholds and boundary reference
    fn step_completeness(
        &mut self,
        step_col: &str,
        position_col: &str,
        condition_col: &str,
        params: &CompletenessParameters,
    ) -> Result<Series>;

    /// Segment both legs and return the slice-level result
    fn segment_steps(
        &self,
        columns: &StepColumns,
        params: &SegmentationParameters,
    ) -> Result<GaitSegmentation>;

    /// Run the full pipeline for both legs
    ///
    /// # Returns
    /// A copy of the frame with transition, step-number and completeness
    /// columns for each leg, named by `columns`
    fn process_steps(
        &self,
        columns: &StepColumns,
        params: &SegmentationParameters,
    ) -> Result<DataFrame>;

    /// Per-step summary table
    ///
    /// # Returns
    /// DataFrame with one row per leg and step and columns `leg`, `step`,
    /// `first_row`, `n_samples`, `n_phases`, `complete` and `condition`
    fn step_summary(
        &self,
        columns: &StepColumns,
        params: &SegmentationParameters,
    ) -> Result<DataFrame>;

    /// Map condition labels to integer codes
    ///
    /// # Returns
    /// A copy of the frame with an Int32 column `out_col`; labels missing
    /// from `mapping` become null
    fn with_condition_codes(
        &self,
        condition_col: &str,
        mapping: &ConditionMapping,
        out_col: &str,
    ) -> Result<DataFrame>;
}
