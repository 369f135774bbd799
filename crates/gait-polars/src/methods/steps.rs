//! Step segmentation implementations

use gait_core::{
    assign_step_numbers, CompletenessChecker, CompletenessParameters, GaitSegmentation, LegSide,
    SegmentationParameters, StepSegmenter, TransitionDetector, TransitionParameters,
};
use gait_labels::ConditionMapping;
use polars::prelude::*;
use tracing::{debug, instrument};

use super::columns::{flags, integer_codes, labels};
use super::conditions::condition_codes;
use crate::{Error, GaitStepsExt, Result, StepColumns, STEP_COMPLETE_COLUMN};

impl GaitStepsExt for DataFrame {
    fn step_transitions(
        &self,
        position_col: &str,
        condition_col: &str,
        params: &TransitionParameters,
    ) -> Result<Series> {
        let positions = integer_codes(self, position_col)?;
        let conditions = labels(self, condition_col)?;
        let transitions = TransitionDetector::new(params.clone()).detect(&positions, &conditions)?;
        Ok(Series::new("transition".into(), transitions))
    }

    fn step_numbers(&self, transition_col: &str, start_step_number: i64) -> Result<Series> {
        let transitions = flags(self, transition_col)?;
        let steps = assign_step_numbers(&transitions, start_step_number)?;
        Ok(Series::new("step_number".into(), steps))
    }

    fn step_completeness(
        &mut self,
        step_col: &str,
        position_col: &str,
        condition_col: &str,
        params: &CompletenessParameters,
    ) -> Result<Series> {
        let complete = {
            let steps = integer_codes(self, step_col)?;
            let positions = integer_codes(self, position_col)?;
            let conditions = labels(self, condition_col)?;
            CompletenessChecker::new(params.clone()).check(&steps, &positions, &conditions)?
        };

        let series = Series::new(STEP_COMPLETE_COLUMN.into(), complete);
        self.with_column(series.clone())?;
        Ok(series)
    }

    #[instrument(skip_all, fields(n_rows = self.height()))]
    fn segment_steps(
        &self,
        columns: &StepColumns,
        params: &SegmentationParameters,
    ) -> Result<GaitSegmentation> {
        let segmenter = StepSegmenter::new(params.clone())?;
        let left = integer_codes(self, &columns.left_position)?;
        let right = integer_codes(self, &columns.right_position)?;
        let conditions = labels(self, &columns.condition)?;
        Ok(segmenter.segment(&left, &right, &conditions)?)
    }

    #[instrument(skip_all, fields(n_rows = self.height()))]
    fn process_steps(
        &self,
        columns: &StepColumns,
        params: &SegmentationParameters,
    ) -> Result<DataFrame> {
        params.validate()?;
        // Fail on missing or malformed inputs before any column is written
        for name in [&columns.left_position, &columns.right_position] {
            integer_codes(self, name)?;
        }
        labels(self, &columns.condition)?;

        let mut out = self.clone();
        for side in [LegSide::Left, LegSide::Right] {
            let names = columns.outputs(side);
            let position_col = columns.position(side);

            let transitions = out
                .step_transitions(position_col, &columns.condition, &params.transition)?
                .with_name(names.transition.into());
            out.with_column(transitions)?;

            let steps = out
                .step_numbers(names.transition, params.start_step_number)?
                .with_name(names.step_number.into());
            out.with_column(steps)?;

            // The completeness pass writes a working column, keep it off `out`
            let complete = out
                .clone()
                .step_completeness(
                    names.step_number,
                    position_col,
                    &columns.condition,
                    &params.completeness,
                )?
                .with_name(names.step_complete.into());
            out.with_column(complete)?;

            debug!(%side, "step columns written");
        }
        Ok(out)
    }

    fn step_summary(
        &self,
        columns: &StepColumns,
        params: &SegmentationParameters,
    ) -> Result<DataFrame> {
        let segmentation = self.segment_steps(columns, params)?;

        let mut leg = Vec::new();
        let mut step = Vec::new();
        let mut first_row = Vec::new();
        let mut n_samples = Vec::new();
        let mut n_phases = Vec::new();
        let mut complete = Vec::new();
        let mut condition = Vec::new();

        for side in [LegSide::Left, LegSide::Right] {
            for summary in segmentation.leg(side).summaries() {
                leg.push(side.to_string());
                step.push(summary.step);
                first_row.push(summary.first_row as u64);
                n_samples.push(summary.n_samples as u64);
                n_phases.push(summary.n_phases() as u32);
                complete.push(summary.complete);
                condition.push(summary.condition.clone());
            }
        }

        let frame = DataFrame::new(vec![
            Series::new("leg".into(), leg).into(),
            Series::new("step".into(), step).into(),
            Series::new("first_row".into(), first_row).into(),
            Series::new("n_samples".into(), n_samples).into(),
            Series::new("n_phases".into(), n_phases).into(),
            Series::new("complete".into(), complete).into(),
            Series::new("condition".into(), condition).into(),
        ])?;
        Ok(frame)
    }

    fn with_condition_codes(
        &self,
        condition_col: &str,
        mapping: &ConditionMapping,
        out_col: &str,
    ) -> Result<DataFrame> {
        if out_col.is_empty() {
            return Err(Error::InvalidInput("output column name is empty".to_string()));
        }
        let codes = condition_codes(self, condition_col, mapping, out_col)?;
        let mut out = self.clone();
        out.with_column(codes)?;
        Ok(out)
    }
}
