//! Per-leg segmentation pipeline
//!
//! Runs transition detection, step numbering and the completeness check for
//! each leg. The legs share no state; with the `parallel` feature they are
//! segmented concurrently.

use tracing::{debug, instrument};

use crate::completeness::CompletenessChecker;
use crate::numbering::assign_step_numbers;
use crate::params::SegmentationParameters;
use crate::traits::Configurable;
use crate::transition::TransitionDetector;
use crate::types::{GaitSegmentation, LegSegmentation, LegSide, StepSummary};
use crate::{Error, Result};

/// Step segmenter for left/right ankle-position recordings
#[derive(Debug, Clone, Default)]
pub struct StepSegmenter {
    params: SegmentationParameters,
    detector: TransitionDetector,
    checker: CompletenessChecker,
}

impl StepSegmenter {
    /// Create a segmenter, rejecting inconsistent parameters
    pub fn new(params: SegmentationParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self::with_parameters(params))
    }

    /// Segment a single leg
    #[instrument(skip(self, positions, conditions), fields(n_samples = positions.len()))]
    pub fn segment_leg<S: AsRef<str>>(
        &self,
        side: LegSide,
        positions: &[i64],
        conditions: &[S],
    ) -> Result<LegSegmentation> {
        let transitions = self.detector.detect(positions, conditions)?;
        let steps = assign_step_numbers(&transitions, self.params.start_step_number)?;
        let assessments = self.checker.assess(&steps, positions, conditions)?;

        let complete: Vec<bool> = steps
            .iter()
            .map(|step| assessments.get(step).map_or(false, |a| a.complete))
            .collect();

        let summaries: Vec<StepSummary> = assessments
            .into_values()
            .map(|a| StepSummary {
                step: a.aggregate.step,
                first_row: a.aggregate.first_row,
                n_samples: a.aggregate.n_samples,
                condition: conditions[a.aggregate.first_row].as_ref().to_string(),
                codes: a.aggregate.codes,
                complete: a.complete,
            })
            .collect();

        debug!(
            %side,
            n_steps = summaries.len(),
            n_complete = summaries.iter().filter(|s| s.complete).count(),
            "leg segmented"
        );
        Ok(LegSegmentation::new(side, transitions, steps, complete, summaries))
    }

    /// Segment both legs against a shared condition column
    #[instrument(skip_all, fields(n_samples = conditions.len()))]
    pub fn segment<S: AsRef<str> + Sync>(
        &self,
        left: &[i64],
        right: &[i64],
        conditions: &[S],
    ) -> Result<GaitSegmentation> {
        Error::ensure_aligned(left.len(), right.len(), "left/right position columns")?;

        #[cfg(feature = "parallel")]
        let (left, right) = rayon::join(
            || self.segment_leg(LegSide::Left, left, conditions),
            || self.segment_leg(LegSide::Right, right, conditions),
        );
        #[cfg(not(feature = "parallel"))]
        let (left, right) = (
            self.segment_leg(LegSide::Left, left, conditions),
            self.segment_leg(LegSide::Right, right, conditions),
        );

        Ok(GaitSegmentation {
            left: left?,
            right: right?,
        })
    }
}

impl Configurable for StepSegmenter {
    type Parameters = SegmentationParameters;

    fn with_parameters(params: Self::Parameters) -> Self {
        Self {
            detector: TransitionDetector::new(params.transition.clone()),
            checker: CompletenessChecker::new(params.completeness.clone()),
            params,
        }
    }

    fn parameters(&self) -> &Self::Parameters {
        &self.params
    }

    fn set_parameters(&mut self, params: Self::Parameters) {
        *self = Self::with_parameters(params);
    }
}
