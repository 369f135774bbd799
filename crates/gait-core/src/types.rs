//! Result types produced by the segmenter

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which leg a sequence belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegSide {
    Left,
    Right,
}

impl fmt::Display for LegSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegSide::Left => write!(f, "left"),
            LegSide::Right => write!(f, "right"),
        }
    }
}

/// Summary of one detected step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSummary {
    pub step: i64,
    pub first_row: usize,
    pub n_samples: usize,
    /// Distinct ankle-position codes visited
    pub codes: BTreeSet<i64>,
    pub complete: bool,
    /// Condition label at the step's first row
    pub condition: String,
}

impl StepSummary {
    /// Number of distinct gait phases visited
    pub fn n_phases(&self) -> usize {
        self.codes.len()
    }
}

impl fmt::Display for StepSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step {{ index: {}, rows: {}..{}, phases: {:?}, complete: {}, condition: {} }}",
            self.step,
            self.first_row,
            self.first_row + self.n_samples,
            self.codes,
            self.complete,
            self.condition
        )
    }
}

/// Derived columns and step summaries for one leg
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegSegmentation {
    side: LegSide,
    transitions: Vec<bool>,
    steps: Vec<i64>,
    complete: Vec<bool>,
    summaries: Vec<StepSummary>,
}

impl LegSegmentation {
    pub fn new(
        side: LegSide,
        transitions: Vec<bool>,
        steps: Vec<i64>,
        complete: Vec<bool>,
        summaries: Vec<StepSummary>,
    ) -> Self {
        Self {
            side,
            transitions,
            steps,
            complete,
            summaries,
        }
    }

    pub fn side(&self) -> LegSide {
        self.side
    }

    /// Per-sample transition flags
    pub fn transitions(&self) -> &[bool] {
        &self.transitions
    }

    /// Per-sample step indices
    pub fn steps(&self) -> &[i64] {
        &self.steps
    }

    /// Per-sample completeness flags
    pub fn complete(&self) -> &[bool] {
        &self.complete
    }

    /// One summary per step, ordered by step index
    pub fn summaries(&self) -> &[StepSummary] {
        &self.summaries
    }

    pub fn sample_count(&self) -> usize {
        self.steps.len()
    }

    pub fn step_count(&self) -> usize {
        self.summaries.len()
    }

    pub fn complete_step_count(&self) -> usize {
        self.summaries.iter().filter(|s| s.complete).count()
    }

    /// Fraction of steps judged complete, 0.0 when there are no steps
    pub fn completeness_ratio(&self) -> f64 {
        if self.summaries.is_empty() {
            0.0
        } else {
            self.complete_step_count() as f64 / self.summaries.len() as f64
        }
    }
}

impl fmt::Display for LegSegmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Leg: {}", self.side)?;
        writeln!(f, "  Samples: {}", self.sample_count())?;
        writeln!(
            f,
            "  Steps: {} ({} complete)",
            self.step_count(),
            self.complete_step_count()
        )?;
        for summary in &self.summaries {
            writeln!(f, "    {}", summary)?;
        }
        Ok(())
    }
}

/// Segmentation of both legs over the same recording
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaitSegmentation {
    pub left: LegSegmentation,
    pub right: LegSegmentation,
}

impl GaitSegmentation {
    pub fn leg(&self, side: LegSide) -> &LegSegmentation {
        match side {
            LegSide::Left => &self.left,
            LegSide::Right => &self.right,
        }
    }
}

impl fmt::Display for GaitSegmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gait Segmentation Result:")?;
        write!(f, "{}", self.left)?;
        write!(f, "{}", self.right)
    }
}
