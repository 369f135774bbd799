//! Column naming for step segmentation on DataFrames

use gait_core::LegSide;
use serde::{Deserialize, Serialize};

/// Names of the input columns read and the output columns written by
/// [`GaitStepsExt::process_steps`](crate::GaitStepsExt::process_steps)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepColumns {
    /// Left ankle-position codes
    pub left_position: String,
    /// Right ankle-position codes
    pub right_position: String,
    /// Condition label per sample
    pub condition: String,

    pub transition_left: String,
    pub transition_right: String,
    pub step_number_left: String,
    pub step_number_right: String,
    pub step_complete_left: String,
    pub step_complete_right: String,
}

impl Default for StepColumns {
    fn default() -> Self {
        Self {
            left_position: "ankle_position_left".to_string(),
            right_position: "ankle_position_right".to_string(),
            condition: "condition".to_string(),
            transition_left: "transition_left".to_string(),
            transition_right: "transition_right".to_string(),
            step_number_left: "step_number_l".to_string(),
            step_number_right: "step_number_r".to_string(),
            step_complete_left: "step_complete_l".to_string(),
            step_complete_right: "step_complete_r".to_string(),
        }
    }
}

impl StepColumns {
    /// Default output names with custom input columns
    pub fn new(left_position: &str, right_position: &str, condition: &str) -> Self {
        Self {
            left_position: left_position.to_string(),
            right_position: right_position.to_string(),
            condition: condition.to_string(),
            ..Default::default()
        }
    }

    /// Position column of one leg
    pub fn position(&self, side: LegSide) -> &str {
        match side {
            LegSide::Left => &self.left_position,
            LegSide::Right => &self.right_position,
        }
    }

    /// Transition, step-number and completeness column names of one leg
    pub fn outputs(&self, side: LegSide) -> LegColumns<'_> {
        match side {
            LegSide::Left => LegColumns {
                transition: &self.transition_left,
                step_number: &self.step_number_left,
                step_complete: &self.step_complete_left,
            },
            LegSide::Right => LegColumns {
                transition: &self.transition_right,
                step_number: &self.step_number_right,
                step_complete: &self.step_complete_right,
            },
        }
    }
}

/// Output column names of one leg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegColumns<'a> {
    pub transition: &'a str,
    pub step_number: &'a str,
    pub step_complete: &'a str,
}
