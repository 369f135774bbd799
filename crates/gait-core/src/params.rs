//! Parameter types for the segmentation stages
//!
//! Every stage is configured through a plain serde-friendly struct so that
//! label vocabularies and thresholds can be injected from the caller instead
//! of being fixed inside the algorithms.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Substring that marks a condition label as not yet defined
pub const DEFAULT_UNDEFINED_MARKER: &str = "UNDEFINED";

/// Ankle-position code of the resting phase
pub const REST_CODE: i64 = 0;

/// Transition detection parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionParameters {
    /// Codes that may precede a return to [`REST_CODE`] at a step boundary
    pub prior_codes: BTreeSet<i64>,
    /// Substring identifying undefined condition labels
    pub undefined_marker: String,
}

impl Default for TransitionParameters {
    fn default() -> Self {
        Self {
            prior_codes: [1, 2, 3].into_iter().collect(),
            undefined_marker: DEFAULT_UNDEFINED_MARKER.to_string(),
        }
    }
}

/// Which row's condition decides the boundary exception for a step that
/// visits exactly `min_distinct_codes` codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryReference {
    /// The row before the first row of the given step index, shared by all steps
    FixedStep(i64),
    /// The row before the step's own first row
    OwnStep,
}

impl Default for BoundaryReference {
    fn default() -> Self {
        Self::FixedStep(1)
    }
}

/// Completeness check parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletenessParameters {
    /// Steps with fewer distinct codes are incomplete, steps with more are complete
    pub min_distinct_codes: usize,
    /// Code set a step at exactly `min_distinct_codes` must match to qualify
    /// for the boundary exception
    pub boundary_codes: BTreeSet<i64>,
    /// Row consulted for the boundary exception
    pub boundary_reference: BoundaryReference,
    /// Substring identifying undefined condition labels
    pub undefined_marker: String,
}

impl Default for CompletenessParameters {
    fn default() -> Self {
        Self {
            min_distinct_codes: 3,
            boundary_codes: [1, 2, 3].into_iter().collect(),
            boundary_reference: BoundaryReference::default(),
            undefined_marker: DEFAULT_UNDEFINED_MARKER.to_string(),
        }
    }
}

/// Parameters for a full per-leg segmentation run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationParameters {
    pub transition: TransitionParameters,
    pub completeness: CompletenessParameters,
    /// Step index assigned to samples before the first transition
    pub start_step_number: i64,
}

impl SegmentationParameters {
    /// Parse parameters from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidParameter(format!("segmentation parameters: {e}")))?;
        params.validate()?;
        Ok(params)
    }

    /// Check that the parameters describe a usable configuration
    pub fn validate(&self) -> Result<()> {
        self.transition.validate()?;
        self.completeness.validate()
    }
}

impl TransitionParameters {
    pub fn validate(&self) -> Result<()> {
        if self.undefined_marker.is_empty() {
            return Err(Error::InvalidParameter(
                "undefined_marker must not be empty".to_string(),
            ));
        }
        if self.prior_codes.contains(&REST_CODE) {
            return Err(Error::InvalidParameter(format!(
                "prior_codes must not contain the rest code {REST_CODE}"
            )));
        }
        Ok(())
    }
}

impl CompletenessParameters {
    pub fn validate(&self) -> Result<()> {
        if self.min_distinct_codes == 0 {
            return Err(Error::InvalidParameter(
                "min_distinct_codes must be at least 1".to_string(),
            ));
        }
        if self.boundary_codes.len() != self.min_distinct_codes {
            return Err(Error::InvalidParameter(format!(
                "boundary_codes has {} codes but min_distinct_codes is {}",
                self.boundary_codes.len(),
                self.min_distinct_codes
            )));
        }
        if self.undefined_marker.is_empty() {
            return Err(Error::InvalidParameter(
                "undefined_marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
