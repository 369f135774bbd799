//! Step segmentation for labelled gait-cycle recordings
//!
//! This crate bundles the workspace crates behind one dependency:
//!
//! - [`gait_core`] - transition detection, step numbering and completeness checks
//!   over plain slices
//! - [`gait_labels`] - activity, gait-state, leg and joint vocabularies, the
//!   condition-code mapping and plot palettes
//! - [`gait_polars`] - the [`GaitStepsExt`] extension trait for DataFrames
//!
//! # Example
//!
//! ```rust
//! use gait_steps::{LegSide, StepSegmenter};
//!
//! let left = [0, 1, 2, 3, 0, 1, 2, 3];
//! let right = [2, 3, 0, 1, 2, 3, 0, 1];
//! let conditions = ["transparent_WALKING"; 8];
//!
//! let result = StepSegmenter::default().segment(&left, &right, &conditions).unwrap();
//! assert_eq!(result.leg(LegSide::Right).steps(), &[0, 0, 1, 1, 1, 1, 2, 2]);
//! ```

pub use gait_core;
pub use gait_labels;
pub use gait_polars;

pub use gait_core::{
    BoundaryReference, CompletenessParameters, GaitSegmentation, LegSegmentation, LegSide,
    SegmentationParameters, StepSegmenter, StepSummary, TransitionParameters,
};
pub use gait_labels::{Activity, Condition, ConditionMapping, GaitState, JointName, Leg, Regime};
pub use gait_polars::{GaitStepsExt, StepColumns};
