//! Step segmentation for discretised gait recordings
//!
//! This crate turns per-sample ankle-position codes and condition labels into
//! discrete steps. Each leg goes through three stages:
//!
//! 1. **Transition detection** - flags samples where a new step begins
//! 2. **Step numbering** - running count of transitions, offset by a start value
//! 3. **Completeness check** - groups rows by step and judges each step on the
//!    distinct codes it visits
//!
//! Everything operates on plain slices; label vocabularies and dataframe
//! integration live in `gait-labels` and `gait-polars`.
//!
//! # Example
//!
//! ```rust
//! use gait_core::{LegSide, StepSegmenter};
//!
//! let positions = [0, 1, 2, 3, 0, 1, 2, 3, 0];
//! let conditions = ["SM_WALKING"; 9];
//!
//! let segmenter = StepSegmenter::default();
//! let leg = segmenter.segment_leg(LegSide::Left, &positions, &conditions).unwrap();
//!
//! assert_eq!(leg.steps(), &[0, 0, 0, 0, 1, 1, 1, 1, 2]);
//! println!("{}", leg);
//! ```

pub mod completeness;
pub mod error;
pub mod numbering;
pub mod params;
pub mod segmenter;
pub mod traits;
pub mod transition;
pub mod types;

pub use completeness::{check_step_completeness, group_steps, CompletenessChecker, StepAggregate, StepAssessment};
pub use error::{Error, Result};
pub use numbering::assign_step_numbers;
pub use params::{
    BoundaryReference, CompletenessParameters, SegmentationParameters, TransitionParameters,
    DEFAULT_UNDEFINED_MARKER, REST_CODE,
};
pub use segmenter::StepSegmenter;
pub use traits::Configurable;
pub use transition::{detect_transitions, TransitionDetector};
pub use types::{GaitSegmentation, LegSegmentation, LegSide, StepSummary};
