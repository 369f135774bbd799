//! Polars integration for gait step segmentation
//!
//! This crate exposes the step segmenter from `gait-core` through a single
//! extension trait on Polars DataFrames. Input columns are named through
//! [`StepColumns`]; the pipeline writes transition, step-number and
//! completeness columns for both legs.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use gait_polars::{GaitStepsExt, StepColumns};
//! use gait_core::SegmentationParameters;
//!
//! let df = df![
//!     "ankle_position_left" => [0i64, 1, 2, 3, 0],
//!     "ankle_position_right" => [2i64, 3, 0, 1, 2],
//!     "condition" => ["SM_WALKING"; 5],
//! ]?;
//!
//! let steps = df.process_steps(&StepColumns::default(), &SegmentationParameters::default())?;
//! println!("{}", steps);
//! ```

mod config;
mod error;
mod methods;
mod traits;

pub use config::*;
pub use error::{Error, Result};
pub use traits::*;

// Re-export commonly used types from dependencies
pub use gait_core::{BoundaryReference, LegSide, SegmentationParameters};
pub use gait_labels::ConditionMapping;
