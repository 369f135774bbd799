//! Label vocabularies for gait recordings
//!
//! Static lookup tables consumed by reporting and plotting code: activity,
//! gait-phase, leg and joint enumerations, the condition-label to code
//! mapping, plot ordering and colour palettes. The segmentation algorithm in
//! `gait-core` does not depend on any of these; callers inject them where a
//! labelling scheme is needed.
//!
//! # Example
//!
//! ```rust
//! use gait_labels::{format_activity, Activity, Condition, ConditionMapping};
//!
//! let condition: Condition = "SM_STAIRS_UP".parse().unwrap();
//! assert_eq!(condition.activity, Activity::StairsUp);
//! assert_eq!(ConditionMapping::standard().code("SM_STAIRS_UP"), Some(4));
//! assert_eq!(format_activity(condition.activity.name()), "Stairs Up");
//! ```

mod condition;
mod error;
mod format;
mod palette;
mod vocab;

pub use condition::{Condition, ConditionMapping, Regime};
pub use error::{LabelError, Result};
pub use format::format_activity;
pub use palette::{
    custom_palette, dark_palette, light_palette, plot_color, regime_color, regime_rgb, Rgb,
    PLOT_ORDER,
};
pub use vocab::{Activity, GaitState, JointName, Leg};
