//! Error types for gait-labels

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("Unknown {kind} label: {label}")]
    UnknownLabel { kind: &'static str, label: String },

    #[error("Unknown {kind} code: {code}")]
    UnknownCode { kind: &'static str, code: u8 },
}

pub type Result<T> = std::result::Result<T, LabelError>;
