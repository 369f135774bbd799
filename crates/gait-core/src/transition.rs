//! Step boundary detection
//!
//! A new step starts at sample `i` when the ankle returns to the resting code
//! from one of the configured prior codes, or when the condition label stops
//! being undefined.

use tracing::{debug, instrument};

use crate::params::{TransitionParameters, REST_CODE};
use crate::{Error, Result};

/// Detects step-start samples in a single leg's position sequence
#[derive(Debug, Clone, Default)]
pub struct TransitionDetector {
    params: TransitionParameters,
}

impl TransitionDetector {
    pub fn new(params: TransitionParameters) -> Self {
        Self { params }
    }

    pub fn parameters(&self) -> &TransitionParameters {
        &self.params
    }

    /// Flag every sample that starts a new step
    ///
    /// `positions` and `conditions` must be aligned row-for-row. The first
    /// sample has no predecessor and is never flagged.
    #[instrument(skip_all, fields(n_samples = positions.len()))]
    pub fn detect<S: AsRef<str>>(&self, positions: &[i64], conditions: &[S]) -> Result<Vec<bool>> {
        Error::ensure_aligned(positions.len(), conditions.len(), "transition detection")?;

        let marker = self.params.undefined_marker.as_str();
        let mut flags = Vec::with_capacity(positions.len());
        if positions.is_empty() {
            return Ok(flags);
        }
        flags.push(false);

        for i in 1..positions.len() {
            let rest_return =
                positions[i] == REST_CODE && self.params.prior_codes.contains(&positions[i - 1]);
            let became_defined = conditions[i - 1].as_ref().contains(marker)
                && !conditions[i].as_ref().contains(marker);
            flags.push(rest_return || became_defined);
        }

        debug!(
            transitions = flags.iter().filter(|&&t| t).count(),
            "transition detection finished"
        );
        Ok(flags)
    }
}

/// Flag step starts using the given parameters
pub fn detect_transitions<S: AsRef<str>>(
    positions: &[i64],
    conditions: &[S],
    params: &TransitionParameters,
) -> Result<Vec<bool>> {
    TransitionDetector::new(params.clone()).detect(positions, conditions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walking(n: usize) -> Vec<&'static str> {
        vec!["transparent_WALKING"; n]
    }

    #[test]
    fn test_rest_return() {
        let detector = TransitionDetector::default();
        let flags = detector.detect(&[1, 2, 3, 0], &walking(4)).unwrap();
        assert_eq!(flags, vec![false, false, false, true]);
    }

    #[test]
    fn test_condition_becomes_defined() {
        let detector = TransitionDetector::default();
        let flags = detector
            .detect(&[1, 1], &["X_UNDEFINED", "X_WALKING"])
            .unwrap();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn test_condition_becoming_undefined_is_not_a_transition() {
        let detector = TransitionDetector::default();
        let flags = detector
            .detect(&[1, 1, 1], &["X_WALKING", "X_UNDEFINED", "X_UNDEFINED"])
            .unwrap();
        assert_eq!(flags, vec![false, false, false]);
    }

    #[test]
    fn test_rest_to_rest_is_not_a_transition() {
        let detector = TransitionDetector::default();
        let flags = detector.detect(&[0, 0, 1, 0, 0], &walking(5)).unwrap();
        assert_eq!(flags, vec![false, false, false, true, false]);
    }

    #[test]
    fn test_first_sample_never_flagged() {
        let detector = TransitionDetector::default();
        let flags = detector.detect(&[0], &["SM_WALKING"]).unwrap();
        assert_eq!(flags, vec![false]);
    }

    #[test]
    fn test_custom_prior_codes() {
        let params = TransitionParameters {
            prior_codes: [3].into_iter().collect(),
            ..Default::default()
        };
        let flags = detect_transitions(&[1, 0, 3, 0], &walking(4), &params).unwrap();
        assert_eq!(flags, vec![false, false, false, true]);
    }

    #[test]
    fn test_custom_marker() {
        let params = TransitionParameters {
            undefined_marker: "IDLE".to_string(),
            ..Default::default()
        };
        let flags = detect_transitions(&[1, 1], &["IDLE", "RUN"], &params).unwrap();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn test_empty_input() {
        let flags = TransitionDetector::default()
            .detect::<&str>(&[], &[])
            .unwrap();
        assert!(flags.is_empty());
    }

    #[test]
    fn test_length_mismatch() {
        let result = TransitionDetector::default().detect(&[1, 2], &["A"]);
        assert!(matches!(result, Err(Error::LengthMismatch { expected: 2, actual: 1, .. })));
    }
}
