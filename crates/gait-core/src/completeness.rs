//! Step completeness checks
//!
//! Rows are grouped by step index in one pass, each group is judged on the
//! set of distinct ankle-position codes it visits, and the verdict is
//! broadcast back onto the rows of the group.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, instrument, trace};

use crate::params::{BoundaryReference, CompletenessParameters};
use crate::{Error, Result};

/// Aggregate of all rows sharing one step index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepAggregate {
    pub step: i64,
    /// Row of the first sample carrying this step index
    pub first_row: usize,
    pub n_samples: usize,
    /// Distinct ankle-position codes observed in the step
    pub codes: BTreeSet<i64>,
}

/// Aggregate plus completeness verdict for one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepAssessment {
    pub aggregate: StepAggregate,
    pub complete: bool,
}

/// Group rows by step index
pub fn group_steps(steps: &[i64], positions: &[i64]) -> Result<BTreeMap<i64, StepAggregate>> {
    Error::ensure_aligned(steps.len(), positions.len(), "step grouping")?;

    let mut groups: BTreeMap<i64, StepAggregate> = BTreeMap::new();
    for (row, (&step, &code)) in steps.iter().zip(positions).enumerate() {
        let group = groups.entry(step).or_insert_with(|| StepAggregate {
            step,
            first_row: row,
            n_samples: 0,
            codes: BTreeSet::new(),
        });
        group.n_samples += 1;
        group.codes.insert(code);
    }
    Ok(groups)
}

/// Judges whether each step covers enough gait phases
#[derive(Debug, Clone, Default)]
pub struct CompletenessChecker {
    params: CompletenessParameters,
}

impl CompletenessChecker {
    pub fn new(params: CompletenessParameters) -> Self {
        Self { params }
    }

    pub fn parameters(&self) -> &CompletenessParameters {
        &self.params
    }

    /// Assess every step present in `steps`
    #[instrument(skip_all, fields(n_samples = steps.len()))]
    pub fn assess<S: AsRef<str>>(
        &self,
        steps: &[i64],
        positions: &[i64],
        conditions: &[S],
    ) -> Result<BTreeMap<i64, StepAssessment>> {
        Error::ensure_aligned(steps.len(), conditions.len(), "completeness check")?;
        let groups = group_steps(steps, positions)?;

        let fixed_reference = match self.params.boundary_reference {
            BoundaryReference::FixedStep(k) => Some(
                groups
                    .get(&k)
                    .and_then(|g| g.first_row.checked_sub(1))
                    .map_or(false, |row| self.is_undefined(&conditions[row])),
            ),
            BoundaryReference::OwnStep => None,
        };

        let assessments: BTreeMap<i64, StepAssessment> = groups
            .into_iter()
            .map(|(step, aggregate)| {
                let reference_undefined = fixed_reference.unwrap_or_else(|| {
                    aggregate
                        .first_row
                        .checked_sub(1)
                        .map_or(false, |row| self.is_undefined(&conditions[row]))
                });
                let complete = self.judge(&aggregate.codes, reference_undefined);
                trace!(
                    step,
                    n_codes = aggregate.codes.len(),
                    reference_undefined,
                    complete,
                    "step judged"
                );
                (step, StepAssessment { aggregate, complete })
            })
            .collect();

        debug!(
            n_steps = assessments.len(),
            n_complete = assessments.values().filter(|a| a.complete).count(),
            "completeness check finished"
        );
        Ok(assessments)
    }

    /// Per-row completeness flags, constant within each step
    pub fn check<S: AsRef<str>>(
        &self,
        steps: &[i64],
        positions: &[i64],
        conditions: &[S],
    ) -> Result<Vec<bool>> {
        let assessments = self.assess(steps, positions, conditions)?;
        Ok(steps
            .iter()
            .map(|step| assessments.get(step).map_or(false, |a| a.complete))
            .collect())
    }

    fn judge(&self, codes: &BTreeSet<i64>, reference_undefined: bool) -> bool {
        match codes.len().cmp(&self.params.min_distinct_codes) {
            Ordering::Less => false,
            Ordering::Greater => true,
            Ordering::Equal => *codes == self.params.boundary_codes && reference_undefined,
        }
    }

    fn is_undefined<S: AsRef<str>>(&self, condition: &S) -> bool {
        condition.as_ref().contains(self.params.undefined_marker.as_str())
    }
}

/// Per-row completeness flags using the given parameters
pub fn check_step_completeness<S: AsRef<str>>(
    steps: &[i64],
    positions: &[i64],
    conditions: &[S],
    params: &CompletenessParameters,
) -> Result<Vec<bool>> {
    CompletenessChecker::new(params.clone()).check(steps, positions, conditions)
}
