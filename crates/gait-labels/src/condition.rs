//! Experimental conditions and their integer codes
//!
//! A condition label joins an experimental regime and an activity, e.g.
//! `"transparent_WALKING"` or `"SM_STAIRS_DOWN"`. Downstream tables store the
//! condition as an integer code in 0..=5 where both undefined conditions map
//! to 0.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::vocab::Activity;
use crate::{LabelError, Result};

/// Experimental regime a recording was made under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Regime {
    #[serde(rename = "transparent")]
    Transparent,
    #[serde(rename = "SM")]
    Sm,
}

impl Regime {
    pub const ALL: &'static [Regime] = &[Regime::Transparent, Regime::Sm];

    pub fn name(self) -> &'static str {
        match self {
            Regime::Transparent => "transparent",
            Regime::Sm => "SM",
        }
    }
}

impl FromStr for Regime {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "transparent" => Ok(Regime::Transparent),
            "SM" => Ok(Regime::Sm),
            _ => Err(LabelError::UnknownLabel {
                kind: "regime",
                label: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A regime/activity pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Condition {
    pub regime: Regime,
    pub activity: Activity,
}

impl Condition {
    pub fn new(regime: Regime, activity: Activity) -> Self {
        Self { regime, activity }
    }

    /// Integer condition code; undefined activities map to 0
    pub fn code(&self) -> u8 {
        match self.activity {
            Activity::Undefined => 0,
            activity => activity.code(),
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Condition {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || LabelError::UnknownLabel {
            kind: "condition",
            label: s.to_string(),
        };
        let (regime, activity) = s.split_once('_').ok_or_else(unknown)?;
        Ok(Self {
            regime: regime.parse().map_err(|_| unknown())?,
            activity: activity.parse().map_err(|_| unknown())?,
        })
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.regime, self.activity)
    }
}

lazy_static! {
    static ref STANDARD_MAPPING: ConditionMapping = {
        let mut mapping = ConditionMapping::empty();
        for &regime in Regime::ALL {
            for &activity in Activity::ALL {
                let condition = Condition::new(regime, activity);
                mapping.insert(condition.label(), condition.code());
            }
        }
        mapping
    };
}

/// Lookup table from condition label to integer code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionMapping {
    codes: BTreeMap<String, u8>,
}

impl ConditionMapping {
    /// A mapping with no labels
    pub fn empty() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    /// The twelve standard regime/activity labels
    pub fn standard() -> &'static ConditionMapping {
        &STANDARD_MAPPING
    }

    pub fn insert(&mut self, label: impl Into<String>, code: u8) -> Option<u8> {
        self.codes.insert(label.into(), code)
    }

    pub fn code(&self, label: &str) -> Option<u8> {
        self.codes.get(label).copied()
    }

    /// Like [`code`](Self::code) but fails on unknown labels
    pub fn require(&self, label: &str) -> Result<u8> {
        self.code(label).ok_or_else(|| LabelError::UnknownLabel {
            kind: "condition",
            label: label.to_string(),
        })
    }

    /// Labels mapped to `code`, in label order
    pub fn labels_for(&self, code: u8) -> Vec<&str> {
        self.codes
            .iter()
            .filter(|(_, &c)| c == code)
            .map(|(label, _)| label.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.codes.iter().map(|(label, &code)| (label.as_str(), code))
    }
}

impl Default for ConditionMapping {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl FromIterator<(String, u8)> for ConditionMapping {
    fn from_iter<I: IntoIterator<Item = (String, u8)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}
