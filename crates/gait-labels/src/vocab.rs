//! Enumerated label vocabularies
//!
//! Each vocabulary is a `#[repr(u8)]` enum whose discriminants are the
//! integer codes stored in recordings, and whose names are the upper-snake
//! labels used in condition strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{LabelError, Result};

macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:tt {
            $($(#[$vmeta:meta])* $variant:ident = $code:tt => $label:tt,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant = $code,
            )+
        }

        impl $name {
            /// Every variant, in code order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Integer code of this label
            pub fn code(self) -> u8 {
                self as u8
            }

            /// Upper-snake label name
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn from_code(code: u8) -> Result<Self> {
                match code {
                    $($code => Ok($name::$variant),)+
                    _ => Err(LabelError::UnknownCode { kind: $kind, code }),
                }
            }
        }

        impl FromStr for $name {
            type Err = LabelError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err(LabelError::UnknownLabel {
                        kind: $kind,
                        label: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }
    };
}

label_enum! {
    /// Activity performed during a recording segment
    Activity, "activity" {
        Walking = 1 => "WALKING",
        RampsUp = 2 => "RAMPS_UP",
        RampsDown = 3 => "RAMPS_DOWN",
        StairsUp = 4 => "STAIRS_UP",
        StairsDown = 5 => "STAIRS_DOWN",
        Undefined = 6 => "UNDEFINED",
    }
}

label_enum! {
    /// Discretised gait phase
    GaitState, "gait state" {
        EarlyStance = 0 => "EARLY_STANCE",
        LateStance = 1 => "LATE_STANCE",
        EarlySwing = 2 => "EARLY_SWING",
        LateSwing = 3 => "LATE_SWING",
        Undefined = 4 => "UNDEFINED",
    }
}

label_enum! {
    Leg, "leg" {
        Left = 0 => "LEFT",
        Right = 1 => "RIGHT",
    }
}

label_enum! {
    /// Instrumented joint or mounting point
    JointName, "joint" {
        LeftHip = 0 => "LEFT_HIP",
        LeftKnee = 1 => "LEFT_KNEE",
        RightHip = 2 => "RIGHT_HIP",
        RightKnee = 3 => "RIGHT_KNEE",
        Backpack = 4 => "BACKPACK",
    }
}

impl Activity {
    pub fn is_defined(self) -> bool {
        self != Activity::Undefined
    }
}

impl JointName {
    /// Leg the joint belongs to, `None` for the backpack
    pub fn leg(self) -> Option<Leg> {
        match self {
            JointName::LeftHip | JointName::LeftKnee => Some(Leg::Left),
            JointName::RightHip | JointName::RightKnee => Some(Leg::Right),
            JointName::Backpack => None,
        }
    }
}
