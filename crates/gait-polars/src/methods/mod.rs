//! Implementations of [`GaitStepsExt`](crate::GaitStepsExt)

mod columns;
mod conditions;
mod steps;
