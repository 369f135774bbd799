//! Core traits for segmentation components

/// Components whose behaviour is fully described by a parameter struct
pub trait Configurable {
    type Parameters;

    fn with_parameters(params: Self::Parameters) -> Self;
    fn parameters(&self) -> &Self::Parameters;
    fn set_parameters(&mut self, params: Self::Parameters);
}
