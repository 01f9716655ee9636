//! Broadcastable per-point parameters.

use crate::error::{WakeError, WakeResult};

/// A model parameter that is either one value shared by every evaluation
/// point or a slice with one value per point.
///
/// The vectorised model entry points accept `Series` for thrust coefficient,
/// rotor diameter, and the model-specific extras, matching the broadcast
/// rule of the public contract: array-shaped arguments must agree in length
/// with the position count, scalars broadcast.
#[derive(Debug, Clone, Copy)]
pub enum Series<'a> {
    /// One value applied to all evaluation points.
    Scalar(f64),
    /// One value per evaluation point.
    PerPoint(&'a [f64]),
}

impl Series<'_> {
    /// Checks this series against the evaluation point count.
    pub(crate) fn check_len(&self, points: usize) -> WakeResult<()> {
        match self {
            Self::Scalar(_) => Ok(()),
            Self::PerPoint(values) if values.len() == points => Ok(()),
            Self::PerPoint(values) => Err(WakeError::SeriesLengthMismatch {
                expected: points,
                found: values.len(),
            }),
        }
    }

    /// Value at point `i`. Call only after `check_len` has passed.
    pub(crate) fn get(&self, i: usize) -> f64 {
        match self {
            Self::Scalar(value) => *value,
            Self::PerPoint(values) => values[i],
        }
    }
}

impl From<f64> for Series<'_> {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl<'a> From<&'a [f64]> for Series<'a> {
    fn from(values: &'a [f64]) -> Self {
        Self::PerPoint(values)
    }
}

impl<'a> From<&'a Vec<f64>> for Series<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        Self::PerPoint(values)
    }
}
