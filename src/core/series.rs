use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Ordered cumulative values a waterfall is derived from.
///
/// Holds at least two finite values whose pairwise changes are finite too.
/// The series cannot be mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct StepSeries {
    values: Vec<f64>,
}

impl StepSeries {
    pub const MIN_LEN: usize = 2;

    pub fn new(values: Vec<f64>) -> ChartResult<Self> {
        if values.len() < Self::MIN_LEN {
            return Err(ChartError::InvalidInput(format!(
                "a waterfall needs at least {} cumulative values, got {}",
                Self::MIN_LEN,
                values.len()
            )));
        }
        if let Some(index) = values.iter().position(|value| !value.is_finite()) {
            return Err(ChartError::InvalidInput(format!(
                "cumulative value at index {index} must be finite"
            )));
        }
        if let Some(index) = values
            .windows(2)
            .position(|pair| !(pair[1] - pair[0]).is_finite())
        {
            return Err(ChartError::InvalidInput(format!(
                "change between values {index} and {} overflows",
                index + 1
            )));
        }
        Ok(Self { values })
    }

    pub fn from_decimals(values: &[Decimal]) -> ChartResult<Self> {
        let values = values
            .iter()
            .map(|value| decimal_to_f64(*value, "cumulative value"))
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(values)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> f64 {
        self.values[0]
    }

    #[must_use]
    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Signed change between each consecutive pair, `n - 1` entries.
    #[must_use]
    pub fn deltas(&self) -> Vec<f64> {
        self.values
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect()
    }
}

impl TryFrom<Vec<f64>> for StepSeries {
    type Error = ChartError;

    fn try_from(values: Vec<f64>) -> ChartResult<Self> {
        Self::new(values)
    }
}

impl From<StepSeries> for Vec<f64> {
    fn from(series: StepSeries) -> Self {
        series.values
    }
}
