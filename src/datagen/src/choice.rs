use rand::distributions::WeightedIndex;
use rand::prelude::*;

use crate::error::DatagenError;
use crate::error::Result;

/// Categorical distribution over a fixed set of values.
pub struct Choice<T> {
    values: Vec<T>,
    weight_idx: WeightedIndex<f64>,
}

impl<T> Choice<T> {
    pub fn try_new_weighted<I>(pairs: I) -> Result<Self>
    where I: IntoIterator<Item = (T, f64)> {
        let (values, weights): (Vec<T>, Vec<f64>) = pairs.into_iter().unzip();
        let weight_idx =
            WeightedIndex::new(weights).map_err(|err| DatagenError::Internal(err.to_string()))?;

        Ok(Self { values, weight_idx })
    }

    pub fn try_new_uniform<I>(values: I) -> Result<Self>
    where I: IntoIterator<Item = T> {
        Self::try_new_weighted(values.into_iter().map(|v| (v, 1.)))
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.values[self.weight_idx.sample(rng)]
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}
