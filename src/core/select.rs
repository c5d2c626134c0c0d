//! Order statistics by randomized selection.
//!
//! All entry points take the random source explicitly so callers can pin a
//! seed (tests, reproducible snapshots) or pass a thread-local generator.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Returns the value of 1-based rank `rank` as if `buffer` were sorted ascending.
///
/// `buffer` is permuted in place. Use [`random_select`] when the caller's
/// ordering must survive.
pub fn random_select_in_place<R: Rng + ?Sized>(
    buffer: &mut [f64],
    rank: usize,
    rng: &mut R,
) -> PlotResult<f64> {
    validate_rank(buffer, rank)?;

    let target = rank - 1;
    let mut low = 0;
    let mut high = buffer.len() - 1;
    loop {
        if low == high {
            return Ok(buffer[low]);
        }
        let pivot_index = rng.random_range(low..=high);
        let split = partition(buffer, low, high, pivot_index);
        match target.cmp(&split) {
            std::cmp::Ordering::Equal => return Ok(buffer[split]),
            std::cmp::Ordering::Less => high = split - 1,
            std::cmp::Ordering::Greater => low = split + 1,
        }
    }
}

/// Copying variant of [`random_select_in_place`].
pub fn random_select<R: Rng + ?Sized>(values: &[f64], rank: usize, rng: &mut R) -> PlotResult<f64> {
    validate_rank(values, rank)?;
    let mut scratch = values.to_vec();
    random_select_in_place(&mut scratch, rank, rng)
}

pub fn minimum<R: Rng + ?Sized>(values: &[f64], rng: &mut R) -> PlotResult<f64> {
    random_select(values, 1, rng)
}

pub fn maximum<R: Rng + ?Sized>(values: &[f64], rng: &mut R) -> PlotResult<f64> {
    random_select(values, values.len(), rng)
}

/// Median by selection; even-length input averages the two middle ranks.
pub fn median<R: Rng + ?Sized>(values: &[f64], rng: &mut R) -> PlotResult<f64> {
    let len = values.len();
    let mut scratch = values.to_vec();
    if len % 2 == 1 {
        return random_select_in_place(&mut scratch, len.div_ceil(2), rng);
    }

    let lower = random_select_in_place(&mut scratch, len / 2, rng)?;
    // After selecting rank n/2 everything to its right is >= it, so the upper
    // middle is the minimum of that tail.
    let upper = scratch[len / 2..]
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    Ok((lower + upper) / 2.0)
}

/// Closed `[min, max]` interval covered by a set of observations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    pub min: f64,
    pub max: f64,
}

impl DataRange {
    pub fn new(min: f64, max: f64) -> PlotResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PlotError::InvalidArgument(
                "range bounds must be finite".to_owned(),
            ));
        }
        if min > max {
            return Err(PlotError::InvalidArgument(format!(
                "range minimum {min} exceeds maximum {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Computes the range of `values` with two selections instead of a sort.
    pub fn from_values<R: Rng + ?Sized>(values: &[f64], rng: &mut R) -> PlotResult<Self> {
        if values.iter().any(|value| !value.is_finite()) {
            return Err(PlotError::InvalidArgument(
                "values must be finite to compute a data range".to_owned(),
            ));
        }
        let mut scratch = values.to_vec();
        let min = random_select_in_place(&mut scratch, 1, rng)?;
        let max = random_select_in_place(&mut scratch, values.len(), rng)?;
        Self::new(min, max)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

fn validate_rank(values: &[f64], rank: usize) -> PlotResult<()> {
    if values.is_empty() {
        return Err(PlotError::InvalidArgument(
            "selection requires a non-empty sample".to_owned(),
        ));
    }
    if rank == 0 || rank > values.len() {
        return Err(PlotError::InvalidArgument(format!(
            "rank {rank} is outside [1, {}]",
            values.len()
        )));
    }
    if values.iter().any(|value| value.is_nan()) {
        return Err(PlotError::InvalidArgument(
            "selection input must not contain NaN".to_owned(),
        ));
    }
    Ok(())
}

/// Lomuto partition of `buffer[low..=high]` around `buffer[pivot_index]`.
///
/// Returns the pivot's final index; everything left of it is smaller.
fn partition(buffer: &mut [f64], low: usize, high: usize, pivot_index: usize) -> usize {
    buffer.swap(pivot_index, high);
    let pivot = buffer[high];
    let mut store = low;
    for index in low..high {
        if buffer[index] < pivot {
            buffer.swap(index, store);
            store += 1;
        }
    }
    buffer.swap(store, high);
    store
}
