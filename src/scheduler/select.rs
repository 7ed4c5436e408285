//! Priority-weighted random choice.
//!
//! Weights are pickup priorities. Negative or non-finite weights count as
//! zero; when no weight is positive every candidate is equally likely.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Normalize a raw pickup priority into a usable weight.
pub fn effective_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 { weight } else { 0.0 }
}

/// Pick an index into `weights` with probability proportional to its weight.
///
/// Returns `None` only for an empty slice.
pub fn weighted_index<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    let indices: Vec<usize> = (0..weights.len()).collect();
    match indices.choose_weighted(rng, |&i| effective_weight(weights[i])) {
        Ok(&index) => Some(index),
        Err(e) => {
            debug!("Weighted choice unavailable ({}), falling back to uniform", e);
            indices.choose(rng).copied()
        }
    }
}

/// Pick one item by weight; see [`weighted_index`].
pub fn choose_weighted_by<'a, T, R, F>(items: &'a [T], weight: F, rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
    F: Fn(&T) -> f64,
{
    let weights: Vec<f64> = items.iter().map(weight).collect();
    weighted_index(&weights, rng).map(|i| &items[i])
}
