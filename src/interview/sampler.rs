use crate::{Error, Result};
use rand::Rng;
use rand::seq::index;

/// Draws `k` distinct questions, uniformly over all k-subsets of `bank`.
pub fn sample_questions<R: Rng + ?Sized>(
    rng: &mut R,
    bank: &[String],
    k: usize,
) -> Result<Vec<String>> {
    if k > bank.len() {
        return Err(Error::InvalidSampleSize {
            requested: k,
            available: bank.len(),
        });
    }

    Ok(index::sample(rng, bank.len(), k)
        .into_iter()
        .map(|i| bank[i].clone())
        .collect())
}
