//! Quantum measurement operations.
//!
//! - [`probs`] - Probability distribution over the computational basis
//! - [`measure`] - Sample outcomes without collapsing the state
//! - [`collapse_to`] - Post-select the state on an outcome
//! - [`sample_counts`] - Histogram of sampled bitstrings

use std::collections::BTreeMap;

use num_complex::Complex64;
use rand::Rng;
use serde::Serialize;

use crate::index::{linear_to_indices, mixed_radix_index};
use crate::state::State;

/// Compute probability distribution over computational basis.
///
/// If `locs` is `None`, returns probabilities for all qubits.
/// If `locs` is `Some(&[...])`, returns marginal probabilities for the listed
/// qubits, indexed row-major in the order given.
pub fn probs(state: &State, locs: Option<&[usize]>) -> Vec<f64> {
    match locs {
        None => state.data.iter().map(|c| c.norm_sqr()).collect(),
        Some(locs) => marginal_probs(state, locs),
    }
}

fn marginal_probs(state: &State, locs: &[usize]) -> Vec<f64> {
    let dims = state.dims();
    let marginal_dims = vec![2; locs.len()];
    let mut prob_vec = vec![0.0; 1 << locs.len()];

    for (flat_idx, amp) in state.data.iter().enumerate() {
        let indices = linear_to_indices(flat_idx, &dims);
        let marginal_indices: Vec<usize> = locs.iter().map(|&i| indices[i]).collect();
        prob_vec[mixed_radix_index(&marginal_indices, &marginal_dims)] += amp.norm_sqr();
    }

    prob_vec
}

/// Sample an index from a probability distribution.
fn sample_from_probs(probs: &[f64], rng: &mut impl Rng) -> usize {
    let r: f64 = rng.r#gen();
    let mut cumsum = 0.0;
    for (i, &p) in probs.iter().enumerate() {
        cumsum += p;
        if r < cumsum {
            return i;
        }
    }
    // Rounding can leave the total just under 1; fall back to the last
    // outcome with non-zero weight.
    probs.iter().rposition(|&p| p > 0.0).unwrap_or(probs.len() - 1)
}

/// Sample measurement outcomes without collapsing state.
///
/// Each result lists the measured qubit values in the order of `locs`.
///
/// # Example
/// ```
/// use qft_dataset::{State, measure::measure};
/// use rand::SeedableRng;
///
/// let state = State::zero_state(2);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// for result in measure(&state, None, 10, &mut rng) {
///     assert_eq!(result, vec![0, 0]);
/// }
/// ```
pub fn measure(
    state: &State,
    locs: Option<&[usize]>,
    nshots: usize,
    rng: &mut impl Rng,
) -> Vec<Vec<usize>> {
    let p = probs(state, locs);
    let nmeasured = locs.map_or(state.nbits, <[usize]>::len);
    let dims = vec![2; nmeasured];

    (0..nshots)
        .map(|_| linear_to_indices(sample_from_probs(&p, rng), &dims))
        .collect()
}

/// Collapse state to a specific outcome (post-selection), then renormalize.
///
/// # Panics
/// Panics if `locs` and `values` have different lengths.
pub fn collapse_to(state: &mut State, locs: &[usize], values: &[usize]) {
    assert_eq!(
        locs.len(),
        values.len(),
        "locs and values must have the same length"
    );

    let dims = state.dims();
    let mut norm_sq = 0.0;

    for (flat_idx, amp) in state.data.iter_mut().enumerate() {
        let indices = linear_to_indices(flat_idx, &dims);
        let matches = locs
            .iter()
            .zip(values.iter())
            .all(|(&loc, &val)| indices[loc] == val);

        if matches {
            norm_sq += amp.norm_sqr();
        } else {
            *amp = Complex64::new(0.0, 0.0);
        }
    }

    let norm = norm_sq.sqrt();
    if norm > 1e-15 {
        state.data.mapv_inplace(|amp| amp / norm);
    }
}

/// Histogram of measurement outcomes keyed by bitstring.
///
/// The leftmost character is the last measured qubit, so qubit 0 of a full
/// measurement is the rightmost bit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Counts(BTreeMap<String, usize>);

impl Counts {
    /// Bitstring for one outcome, given in measurement order.
    pub fn bitstring(outcome: &[usize]) -> String {
        outcome
            .iter()
            .rev()
            .map(|&b| if b == 0 { '0' } else { '1' })
            .collect()
    }

    /// Build a histogram from sampled outcomes.
    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a Vec<usize>>) -> Self {
        let mut counts = Counts::default();
        for outcome in outcomes {
            counts.record(outcome);
        }
        counts
    }

    pub fn record(&mut self, outcome: &[usize]) {
        *self.0.entry(Self::bitstring(outcome)).or_insert(0) += 1;
    }

    pub fn get(&self, bitstring: &str) -> usize {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of shots recorded.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

/// Sample `nshots` outcomes of the qubits in `locs` and tally them.
pub fn sample_counts(
    state: &State,
    locs: &[usize],
    nshots: usize,
    rng: &mut impl Rng,
) -> Counts {
    Counts::from_outcomes(&measure(state, Some(locs), nshots, rng))
}
