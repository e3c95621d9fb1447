//! Primitive amplitude operations for state vector simulation.
//!
//! Gates are applied in place: for every configuration of the qubits a gate
//! does not touch, the amplitudes it mixes are gathered and multiplied by the
//! gate matrix.

use ndarray::Array2;
use num_complex::Complex64;

use crate::circuit::PositionedGate;
use crate::index::{iter_basis, linear_to_indices, mixed_radix_index};
use crate::state::State;

/// Apply a d x d matrix to the d amplitudes at `indices`.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use qft_dataset::gate::Gate;
/// use qft_dataset::instruct::udrows;
///
/// let mut amps = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
/// udrows(&mut amps, &[0, 1], &Gate::X.matrix());
/// assert!((amps[1].norm() - 1.0).abs() < 1e-12);
/// ```
pub fn udrows(state: &mut [Complex64], indices: &[usize], gate: &Array2<Complex64>) {
    let d = indices.len();
    debug_assert_eq!(gate.nrows(), d);
    debug_assert_eq!(gate.ncols(), d);

    let old_amps: Vec<Complex64> = indices.iter().map(|&idx| state[idx]).collect();

    for (i, &out_idx) in indices.iter().enumerate() {
        state[out_idx] = old_amps
            .iter()
            .enumerate()
            .map(|(j, &old)| gate[[i, j]] * old)
            .sum();
    }
}

/// Multiply the amplitude at index i by a scalar factor.
pub fn mulrow(state: &mut [Complex64], i: usize, factor: Complex64) {
    state[i] *= factor;
}

/// Apply diag(phases[0], phases[1]) on qubit `loc`, only where every control qubit is 1.
pub fn instruct_diagonal(
    state: &mut State,
    phases: &[Complex64; 2],
    loc: usize,
    control_locs: &[usize],
) {
    let dims = state.dims();
    let amps = state
        .data
        .as_slice_mut()
        .expect("state vector is stored contiguously");
    for flat_idx in 0..amps.len() {
        let bits = linear_to_indices(flat_idx, &dims);
        if control_locs.iter().all(|&c| bits[c] == 1) {
            mulrow(amps, flat_idx, phases[bits[loc]]);
        }
    }
}

/// Apply a positioned gate (with optional controls) to the state in place.
pub fn instruct_gate(state: &mut State, pg: &PositionedGate) {
    if pg.target_locs.len() == 1 {
        if let Some(phases) = pg.gate.diagonal() {
            instruct_diagonal(state, &phases, pg.target_locs[0], &pg.control_locs);
            return;
        }
    }

    let nbits = state.nbits;
    let dims = state.dims();
    let matrix = pg.gate.matrix();
    let involved = pg.all_locs();
    let other_locs: Vec<usize> = (0..nbits).filter(|loc| !involved.contains(loc)).collect();
    let other_dims = vec![2; other_locs.len()];
    let ntargets = pg.target_locs.len();

    let mut full = vec![0usize; nbits];
    for &c in &pg.control_locs {
        full[c] = 1;
    }

    let amps = state
        .data
        .as_slice_mut()
        .expect("state vector is stored contiguously");

    for (_, other_vals) in iter_basis(&other_dims) {
        for (&loc, &val) in other_locs.iter().zip(other_vals.iter()) {
            full[loc] = val;
        }
        // Target values enumerate row-major, matching the gate matrix layout.
        let indices: Vec<usize> = (0..1usize << ntargets)
            .map(|t| {
                for (j, &loc) in pg.target_locs.iter().enumerate() {
                    full[loc] = (t >> (ntargets - 1 - j)) & 1;
                }
                mixed_radix_index(&full, &dims)
            })
            .collect();
        udrows(amps, &indices, &matrix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::Gate;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_udrows_non_contiguous_indices() {
        let mut amps = vec![c(1.0, 0.0), c(0.5, 0.0), c(0.0, 0.0), c(0.5, 0.0)];
        udrows(&mut amps, &[0, 2], &Gate::X.matrix());
        assert!(approx_eq(amps[0], c(0.0, 0.0)));
        assert!(approx_eq(amps[1], c(0.5, 0.0)));
        assert!(approx_eq(amps[2], c(1.0, 0.0)));
        assert!(approx_eq(amps[3], c(0.5, 0.0)));
    }

    #[test]
    fn test_mulrow_phase() {
        let mut amps = vec![c(1.0, 0.0), c(1.0, 0.0)];
        let phase = Complex64::from_polar(1.0, FRAC_PI_4);
        mulrow(&mut amps, 1, phase);
        assert!(approx_eq(amps[0], c(1.0, 0.0)));
        assert!(approx_eq(amps[1], phase));
    }

    #[test]
    fn test_hadamard_on_first_qubit() {
        let mut state = State::zero_state(2);
        instruct_gate(&mut state, &PositionedGate::new(Gate::H, vec![0], vec![]));
        // (|00> + |10>)/√2
        assert!(approx_eq(state.data[0], c(FRAC_1_SQRT_2, 0.0)));
        assert!(approx_eq(state.data[2], c(FRAC_1_SQRT_2, 0.0)));
        assert!(approx_eq(state.data[1], c(0.0, 0.0)));
    }

    #[test]
    fn test_cnot_only_fires_on_control_one() {
        let mut state = State::product_state(&[1, 0]);
        instruct_gate(&mut state, &PositionedGate::new(Gate::X, vec![1], vec![0]));
        assert!(approx_eq(state.data[3], c(1.0, 0.0)));

        let mut state = State::product_state(&[0, 0]);
        instruct_gate(&mut state, &PositionedGate::new(Gate::X, vec![1], vec![0]));
        assert!(approx_eq(state.data[0], c(1.0, 0.0)));
    }

    #[test]
    fn test_swap_nonadjacent() {
        let mut state = State::product_state(&[1, 0, 0]);
        instruct_gate(&mut state, &PositionedGate::new(Gate::SWAP, vec![0, 2], vec![]));
        // |100> -> |001>
        assert!(approx_eq(state.data[1], c(1.0, 0.0)));
    }

    #[test]
    fn test_controlled_phase_diagonal_path() {
        let theta = 0.7;
        let mut state = State::product_state(&[1, 1]);
        instruct_gate(&mut state, &PositionedGate::new(Gate::Phase(theta), vec![1], vec![0]));
        assert!(approx_eq(state.data[3], Complex64::from_polar(1.0, theta)));

        let mut state = State::product_state(&[0, 1]);
        instruct_gate(&mut state, &PositionedGate::new(Gate::Phase(theta), vec![1], vec![0]));
        assert!(approx_eq(state.data[1], c(1.0, 0.0)));
    }
}
