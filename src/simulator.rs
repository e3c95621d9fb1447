use log::debug;
use rand::Rng;

use crate::apply::apply;
use crate::circuit::Circuit;
use crate::error::{Error, Result};
use crate::measure::{sample_counts, Counts};
use crate::state::State;

/// Run a circuit from |0…0⟩ and sample its measured qubits `shots` times.
///
/// # Errors
/// Returns [`Error::NoMeasurement`] if the circuit measures nothing.
pub fn run(circuit: &Circuit, shots: usize, rng: &mut impl Rng) -> Result<Counts> {
    let locs = circuit.measured_locs();
    if locs.is_empty() {
        return Err(Error::NoMeasurement);
    }

    let state = apply(circuit, &State::zero_state(circuit.num_sites()));
    debug!(
        "simulated {} gates on {} qubits, sampling {} shots",
        circuit.gates().count(),
        circuit.num_sites(),
        shots
    );
    Ok(sample_counts(&state, &locs, shots, rng))
}
