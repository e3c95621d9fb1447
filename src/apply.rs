use crate::circuit::Circuit;
use crate::instruct::instruct_gate;
use crate::state::State;

/// Apply a circuit to a quantum state, returning the new state.
///
/// Measurement elements leave the state untouched; sampling is done by
/// [`crate::measure`] on the returned state.
///
/// # Panics
/// Panics if the state and circuit have different qubit counts.
pub fn apply(circuit: &Circuit, state: &State) -> State {
    let mut out = state.clone();
    apply_inplace(circuit, &mut out);
    out
}

/// Apply a circuit to a quantum state in place.
pub fn apply_inplace(circuit: &Circuit, state: &mut State) {
    assert_eq!(
        circuit.num_sites(),
        state.nbits,
        "circuit and state qubit counts differ"
    );
    for pg in circuit.gates() {
        instruct_gate(state, pg);
    }
}
