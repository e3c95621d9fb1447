use std::f64::consts::PI;

use crate::circuit::{control, put, Circuit, CircuitElement};
use crate::error::Result;
use crate::gate::Gate;

/// Build the QFT-style circuit whose measurement counts go into the dataset.
///
/// For each qubit j: controlled-Phase(π/2^(j-k)) from every earlier qubit k
/// onto j, then H on j. There are no final SWAPs.
pub fn dataset_circuit(n: usize) -> Result<Circuit> {
    let mut elements: Vec<CircuitElement> = Vec::new();

    for j in 0..n {
        for k in 0..j {
            let theta = PI / (1u64 << (j - k)) as f64;
            elements.push(control(vec![k], vec![j], Gate::Phase(theta)));
        }
        elements.push(put(vec![j], Gate::H));
    }

    Ok(Circuit::new(n, elements)?)
}

/// Build an n-qubit QFT circuit.
///
/// For each qubit i: H, then for j in 1..(n-i) a controlled-Phase(2π/2^(j+1))
/// with control i+j and target i. Finally SWAP pairs to reverse bit order, so
/// that |x⟩ maps to 1/√N Σ_k e^(2πi xk/N) |k⟩ with qubit 0 most significant.
pub fn qft_circuit(n: usize) -> Result<Circuit> {
    let mut elements: Vec<CircuitElement> = Vec::new();

    for i in 0..n {
        elements.push(put(vec![i], Gate::H));
        for j in 1..(n - i) {
            let theta = 2.0 * PI / (1u64 << (j + 1)) as f64;
            elements.push(control(vec![i + j], vec![i], Gate::Phase(theta)));
        }
    }

    for i in 0..(n / 2) {
        elements.push(put(vec![i, n - 1 - i], Gate::SWAP));
    }

    Ok(Circuit::new(n, elements)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::PositionedGate;

    #[test]
    fn test_dataset_circuit_gate_order() {
        let circuit = dataset_circuit(3).unwrap();
        let gates: Vec<&PositionedGate> = circuit.gates().collect();
        // j=0: H; j=1: CP(k=0), H; j=2: CP(k=0), CP(k=1), H
        assert_eq!(gates.len(), 6);
        assert_eq!(gates[0].gate, Gate::H);
        assert_eq!(gates[1].gate, Gate::Phase(PI / 2.0));
        assert_eq!(gates[1].control_locs, vec![0]);
        assert_eq!(gates[1].target_locs, vec![1]);
        assert_eq!(gates[3].gate, Gate::Phase(PI / 4.0));
        assert_eq!(gates[4].gate, Gate::Phase(PI / 2.0));
        assert_eq!(gates[4].control_locs, vec![1]);
        assert_eq!(gates[5].target_locs, vec![2]);
    }

    #[test]
    fn test_qft_circuit_element_count() {
        // n H gates + n(n-1)/2 controlled phases + n/2 swaps
        let circuit = qft_circuit(4).unwrap();
        assert_eq!(circuit.elements.len(), 4 + 6 + 2);
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(dataset_circuit(0).unwrap().elements.len(), 0);
        assert_eq!(qft_circuit(0).unwrap().elements.len(), 0);
    }
}
