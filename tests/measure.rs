use rand::SeedableRng;

use qft_dataset::apply::apply;
use qft_dataset::circuit::{control, measure as measure_op, put, Circuit};
use qft_dataset::easybuild::dataset_circuit;
use qft_dataset::error::Error;
use qft_dataset::gate::Gate;
use qft_dataset::measure::{collapse_to, measure, probs, sample_counts, Counts};
use qft_dataset::simulator;
use qft_dataset::state::State;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-10
}

fn bell_state() -> State {
    let circuit = Circuit::new(
        2,
        vec![put(vec![0], Gate::H), control(vec![0], vec![1], Gate::X)],
    )
    .unwrap();
    apply(&circuit, &State::zero_state(2))
}

#[test]
fn test_probs_zero_state() {
    let p = probs(&State::zero_state(2), None);
    assert_eq!(p.len(), 4);
    assert!(approx_eq(p[0], 1.0));
    assert!(p[1..].iter().all(|&x| approx_eq(x, 0.0)));
}

#[test]
fn test_probs_bell_marginal() {
    let state = bell_state();
    let p = probs(&state, None);
    assert!(approx_eq(p[0], 0.5));
    assert!(approx_eq(p[3], 0.5));

    let p1 = probs(&state, Some(&[1]));
    assert!(approx_eq(p1[0], 0.5));
    assert!(approx_eq(p1[1], 0.5));
}

#[test]
fn test_probs_marginal_order_follows_locs() {
    // |10>: qubit 0 is 1, qubit 1 is 0
    let state = State::product_state(&[1, 0]);
    let p = probs(&state, Some(&[1, 0]));
    // reordered outcome (q1, q0) = (0, 1) → index 1
    assert!(approx_eq(p[1], 1.0));
}

#[test]
fn test_measure_bell_correlated() {
    let state = bell_state();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let results = measure(&state, None, 200, &mut rng);
    assert_eq!(results.len(), 200);
    for r in &results {
        assert_eq!(r[0], r[1]);
    }
    assert!(results.iter().any(|r| r == &vec![0, 0]));
    assert!(results.iter().any(|r| r == &vec![1, 1]));
}

#[test]
fn test_collapse_to_bell() {
    let mut state = bell_state();
    collapse_to(&mut state, &[0], &[1]);
    let p = probs(&state, None);
    assert!(approx_eq(p[3], 1.0));
    assert!(approx_eq(state.norm(), 1.0));
}

#[test]
fn test_bitstring_puts_last_qubit_first() {
    assert_eq!(Counts::bitstring(&[1, 0, 0]), "001");
    assert_eq!(Counts::bitstring(&[0, 1, 1, 0]), "0110");
    assert_eq!(Counts::bitstring(&[1, 1, 0, 0]), "0011");
}

#[test]
fn test_sample_counts_product_state() {
    let state = State::product_state(&[1, 0, 0]);
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let counts = sample_counts(&state, &[0, 1, 2], 50, &mut rng);
    assert_eq!(counts.len(), 1);
    assert_eq!(counts.get("001"), 50);
    assert_eq!(counts.total(), 50);
}

#[test]
fn test_counts_serialize_as_map() {
    let counts = Counts::from_outcomes(&vec![vec![0, 1], vec![0, 1], vec![1, 1]]);
    let json = serde_json::to_value(&counts).unwrap();
    assert_eq!(json["10"], 2);
    assert_eq!(json["11"], 1);
}

#[test]
fn test_run_requires_measurement() {
    let circuit = dataset_circuit(2).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    assert!(matches!(
        simulator::run(&circuit, 10, &mut rng),
        Err(Error::NoMeasurement)
    ));
}

#[test]
fn test_run_partial_measurement() {
    // X on qubit 2, measure only qubit 2 then qubit 0
    let circuit = Circuit::new(
        3,
        vec![put(vec![2], Gate::X), measure_op(vec![2, 0])],
    )
    .unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let counts = simulator::run(&circuit, 20, &mut rng).unwrap();
    // measured order (q2, q0) = (1, 0), rendered last-first
    assert_eq!(counts.get("01"), 20);
}

#[test]
fn test_dataset_circuit_from_zero_is_uniform() {
    let state = apply(&dataset_circuit(4).unwrap(), &State::zero_state(4));
    for p in probs(&state, None) {
        assert!(approx_eq(p, 1.0 / 16.0));
    }
}

#[test]
fn test_run_dataset_circuit_counts() {
    let mut circuit = dataset_circuit(4).unwrap();
    circuit.measure_all();
    let mut rng = rand::rngs::StdRng::seed_from_u64(2024);
    let counts = simulator::run(&circuit, 1024, &mut rng).unwrap();
    assert_eq!(counts.total(), 1024);
    assert_eq!(counts.len(), 16);
    assert!(counts.iter().all(|(k, _)| k.len() == 4));
}
