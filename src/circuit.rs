use std::collections::HashSet;
use std::fmt;

use crate::gate::Gate;

/// Elements that can appear in a circuit sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum CircuitElement {
    Gate(PositionedGate),
    /// Computational-basis measurement of the listed qubits.
    Measure(Vec<usize>),
}

/// Error types for circuit validation.
#[derive(Debug, Clone, PartialEq)]
pub enum CircuitError {
    /// A location index is out of range
    LocOutOfRange { loc: usize, num_sites: usize },
    /// Overlap between target_locs and control_locs
    OverlappingLocs { overlapping: Vec<usize> },
    /// Number of target locations does not match the gate arity
    TargetCountMismatch { expected: usize, actual: usize },
    /// The same location appears twice in one element
    DuplicateLoc { loc: usize },
}

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitError::LocOutOfRange { loc, num_sites } => write!(
                f,
                "location {} is out of range (num_sites = {})",
                loc, num_sites
            ),
            CircuitError::OverlappingLocs { overlapping } => write!(
                f,
                "target_locs and control_locs overlap at locations: {:?}",
                overlapping
            ),
            CircuitError::TargetCountMismatch { expected, actual } => write!(
                f,
                "gate acts on {} qubits but {} target locations were given",
                expected, actual
            ),
            CircuitError::DuplicateLoc { loc } => {
                write!(f, "location {} appears more than once", loc)
            }
        }
    }
}

impl std::error::Error for CircuitError {}

/// A gate placed at specific locations in a circuit.
///
/// Controls trigger on |1⟩.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedGate {
    pub gate: Gate,
    pub target_locs: Vec<usize>,
    pub control_locs: Vec<usize>,
}

impl PositionedGate {
    pub fn new(gate: Gate, target_locs: Vec<usize>, control_locs: Vec<usize>) -> Self {
        PositionedGate {
            gate,
            target_locs,
            control_locs,
        }
    }

    /// Returns all locations (control locations followed by target locations).
    pub fn all_locs(&self) -> Vec<usize> {
        let mut locs = self.control_locs.clone();
        locs.extend(&self.target_locs);
        locs
    }
}

/// A quantum circuit on a register of qubits.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    nbits: usize,
    pub elements: Vec<CircuitElement>,
}

fn check_unique(locs: &[usize]) -> Result<(), CircuitError> {
    let mut seen = HashSet::new();
    for &loc in locs {
        if !seen.insert(loc) {
            return Err(CircuitError::DuplicateLoc { loc });
        }
    }
    Ok(())
}

fn check_in_range(locs: &[usize], num_sites: usize) -> Result<(), CircuitError> {
    match locs.iter().find(|&&loc| loc >= num_sites) {
        Some(&loc) => Err(CircuitError::LocOutOfRange { loc, num_sites }),
        None => Ok(()),
    }
}

fn validate(nbits: usize, element: &CircuitElement) -> Result<(), CircuitError> {
    match element {
        CircuitElement::Gate(pg) => {
            check_in_range(&pg.all_locs(), nbits)?;

            let target_set: HashSet<usize> = pg.target_locs.iter().copied().collect();
            let control_set: HashSet<usize> = pg.control_locs.iter().copied().collect();
            let mut overlapping: Vec<usize> =
                target_set.intersection(&control_set).copied().collect();
            if !overlapping.is_empty() {
                overlapping.sort_unstable();
                return Err(CircuitError::OverlappingLocs { overlapping });
            }
            check_unique(&pg.target_locs)?;
            check_unique(&pg.control_locs)?;

            let expected = pg.gate.num_sites();
            if pg.target_locs.len() != expected {
                return Err(CircuitError::TargetCountMismatch {
                    expected,
                    actual: pg.target_locs.len(),
                });
            }
            Ok(())
        }
        CircuitElement::Measure(locs) => {
            check_in_range(locs, nbits)?;
            check_unique(locs)
        }
    }
}

impl Circuit {
    /// Creates a new Circuit with validation.
    ///
    /// # Errors
    /// Returns a `CircuitError` if any element refers to a location outside the
    /// register, reuses a location, or gives a gate the wrong number of targets.
    pub fn new(nbits: usize, elements: Vec<CircuitElement>) -> Result<Self, CircuitError> {
        for element in &elements {
            validate(nbits, element)?;
        }
        Ok(Circuit { nbits, elements })
    }

    /// Returns the number of qubits in the circuit.
    pub fn num_sites(&self) -> usize {
        self.nbits
    }

    /// Returns the Hilbert space dimension 2^n.
    pub fn total_dim(&self) -> usize {
        1 << self.nbits
    }

    /// Iterate over the gates, skipping measurements.
    pub fn gates(&self) -> impl Iterator<Item = &PositionedGate> {
        self.elements.iter().filter_map(|element| match element {
            CircuitElement::Gate(pg) => Some(pg),
            CircuitElement::Measure(_) => None,
        })
    }

    /// Append a measurement of every qubit.
    pub fn measure_all(&mut self) {
        self.elements
            .push(CircuitElement::Measure((0..self.nbits).collect()));
    }

    /// Measured qubits in the order they were measured.
    ///
    /// A qubit measured twice is listed once, at its first measurement.
    pub fn measured_locs(&self) -> Vec<usize> {
        let mut seen = HashSet::new();
        self.elements
            .iter()
            .filter_map(|element| match element {
                CircuitElement::Measure(locs) => Some(locs),
                CircuitElement::Gate(_) => None,
            })
            .flatten()
            .copied()
            .filter(|loc| seen.insert(*loc))
            .collect()
    }

    /// Return the adjoint circuit U†.
    ///
    /// Gates come in reverse order, each replaced with its adjoint.
    /// Measurements are dropped.
    pub fn dagger(&self) -> Self {
        let elements = self
            .gates()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .map(|pg| {
                CircuitElement::Gate(PositionedGate {
                    gate: pg.gate.dagger(),
                    target_locs: pg.target_locs.clone(),
                    control_locs: pg.control_locs.clone(),
                })
            })
            .collect();
        // Locations were already validated on self.
        Circuit {
            nbits: self.nbits,
            elements,
        }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nqubits: {}", self.nbits)?;
        for element in &self.elements {
            match element {
                CircuitElement::Gate(pg) => {
                    if pg.control_locs.is_empty() {
                        writeln!(f, "  {} @ q[{}]", pg.gate, format_locs(&pg.target_locs))?;
                    } else {
                        writeln!(
                            f,
                            "  C(q[{}]) {} @ q[{}]",
                            format_locs(&pg.control_locs),
                            pg.gate,
                            format_locs(&pg.target_locs)
                        )?;
                    }
                }
                CircuitElement::Measure(locs) => {
                    writeln!(f, "  M @ q[{}]", format_locs(locs))?;
                }
            }
        }
        Ok(())
    }
}

fn format_locs(locs: &[usize]) -> String {
    locs.iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Place a gate on target locations (no controls).
///
/// # Example
/// ```
/// use qft_dataset::circuit::{put, CircuitElement};
/// use qft_dataset::gate::Gate;
/// let elem = put(vec![0], Gate::H);
/// if let CircuitElement::Gate(pg) = elem {
///     assert_eq!(pg.target_locs, vec![0]);
///     assert!(pg.control_locs.is_empty());
/// }
/// ```
pub fn put(target_locs: Vec<usize>, gate: Gate) -> CircuitElement {
    CircuitElement::Gate(PositionedGate::new(gate, target_locs, vec![]))
}

/// Place a gate controlled on |1⟩ of every control qubit.
///
/// # Example
/// ```
/// use qft_dataset::circuit::{control, CircuitElement};
/// use qft_dataset::gate::Gate;
/// let elem = control(vec![0], vec![1], Gate::X);
/// if let CircuitElement::Gate(cnot) = elem {
///     assert_eq!(cnot.control_locs, vec![0]);
///     assert_eq!(cnot.target_locs, vec![1]);
/// }
/// ```
pub fn control(ctrl_locs: Vec<usize>, target_locs: Vec<usize>, gate: Gate) -> CircuitElement {
    CircuitElement::Gate(PositionedGate::new(gate, target_locs, ctrl_locs))
}

/// Measure the listed qubits.
pub fn measure(locs: Vec<usize>) -> CircuitElement {
    CircuitElement::Measure(locs)
}
