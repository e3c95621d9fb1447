use ndarray::{array, Array2};
use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};

/// Named qubit gates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    X,
    Y,
    Z,
    H,
    S,
    T,
    SWAP,
    /// Phase gate: diag(1, e^(iθ)). Controlled, this is the `cp(θ)` of a QFT.
    Phase(f64),
    Rz(f64),
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gate::X => write!(f, "X"),
            Gate::Y => write!(f, "Y"),
            Gate::Z => write!(f, "Z"),
            Gate::H => write!(f, "H"),
            Gate::S => write!(f, "S"),
            Gate::T => write!(f, "T"),
            Gate::SWAP => write!(f, "SWAP"),
            Gate::Phase(theta) => write!(f, "Phase({:.4})", theta),
            Gate::Rz(theta) => write!(f, "Rz({:.4})", theta),
        }
    }
}

impl Gate {
    /// Number of qubits the gate acts on.
    pub fn num_sites(&self) -> usize {
        match self {
            Gate::SWAP => 2,
            _ => 1,
        }
    }

    /// Returns whether the gate matrix is diagonal.
    pub fn is_diagonal(&self) -> bool {
        matches!(
            self,
            Gate::Z | Gate::S | Gate::T | Gate::Phase(_) | Gate::Rz(_)
        )
    }

    /// Diagonal entries of a diagonal single-qubit gate.
    pub fn diagonal(&self) -> Option<[Complex64; 2]> {
        let one = Complex64::new(1.0, 0.0);
        match self {
            Gate::Z => Some([one, -one]),
            Gate::S => Some([one, Complex64::i()]),
            Gate::T => Some([one, Complex64::from_polar(1.0, FRAC_PI_4)]),
            Gate::Phase(theta) => Some([one, Complex64::from_polar(1.0, *theta)]),
            Gate::Rz(theta) => Some([
                Complex64::from_polar(1.0, -theta / 2.0),
                Complex64::from_polar(1.0, theta / 2.0),
            ]),
            _ => None,
        }
    }

    /// Return the adjoint gate.
    pub fn dagger(&self) -> Self {
        match self {
            Gate::H | Gate::X | Gate::Y | Gate::Z | Gate::SWAP => *self,
            Gate::S => Gate::Phase(-FRAC_PI_2),
            Gate::T => Gate::Phase(-FRAC_PI_4),
            Gate::Phase(theta) => Gate::Phase(-theta),
            Gate::Rz(theta) => Gate::Rz(-theta),
        }
    }

    /// Matrix of the gate in the computational basis, row-major over target qubits.
    pub fn matrix(&self) -> Array2<Complex64> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::i();

        if let Some([d0, d1]) = self.diagonal() {
            return array![[d0, zero], [zero, d1]];
        }

        match self {
            Gate::X => array![[zero, one], [one, zero]],
            Gate::Y => array![[zero, -i], [i, zero]],
            Gate::H => {
                let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
                array![[s, s], [s, -s]]
            }
            // |01> <-> |10>
            Gate::SWAP => array![
                [one, zero, zero, zero],
                [zero, zero, one, zero],
                [zero, one, zero, zero],
                [zero, zero, zero, one],
            ],
            _ => unreachable!("diagonal gates handled above"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_identity(m: &Array2<Complex64>) -> bool {
        m.indexed_iter().all(|((r, c), v)| {
            let expected = if r == c { 1.0 } else { 0.0 };
            (v - Complex64::new(expected, 0.0)).norm() < 1e-12
        })
    }

    #[test]
    fn test_dagger_is_inverse() {
        let gates = [
            Gate::X,
            Gate::Y,
            Gate::Z,
            Gate::H,
            Gate::S,
            Gate::T,
            Gate::SWAP,
            Gate::Phase(0.3),
            Gate::Rz(1.1),
        ];
        for gate in gates {
            let product = gate.dagger().matrix().dot(&gate.matrix());
            assert!(is_identity(&product), "{} dagger is not its inverse", gate);
        }
    }

    #[test]
    fn test_diagonal_flags_match_matrix() {
        for gate in [Gate::X, Gate::H, Gate::S, Gate::Phase(0.5), Gate::Rz(0.2)] {
            let m = gate.matrix();
            let off_diag_zero = m[[0, 1]].norm() < 1e-15 && m[[1, 0]].norm() < 1e-15;
            assert_eq!(gate.is_diagonal(), off_diag_zero, "{}", gate);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Gate::H.to_string(), "H");
        assert_eq!(Gate::Phase(FRAC_PI_2).to_string(), "Phase(1.5708)");
    }

    #[test]
    fn test_num_sites() {
        assert_eq!(Gate::SWAP.num_sites(), 2);
        assert_eq!(Gate::Phase(1.0).num_sites(), 1);
    }
}
