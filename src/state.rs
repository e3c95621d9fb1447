use ndarray::Array1;
use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::index::mixed_radix_index;

/// Pure state of an n-qubit register.
///
/// Amplitudes are stored row-major: qubit 0 is the most significant bit of the index.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub nbits: usize,
    pub data: Array1<Complex64>,
}

impl State {
    /// Creates |0,0,...,0>
    pub fn zero_state(nbits: usize) -> Self {
        let mut data = Array1::zeros(1 << nbits);
        data[0] = Complex64::new(1.0, 0.0);
        State { nbits, data }
    }

    /// Creates |b_0, b_1, ..., b_{n-1}>.
    ///
    /// # Panics
    /// Panics if any entry of `bits` is not 0 or 1.
    pub fn product_state(bits: &[usize]) -> Self {
        assert!(bits.iter().all(|&b| b < 2), "bits must be 0 or 1, got {:?}", bits);
        let nbits = bits.len();
        let index = mixed_radix_index(bits, &vec![2; nbits]);
        let mut data = Array1::zeros(1 << nbits);
        data[index] = Complex64::new(1.0, 0.0);
        State { nbits, data }
    }

    /// Wrap raw amplitudes. The length must be a power of two; no normalization is applied.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> Result<Self> {
        let len = amplitudes.len();
        if !len.is_power_of_two() {
            return Err(Error::NotPowerOfTwo(len));
        }
        Ok(State {
            nbits: len.trailing_zeros() as usize,
            data: Array1::from(amplitudes),
        })
    }

    /// Qubit dimensions `[2; nbits]`, for the mixed-radix helpers.
    pub fn dims(&self) -> Vec<usize> {
        vec![2; self.nbits]
    }

    /// L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Scale to unit norm.
    pub fn normalize(&mut self) -> Result<()> {
        let norm = self.norm();
        if norm < 1e-300 {
            return Err(Error::ZeroNorm);
        }
        self.data.mapv_inplace(|c| c / norm);
        Ok(())
    }

    /// Length of the data vector
    pub fn total_dim(&self) -> usize {
        self.data.len()
    }
}
