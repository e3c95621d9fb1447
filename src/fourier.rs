//! Classical discrete Fourier transforms and the simulated QFT they stand in for.

use num_complex::Complex64;
use rustfft::FftPlanner;

use crate::apply::apply;
use crate::easybuild::qft_circuit;
use crate::error::Result;
use crate::state::State;

/// Forward DFT, unnormalized: X_k = Σ_j x_j e^(-2πi jk/N).
pub fn fft(input: &[Complex64]) -> Vec<Complex64> {
    let mut buf = input.to_vec();
    if buf.is_empty() {
        return buf;
    }
    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(buf.len()).process(&mut buf);
    buf
}

/// Inverse DFT normalized by 1/N, so that `ifft(&fft(x)) == x`.
pub fn ifft(input: &[Complex64]) -> Vec<Complex64> {
    let mut buf = input.to_vec();
    if buf.is_empty() {
        return buf;
    }
    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_inverse(buf.len()).process(&mut buf);
    // rustfft does not normalize
    let scale = 1.0 / buf.len() as f64;
    for x in buf.iter_mut() {
        *x *= scale;
    }
    buf
}

/// Amplitudes after running the QFT circuit on the normalized input.
///
/// Equal to `ifft(x) * √N / ‖x‖`.
///
/// # Errors
/// Fails if the input length is not a power of two or the input is all zero.
pub fn qft(input: &[Complex64]) -> Result<Vec<Complex64>> {
    let mut state = State::from_amplitudes(input.to_vec())?;
    state.normalize()?;
    let circuit = qft_circuit(state.nbits)?;
    Ok(apply(&circuit, &state).data.to_vec())
}
