//! Fixed-point quantization for hardware consumers.
//!
//! A value `x` is stored as the integer `round(x * 2^frac_bits)`, rounding
//! halfway cases to even. With the default 15 fraction bits this is the Q15
//! scaling used by 16-bit DSP datapaths; integer bits are not bounded, so
//! large FFT bins need a wider word.

use num_complex::Complex64;

use crate::error::{Error, Result};

/// Binary fixed-point format with a fixed number of fraction bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPoint {
    frac_bits: u32,
}

impl Default for FixedPoint {
    fn default() -> Self {
        FixedPoint { frac_bits: 15 }
    }
}

/// Independently quantized real and imaginary parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantizedSignal {
    pub real: Vec<i64>,
    pub imag: Vec<i64>,
}

impl FixedPoint {
    pub const MAX_FRAC_BITS: u32 = 62;

    pub fn new(frac_bits: u32) -> Result<Self> {
        if frac_bits > Self::MAX_FRAC_BITS {
            return Err(Error::FracBits(frac_bits));
        }
        Ok(FixedPoint { frac_bits })
    }

    pub fn frac_bits(&self) -> u32 {
        self.frac_bits
    }

    /// 2^frac_bits
    pub fn scale(&self) -> f64 {
        (1u64 << self.frac_bits) as f64
    }

    /// Values beyond the i64 range saturate; NaN maps to 0.
    pub fn quantize(&self, x: f64) -> i64 {
        (x * self.scale()).round_ties_even() as i64
    }

    pub fn dequantize(&self, q: i64) -> f64 {
        q as f64 / self.scale()
    }

    pub fn quantize_complex(&self, values: &[Complex64]) -> QuantizedSignal {
        QuantizedSignal {
            real: values.iter().map(|v| self.quantize(v.re)).collect(),
            imag: values.iter().map(|v| self.quantize(v.im)).collect(),
        }
    }
}
