//! End-to-end generation of one QFT/FFT dataset.

use log::debug;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::easybuild::dataset_circuit;
use crate::error::{Error, Result};
use crate::fourier::fft;
use crate::measure::Counts;
use crate::quantize::FixedPoint;
use crate::simulator;

/// Largest register the dense simulator is asked to handle.
pub const MAX_QUBITS: usize = 16;

/// Parameters of a generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    pub num_qubits: usize,
    pub shots: usize,
    /// Seed for the input and the measurement sampling; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub fixed_point: FixedPoint,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            num_qubits: 4,
            shots: 1024,
            seed: None,
            fixed_point: FixedPoint::default(),
        }
    }
}

impl DatasetConfig {
    pub fn validate(&self) -> Result<()> {
        if self.num_qubits == 0 || self.num_qubits > MAX_QUBITS {
            return Err(Error::QubitCount(self.num_qubits));
        }
        Ok(())
    }

    /// Number of complex samples, 2^num_qubits.
    pub fn num_samples(&self) -> usize {
        1 << self.num_qubits
    }
}

/// One generated dataset. Field names are the serialized column names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub input_data_real: Vec<f64>,
    pub input_data_imag: Vec<f64>,
    pub qft_output_real: Vec<f64>,
    pub qft_output_imag: Vec<f64>,
    pub qft_fixed_point_real: Vec<i64>,
    pub qft_fixed_point_imag: Vec<i64>,
    pub measurement_counts: Counts,
}

/// A single sample across all per-sample columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatasetRow {
    pub input_data_real: f64,
    pub input_data_imag: f64,
    pub qft_output_real: f64,
    pub qft_output_imag: f64,
    pub qft_fixed_point_real: i64,
    pub qft_fixed_point_imag: i64,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.input_data_real.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input_data_real.is_empty()
    }

    pub fn input(&self) -> Vec<Complex64> {
        zip_complex(&self.input_data_real, &self.input_data_imag)
    }

    pub fn qft_output(&self) -> Vec<Complex64> {
        zip_complex(&self.qft_output_real, &self.qft_output_imag)
    }

    pub fn rows(&self) -> impl Iterator<Item = DatasetRow> + '_ {
        (0..self.len()).map(move |i| DatasetRow {
            input_data_real: self.input_data_real[i],
            input_data_imag: self.input_data_imag[i],
            qft_output_real: self.qft_output_real[i],
            qft_output_imag: self.qft_output_imag[i],
            qft_fixed_point_real: self.qft_fixed_point_real[i],
            qft_fixed_point_imag: self.qft_fixed_point_imag[i],
        })
    }
}

fn zip_complex(re: &[f64], im: &[f64]) -> Vec<Complex64> {
    re.iter()
        .zip(im.iter())
        .map(|(&re, &im)| Complex64::new(re, im))
        .collect()
}

/// Random complex signal with real and imaginary parts uniform in [0, 1).
pub fn random_input(len: usize, rng: &mut impl Rng) -> Vec<Complex64> {
    let re: Vec<f64> = (0..len).map(|_| rng.r#gen()).collect();
    let im: Vec<f64> = (0..len).map(|_| rng.r#gen()).collect();
    zip_complex(&re, &im)
}

/// Generate a dataset, seeding the RNG from `config.seed`.
pub fn generate(config: &DatasetConfig) -> Result<Dataset> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_with(config, &mut rng)
}

/// Generate a dataset drawing all randomness from `rng`.
///
/// The input is drawn first, then the measurement shots.
pub fn generate_with(config: &DatasetConfig, rng: &mut impl Rng) -> Result<Dataset> {
    config.validate()?;

    let input = random_input(config.num_samples(), rng);

    let mut circuit = dataset_circuit(config.num_qubits)?;
    circuit.measure_all();
    debug!("measurement circuit:\n{}", circuit);
    let measurement_counts = simulator::run(&circuit, config.shots, rng)?;

    let qft_output = fft(&input);
    let fixed = config.fixed_point.quantize_complex(&qft_output);
    debug!(
        "quantized {} samples with {} fraction bits",
        qft_output.len(),
        config.fixed_point.frac_bits()
    );

    Ok(Dataset {
        input_data_real: input.iter().map(|c| c.re).collect(),
        input_data_imag: input.iter().map(|c| c.im).collect(),
        qft_output_real: qft_output.iter().map(|c| c.re).collect(),
        qft_output_imag: qft_output.iter().map(|c| c.im).collect(),
        qft_fixed_point_real: fixed.real,
        qft_fixed_point_imag: fixed.imag,
        measurement_counts,
    })
}
