use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use qft_dataset::dataset::{self, DatasetConfig, MAX_QUBITS};
use qft_dataset::export;
use qft_dataset::quantize::FixedPoint;

const JSON_FILE: &str = "qft_output.json";
const CSV_FILE: &str = "qft_output.csv";

#[derive(Parser, Debug)]
#[command(name = "qft-dataset")]
#[command(about = "Generate a QFT/FFT dataset with fixed-point output for FPGA test benches", long_about = None)]
struct Cli {
    /// Number of qubits; the signal has 2^qubits samples
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=MAX_QUBITS as i64))]
    qubits: u8,

    /// Measurement shots for the circuit simulation
    #[arg(short, long, default_value_t = 1024)]
    shots: usize,

    /// RNG seed for a reproducible dataset
    #[arg(long)]
    seed: Option<u64>,

    /// Fraction bits of the fixed-point output
    #[arg(long, default_value_t = 15)]
    frac_bits: u32,

    /// Directory receiving qft_output.json and qft_output.csv
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = DatasetConfig {
        num_qubits: cli.qubits as usize,
        shots: cli.shots,
        seed: cli.seed,
        fixed_point: FixedPoint::new(cli.frac_bits)?,
    };

    let data = dataset::generate(&config)?;
    info!("Input Data:\n{:?}", data.input());
    info!("QFT Measurement Result:\n{:?}", data.measurement_counts);
    info!(
        "Fixed-Point QFT Output:\n real: {:?}\n imag: {:?}",
        data.qft_fixed_point_real, data.qft_fixed_point_imag
    );

    let json_path = cli.out_dir.join(JSON_FILE);
    export::write_json(&data, &json_path)
        .with_context(|| format!("writing {}", json_path.display()))?;
    info!("QFT data saved as JSON to {}", json_path.display());

    let csv_path = cli.out_dir.join(CSV_FILE);
    export::write_csv(&data, &csv_path)
        .with_context(|| format!("writing {}", csv_path.display()))?;
    info!("QFT data saved as CSV to {}", csv_path.display());

    Ok(())
}
