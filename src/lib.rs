pub mod index;
pub mod gate;
pub mod circuit;
pub mod state;
pub mod instruct;
pub mod apply;
pub mod measure;
pub mod simulator;
pub mod easybuild;
pub mod fourier;
pub mod quantize;
pub mod dataset;
pub mod export;
pub mod error;

pub use gate::Gate;
pub use circuit::{Circuit, CircuitElement, CircuitError, PositionedGate, control, put};
pub use state::State;
pub use apply::apply;
pub use measure::Counts;
pub use quantize::FixedPoint;
pub use dataset::{Dataset, DatasetConfig, generate};
pub use error::{Error, Result};
