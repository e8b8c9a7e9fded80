#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod analysis;
pub mod bridge;
pub mod config;
pub mod errors;
pub mod load_factor;
pub mod peak;
pub mod response;

pub use analysis::{analyse, sample_response, AnalysisSummary};
pub use bridge::{BridgeParameters, DEFAULT_JOGGER_VELOCITY};
pub use config::{AnalysisOptions, ParameterFile};
pub use errors::{ConfigError, InputError, Parameter};
pub use load_factor::{jogger_load, jogger_load_factor, JOGGER_REFERENCE_FORCE};
pub use peak::{find_peak_time, trace_peak_search, PeakSearch};
pub use response::{
    amplitude_ratio, amplitude_ratio_curvature, amplitude_ratio_rate, ResponseParameters,
};
