//! Utility modules

pub mod error;
pub mod rng;

pub use error::{StepError, StepPhase, SuiteError};
pub use rng::DeterministicRng;
