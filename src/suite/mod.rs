//! Benchmark data model
//!
//! - Benchmark: one named unit of timed work with optional setup/teardown
//! - Suite: an ordered group of benchmarks sharing one run lifecycle
//! - Registry: ordered collection of suites, run in registration order
//! - Scoring helpers: geometric means over result sets

pub mod benchmark;
pub mod registry;
pub mod score;

pub use benchmark::{Benchmark, BenchmarkResult, StepContext, StepFn};
pub use registry::{Registry, Suite};
pub use score::{format_score, geometric_mean, geometric_mean_time};
