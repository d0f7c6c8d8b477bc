//! Suite execution
//!
//! - SuiteRunner: trampoline-driven Setup -> Run -> TearDown state machine
//! - Notifier: callback contract for the external collaborator

pub mod driver;
pub mod notifier;

pub use driver::{RunnerOptions, SuiteRunner};
pub use notifier::{Notifier, SuiteStatus, TracingNotifier};
