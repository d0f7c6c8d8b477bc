//! Error types for microbench-harness

use std::fmt;

use thiserror::Error;

/// Which lifecycle step of a benchmark failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPhase {
    Setup,
    Run,
    TearDown,
}

impl fmt::Display for StepPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepPhase::Setup => write!(f, "setup"),
            StepPhase::Run => write!(f, "run"),
            StepPhase::TearDown => write!(f, "teardown"),
        }
    }
}

/// Failure raised by a benchmark's setup, workload, or teardown closure
///
/// The message is passed through to the notifier unmodified; `detail`
/// optionally carries a diagnostic trace.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct StepError {
    message: String,
    detail: Option<String>,
}

impl StepError {
    /// Create a step error from a failure description
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    /// Attach a diagnostic trace to the error
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Raw failure description
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Diagnostic trace, if the step supplied one
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl From<String> for StepError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for StepError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// A step failure annotated with the suite and phase it aborted
///
/// This is what [`notify_error`](crate::Notifier::notify_error) receives.
#[derive(Error, Debug, Clone)]
#[error("{phase} step failed in suite '{suite}': {source}")]
pub struct SuiteError {
    suite: String,
    phase: StepPhase,
    #[source]
    source: StepError,
}

impl SuiteError {
    pub fn new(suite: impl Into<String>, phase: StepPhase, source: StepError) -> Self {
        Self {
            suite: suite.into(),
            phase,
            source,
        }
    }

    /// Name of the suite that was aborted
    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// Lifecycle step that raised the failure
    pub fn phase(&self) -> StepPhase {
        self.phase
    }

    /// The underlying step failure
    pub fn step_error(&self) -> &StepError {
        &self.source
    }
}
