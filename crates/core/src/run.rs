//! Per-test-case results of a prompt run.
//!
//! A run calls the chat model once per test case. Each call either completes
//! with output text or fails; a failure is kept as a value local to its test
//! case so the rest of the batch is unaffected. Callers that only want text
//! use [`RunOutcome::output_text`], which substitutes the error message for
//! the missing output.

use std::fmt::Display;

use crate::types::DbId;

/// Where a failed call went wrong. Decides the prefix of the error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The external chat API rejected the call or could not be reached.
    ExternalApi,
    /// Anything else (malformed response, empty completion, ...).
    Internal,
}

impl FailureKind {
    /// Prefix placed in front of the error detail.
    pub fn prefix(self) -> &'static str {
        match self {
            FailureKind::ExternalApi => "OpenAI Error",
            FailureKind::Internal => "Internal Error",
        }
    }
}

/// Outcome of running a single test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { output: String },
    Failed { error: String },
}

impl RunOutcome {
    /// Successful completion. The output is trimmed.
    pub fn completed(output: &str) -> Self {
        RunOutcome::Completed {
            output: output.trim().to_string(),
        }
    }

    /// Failed call, rendered as `"<prefix>: <detail>"`.
    pub fn failed(kind: FailureKind, detail: impl Display) -> Self {
        RunOutcome::Failed {
            error: format!("{}: {detail}", kind.prefix()),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }

    /// The text shown in place of the output: the completion or the error.
    pub fn output_text(&self) -> &str {
        match self {
            RunOutcome::Completed { output } => output,
            RunOutcome::Failed { error } => error,
        }
    }

    /// Stable status label used by the HTTP layer.
    pub fn status_label(&self) -> &'static str {
        match self {
            RunOutcome::Completed { .. } => "completed",
            RunOutcome::Failed { .. } => "failed",
        }
    }
}

/// One test case as fed into a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInput {
    pub test_case_id: DbId,
    pub user_message: String,
}

/// Result for one test case, tagged with the test case it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunCaseResult {
    pub test_case_id: DbId,
    pub user_message: String,
    pub outcome: RunOutcome,
}

impl RunCaseResult {
    pub fn new(input: RunInput, outcome: RunOutcome) -> Self {
        Self {
            test_case_id: input.test_case_id,
            user_message: input.user_message,
            outcome,
        }
    }
}

/// Count of completed and failed cases in a batch, for logging.
pub fn summarize(results: &[RunCaseResult]) -> (usize, usize) {
    let completed = results.iter().filter(|r| r.outcome.is_completed()).count();
    (completed, results.len() - completed)
}
