//! Batch run of a system prompt over a prompt's test cases.
//!
//! Calls are made one at a time in input order; the batch latency is the sum
//! of the per-call latencies. A failed call turns into a
//! [`RunOutcome::Failed`] for that test case and the loop moves on.

use profiler_core::run::{RunCaseResult, RunInput, RunOutcome};

use crate::client::{ChatClient, ChatRequest};

/// Run `system_prompt` against every input and collect one result per input,
/// in the same order.
pub async fn run_test_cases(
    client: &dyn ChatClient,
    system_prompt: &str,
    temperature: f32,
    inputs: Vec<RunInput>,
) -> Vec<RunCaseResult> {
    let mut results = Vec::with_capacity(inputs.len());

    for input in inputs {
        let request = ChatRequest::system_and_user(system_prompt, &input.user_message, temperature);

        let outcome = match client.complete(&request).await {
            Ok(text) => RunOutcome::completed(&text),
            Err(e) => {
                tracing::warn!(
                    test_case_id = input.test_case_id,
                    error = %e,
                    "Chat completion failed for test case"
                );
                RunOutcome::failed(e.failure_kind(), &e)
            }
        };

        results.push(RunCaseResult::new(input, outcome));
    }

    results
}
