//! Handler for running a prompt against its test cases.
//!
//! One chat completion per test case, in ascending test case order. A failed
//! completion is reported in that case's entry with `status: "failed"`; the
//! request itself still answers 200, even when recording run logs fails.

use axum::extract::{Path, State};
use axum::Json;
use profiler_core::prompts::validate_system_prompt;
use profiler_core::run::{summarize, RunCaseResult, RunInput};
use profiler_core::types::DbId;
use profiler_db::models::run_log::CreateRunLog;
use profiler_db::repositories::{RunLogRepo, TestCaseRepo, VersionRepo};
use profiler_llm::runner::run_test_cases;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::prompts::ensure_prompt_owned;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /run/prompt/{prompt_id}`.
#[derive(Debug, Default, Deserialize)]
pub struct RunPromptRequest {
    /// Text to run. The prompt's current version is used when omitted.
    pub system_prompt: Option<String>,
    /// Persist one run log per test case.
    #[serde(default)]
    pub log: bool,
}

/// One entry of a run result.
#[derive(Debug, Serialize)]
pub struct RunResultItem {
    pub test_case_id: DbId,
    pub user_message: String,
    /// The completion, or the error text when `status` is `"failed"`.
    pub output: String,
    pub status: &'static str,
}

impl From<RunCaseResult> for RunResultItem {
    fn from(result: RunCaseResult) -> Self {
        let status = result.outcome.status_label();
        Self {
            output: result.outcome.output_text().to_string(),
            test_case_id: result.test_case_id,
            user_message: result.user_message,
            status,
        }
    }
}

/// Response body for a run.
#[derive(Debug, Serialize)]
pub struct RunPromptResponse {
    pub results: Vec<RunResultItem>,
}

/// POST /api/v1/run/prompt/{prompt_id}
pub async fn run_prompt(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(prompt_id): Path<DbId>,
    body: Option<Json<RunPromptRequest>>,
) -> AppResult<Json<DataResponse<RunPromptResponse>>> {
    // Both fields are optional, so a bare POST is a valid request.
    let input = body.map(|Json(b)| b).unwrap_or_default();

    ensure_prompt_owned(&state, prompt_id, auth.user_id).await?;

    let system_prompt = match input.system_prompt {
        Some(text) => {
            if text.trim().is_empty() {
                return Err(AppError::BadRequest("System prompt is required".into()));
            }
            validate_system_prompt(&text)?;
            text
        }
        None => {
            VersionRepo::get_current(&state.pool, prompt_id)
                .await?
                .ok_or_else(|| AppError::NotFound("No versions found for this prompt".into()))?
                .system_prompt
        }
    };

    let inputs: Vec<RunInput> = TestCaseRepo::list_for_prompt(&state.pool, prompt_id)
        .await?
        .into_iter()
        .map(RunInput::from)
        .collect();
    if inputs.is_empty() {
        return Err(AppError::NotFound(
            "No test cases found for this prompt".into(),
        ));
    }

    tracing::info!(
        prompt_id,
        user_id = auth.user_id,
        test_cases = inputs.len(),
        "Running prompt"
    );

    let results = run_test_cases(
        state.chat.client.as_ref(),
        &system_prompt,
        state.chat.temperature,
        inputs,
    )
    .await;

    let (completed, failed) = summarize(&results);
    tracing::info!(prompt_id, completed, failed, "Prompt run finished");

    if input.log {
        let logs: Vec<CreateRunLog> = results
            .iter()
            .map(|r| CreateRunLog {
                user_id: auth.user_id,
                prompt_id: Some(prompt_id),
                system_prompt: system_prompt.clone(),
                user_message: r.user_message.clone(),
                response: r.outcome.output_text().to_string(),
            })
            .collect();
        // Best effort once results exist.
        match RunLogRepo::create_many(&state.pool, &logs).await {
            Ok(rows) => tracing::debug!(prompt_id, count = rows.len(), "Run logs recorded"),
            Err(e) => tracing::warn!(prompt_id, error = %e, "Failed to record run logs"),
        }
    }

    Ok(Json(DataResponse {
        data: RunPromptResponse {
            results: results.into_iter().map(RunResultItem::from).collect(),
        },
    }))
}
