//! Validation rules for prompts, system-prompt text and test cases.
//!
//! Handlers call these before touching the database so that bad input is
//! reported as `400 VALIDATION_ERROR` rather than a constraint failure.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length for a prompt name in characters.
pub const MAX_PROMPT_NAME_LENGTH: usize = 200;

/// Maximum length for a system prompt in characters.
pub const MAX_SYSTEM_PROMPT_LENGTH: usize = 100_000;

/// Maximum length for a test case user message in characters.
pub const MAX_USER_MESSAGE_LENGTH: usize = 20_000;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Shared non-empty + max-length check. Length is counted in chars, not bytes.
fn validate_text(label: &str, text: &str, max: usize) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(format!("{label} must not be empty")));
    }
    let len = text.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{label} exceeds maximum length of {max} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate a prompt name (used for both create and rename).
pub fn validate_prompt_name(name: &str) -> Result<(), CoreError> {
    validate_text("Prompt name", name, MAX_PROMPT_NAME_LENGTH)
}

/// Validate system-prompt text for a version or an ad-hoc run.
pub fn validate_system_prompt(text: &str) -> Result<(), CoreError> {
    validate_text("System prompt", text, MAX_SYSTEM_PROMPT_LENGTH)
}

/// Validate a test case's user message.
pub fn validate_user_message(text: &str) -> Result<(), CoreError> {
    validate_text("User message", text, MAX_USER_MESSAGE_LENGTH)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
