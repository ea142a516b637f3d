//! Per-prompt version numbering.
//!
//! Numbers are scoped to a single prompt: the first version of every prompt
//! is `1`, and each later version is one greater than the current maximum.
//! The repository reads the current maximum while holding a row lock on the
//! parent prompt and feeds it through [`next_version_number`].

/// Number assigned to the first version of a prompt.
pub const FIRST_VERSION_NUMBER: i32 = 1;

/// Compute the next version number from the current maximum, if any.
pub fn next_version_number(current_max: Option<i32>) -> i32 {
    match current_max {
        Some(max) => max + 1,
        None => FIRST_VERSION_NUMBER,
    }
}
