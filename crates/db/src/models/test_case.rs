//! Test case entity model and DTOs.

use profiler_core::run::RunInput;
use profiler_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A test case row from the `test_cases` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TestCase {
    pub id: DbId,
    pub user_message: String,
    pub prompt_id: DbId,
}

impl From<TestCase> for RunInput {
    fn from(tc: TestCase) -> Self {
        RunInput {
            test_case_id: tc.id,
            user_message: tc.user_message,
        }
    }
}

/// DTO for creating a new test case.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestCase {
    pub user_message: String,
}

/// DTO for updating an existing test case. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTestCase {
    pub user_message: Option<String>,
}
