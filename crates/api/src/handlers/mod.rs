pub mod prompts;
pub mod run;
pub mod run_logs;
pub mod test_cases;
pub mod users;
pub mod versions;
