//! Chat-completion client used to run prompts against a hosted model.
//!
//! - [`client`] -- the [`ChatClient`] seam plus request/message types.
//! - [`azure`] -- Azure OpenAI implementation over [`reqwest`].
//! - [`config`] -- environment-driven client configuration.
//! - [`runner`] -- sequential batch run of a system prompt over test cases.

pub mod azure;
pub mod client;
pub mod config;
pub mod error;
pub mod runner;

pub use azure::AzureOpenAiClient;
pub use client::{ChatClient, ChatMessage, ChatRequest, ChatRole};
pub use config::LlmConfig;
pub use error::LlmError;
