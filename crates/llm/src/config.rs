use std::time::Duration;

/// Default Azure OpenAI API version.
pub const DEFAULT_API_VERSION: &str = "2024-02-01";
/// Default sampling temperature for prompt runs.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Default per-call HTTP timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Configuration for the hosted chat-completion API.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base resource URL, e.g. `https://my-resource.openai.azure.com`.
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    /// Deployment (model) identifier.
    pub deployment: String,
    pub temperature: f32,
    pub request_timeout: Duration,
}

impl LlmConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                         | Required | Default      |
    /// |---------------------------------|----------|--------------|
    /// | `AZURE_OPENAI_ENDPOINT`         | **yes**  | --           |
    /// | `AZURE_OPENAI_API_KEY`          | **yes**  | --           |
    /// | `AZURE_OPENAI_API_VERSION`      | no       | `2024-02-01` |
    /// | `AZURE_OPENAI_DEPLOYMENT_NAME`  | **yes**  | --           |
    /// | `LLM_TEMPERATURE`               | no       | `0.7`        |
    /// | `LLM_REQUEST_TIMEOUT_SECS`      | no       | `60`         |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or a value fails to parse.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok()).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(get: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, String> {
            get(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| format!("{key} must be set in the environment"))
        };

        let endpoint = required("AZURE_OPENAI_ENDPOINT")?
            .trim_end_matches('/')
            .to_string();
        let api_key = required("AZURE_OPENAI_API_KEY")?;
        let deployment = required("AZURE_OPENAI_DEPLOYMENT_NAME")?;
        let api_version =
            get("AZURE_OPENAI_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let temperature: f32 = match get("LLM_TEMPERATURE") {
            Some(v) => v
                .parse()
                .map_err(|_| format!("LLM_TEMPERATURE must be a number, got '{v}'"))?,
            None => DEFAULT_TEMPERATURE,
        };

        let timeout_secs: u64 = match get("LLM_REQUEST_TIMEOUT_SECS") {
            Some(v) => v
                .parse()
                .map_err(|_| format!("LLM_REQUEST_TIMEOUT_SECS must be a valid u64, got '{v}'"))?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            endpoint,
            api_key,
            api_version,
            deployment,
            temperature,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
