//! Configuration for the model service client.

use serde::{Deserialize, Serialize};

/// Where the local model service lives and how to test it. Injected into the
/// client so tests can point it at a mock endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the Ollama-compatible HTTP endpoint.
    pub base_url: String,
    /// Timeout for a single generation request, in seconds.
    pub generate_timeout_secs: u64,
    /// Prompt sent to every model under test.
    pub test_prompt: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            generate_timeout_secs: 60,
            test_prompt: "What is the capital of France?".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.generate_timeout_secs, 60);
        assert!(config.test_prompt.contains("France"));
    }
}
