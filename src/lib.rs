//! Local hardware diagnostics for running LLMs.
//!
//! Probes the machine's OS, RAM, CPU, GPU, NPU and disk, maps the facts to
//! heuristic model suggestions, and can exercise a local Ollama-compatible
//! HTTP endpoint.
//!
//! ## Main Components
//!
//! - `hardware`: best-effort platform probing; failures degrade to sentinels
//! - `advisor`: pure RAM/GPU rules mapped to a model catalog
//! - `service`: HTTP client for listing and test-driving served models
//! - `config`: injected service endpoint configuration

pub mod advisor;
pub mod config;
pub mod error;
pub mod hardware;
pub mod service;

pub use advisor::Suggestion;
pub use config::ServiceConfig;
pub use hardware::HardwareFacts;
pub use service::OllamaClient;

/// Library errors
pub use anyhow::{Error, Result};
