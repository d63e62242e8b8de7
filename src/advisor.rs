//! Model suggestions for the detected hardware.
//!
//! Pure mapping from RAM and GPU facts to a recommendation; rendering is a
//! separate step so the rule itself stays testable.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::hardware::{GpuInfo, GpuKind};

/// Catalog recommended when the machine clears the RAM threshold.
pub const RECOMMENDED_MODELS: &[&str] = &["llama2:7b", "mistral", "gemma:2b", "codellama:7b"];

/// Ultra-light fallback for low-RAM machines.
pub const FALLBACK_MODEL: &str = "tinyllama";

/// Minimum RAM for the full catalog, in GiB.
pub const RAM_THRESHOLD_GIB: f64 = 8.0;

static MODEL_SIZE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)[-_:]?b\b").expect("valid model size pattern"));

/// Parameter count in billions from a model tag like `llama2:7b`, when the
/// name carries one.
pub fn detect_model_params(name: &str) -> Option<u64> {
    MODEL_SIZE_PATTERN
        .captures(&name.to_lowercase())
        .and_then(|caps| caps[1].parse().ok())
}

/// Advisory output of the RAM/GPU rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Suggested model tags, in catalog order.
    pub models: Vec<String>,
    /// RAM the suggestion was computed for, in GiB.
    pub ram_gib: f64,
    /// Below the catalog threshold; only the fallback is suggested.
    pub low_ram: bool,
    /// At least one dedicated adapter was detected.
    pub gpu_accelerated: bool,
}

impl Suggestion {
    /// Apply the suggestion rules. RAM at or above the threshold gets the
    /// fixed catalog, anything less gets the fallback only; a dedicated GPU
    /// anywhere in the list flips the acceleration note.
    pub fn for_system(ram_gib: f64, gpus: &[GpuInfo]) -> Self {
        let low_ram = ram_gib < RAM_THRESHOLD_GIB;
        let models = if low_ram {
            vec![FALLBACK_MODEL.to_string()]
        } else {
            RECOMMENDED_MODELS.iter().map(|m| m.to_string()).collect()
        };
        let gpu_accelerated = gpus.iter().any(|g| g.kind == GpuKind::Dedicated);

        Self {
            models,
            ram_gib,
            low_ram,
            gpu_accelerated,
        }
    }

    /// Render the advisory text.
    pub fn print(&self) {
        println!();
        println!("Suggested models for your system:");
        if self.low_ram {
            println!(
                "- ⚠️  Not enough RAM. Use very small models like `{}`",
                FALLBACK_MODEL
            );
        } else {
            println!(
                "- ✅ {} [Best for {}GB RAM]",
                self.models.join(", "),
                self.ram_gib as u64
            );
            for model in &self.models {
                match detect_model_params(model) {
                    Some(params) => println!("  🔽 ollama run {}  ({}B params)", model, params),
                    None => println!("  🔽 ollama run {}", model),
                }
            }
        }

        if self.gpu_accelerated {
            println!("💡 Dedicated GPU detected. GPU acceleration recommended.");
        } else {
            println!("⚠️  Only integrated GPUs detected. Use lightweight models for best performance.");
        }

        println!();
        println!("For more, visit: https://ollama.com/library");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_model_params() {
        assert_eq!(detect_model_params("llama2:7b"), Some(7));
        assert_eq!(detect_model_params("gemma:2b"), Some(2));
        assert_eq!(detect_model_params("some-model-70b"), Some(70));
        assert_eq!(detect_model_params("mistral"), None);
        assert_eq!(detect_model_params("tinyllama"), None);
    }

    #[test]
    fn test_threshold_boundary() {
        let at = Suggestion::for_system(8.0, &[]);
        assert!(!at.low_ram);
        assert_eq!(at.models, RECOMMENDED_MODELS);

        let below = Suggestion::for_system(7.99, &[]);
        assert!(below.low_ram);
        assert_eq!(below.models, vec![FALLBACK_MODEL]);
    }
}
