//! Hardware probing: OS, RAM, CPU, GPU, NPU and disk facts.

pub mod detector;
pub mod parsers;
pub mod types;

pub use detector::{for_host, HardwareDetector};
pub use types::{DiskInfo, GpuInfo, GpuKind, HardwareFacts, MediaType, NpuStatus};

use sysinfo::System;
use tracing::info;

use crate::hardware::types::bytes_to_gib;

impl HardwareFacts {
    /// Probe the current machine. Best effort: each sub-detector fails
    /// independently into its sentinel, so this always returns a snapshot.
    pub fn detect() -> Self {
        Self::with_detector(for_host().as_ref())
    }

    /// Probe with an explicit platform detector.
    pub fn with_detector(detector: &dyn HardwareDetector) -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        let facts = Self {
            os_label: os_label(),
            ram_gib: bytes_to_gib(sys.total_memory()),
            cpu_cores: sys.cpus().len(),
            gpus: detector.gpus(),
            npu: detector.npu(),
            disk: detector.disk(),
        };

        info!(
            os = %facts.os_label,
            ram_gib = facts.ram_gib,
            cpu_cores = facts.cpu_cores,
            gpus = facts.gpus.len(),
            "collected hardware facts"
        );

        facts
    }

    /// Whether any detected adapter is a discrete GPU.
    pub fn has_dedicated_gpu(&self) -> bool {
        self.gpus.iter().any(|g| g.kind == GpuKind::Dedicated)
    }
}

/// Platform name plus verbose descriptor, falling back to `system + release`
/// when the verbose form is unavailable.
fn os_label() -> String {
    let name = System::name().unwrap_or_else(|| std::env::consts::OS.to_string());
    match System::long_os_version() {
        Some(version) => format!("{} (Version: {})", name, version),
        None => {
            let release = System::kernel_version().unwrap_or_else(|| "unknown".to_string());
            format!("{} {}", name, release)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_always_completes() {
        let facts = HardwareFacts::detect();
        assert!(!facts.os_label.is_empty());
        assert!(facts.cpu_cores >= 1);
        // The sentinel guarantee: the GPU list is never empty
        assert!(!facts.gpus.is_empty());
    }
}
