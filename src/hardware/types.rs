use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable snapshot of everything the probe detects. Created once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareFacts {
    /// Platform name plus verbose descriptor.
    pub os_label: String,
    /// Total physical memory in GiB, rounded to 2 decimals.
    pub ram_gib: f64,
    /// Logical core count.
    pub cpu_cores: usize,
    /// Detected adapters in detection order, never empty (sentinel on failure).
    pub gpus: Vec<GpuInfo>,
    pub npu: NpuStatus,
    pub disk: DiskInfo,
}

/// One detected video adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuInfo {
    pub name: String,
    pub kind: GpuKind,
    /// VRAM in GiB; 0.0 when the platform path cannot report it.
    pub vram_gib: f64,
}

impl GpuInfo {
    /// Sentinel entry for a failed or empty detection.
    pub fn not_detected() -> Self {
        Self {
            name: "Not detected".to_string(),
            kind: GpuKind::Unknown,
            vram_gib: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GpuKind {
    Dedicated,
    Integrated,
    Unknown,
}

impl fmt::Display for GpuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuKind::Dedicated => write!(f, "Dedicated"),
            GpuKind::Integrated => write!(f, "Integrated"),
            GpuKind::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NpuStatus {
    Detected,
    NotDetected,
}

impl fmt::Display for NpuStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NpuStatus::Detected => write!(f, "Detected"),
            NpuStatus::NotDetected => write!(f, "Not detected"),
        }
    }
}

/// System drive facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskInfo {
    pub media: MediaType,
    /// Total capacity in GiB, rounded to 1 decimal.
    pub total_gib: f64,
    pub mount_point: String,
}

impl DiskInfo {
    /// Sentinel for a failed detection.
    pub fn unknown() -> Self {
        Self {
            media: MediaType::Unknown,
            total_gib: 0.0,
            mount_point: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Ssd,
    Hdd,
    Unknown,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Ssd => write!(f, "SSD"),
            MediaType::Hdd => write!(f, "HDD"),
            MediaType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Bytes to GiB rounded to two decimals.
pub fn bytes_to_gib(bytes: u64) -> f64 {
    round2(bytes as f64 / 1_073_741_824.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        let gpu = GpuInfo::not_detected();
        assert_eq!(gpu.name, "Not detected");
        assert_eq!(gpu.kind, GpuKind::Unknown);
        assert_eq!(gpu.vram_gib, 0.0);

        let disk = DiskInfo::unknown();
        assert_eq!(disk.media, MediaType::Unknown);
        assert_eq!(disk.mount_point, "/");
    }

    #[test]
    fn test_bytes_to_gib() {
        assert_eq!(bytes_to_gib(1_073_741_824), 1.0);
        assert_eq!(bytes_to_gib(16 * 1_073_741_824), 16.0);
        // 10 GB marketing bytes come out below 10 GiB
        assert_eq!(bytes_to_gib(10_000_000_000), 9.31);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(MediaType::Unknown.to_string(), "UNKNOWN");
        assert_eq!(NpuStatus::NotDetected.to_string(), "Not detected");
        assert_eq!(GpuKind::Dedicated.to_string(), "Dedicated");
    }
}
