//! Narrow adapters over raw inventory-command output.
//!
//! Command output formats are not a stable contract, so all scraping lives
//! here as pure `&str -> value` functions that the detectors call. Absent or
//! malformed output parses to an empty result and the caller degrades to a
//! sentinel.

use crate::hardware::types::{round2, GpuInfo, GpuKind, MediaType};

/// Parse `Get-WmiObject Win32_VideoController | Select-Object Name, AdapterRAM`
/// output. The first three lines are the header block; each data row is the
/// adapter name followed by its RAM in bytes.
pub fn parse_windows_video_controllers(stdout: &str) -> Vec<GpuInfo> {
    let mut gpus = Vec::new();

    for line in stdout.trim().lines().skip(3) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        let name = if parts.len() > 1 {
            parts[..parts.len() - 1].join(" ")
        } else {
            "Unknown".to_string()
        };

        let vram_bytes: u64 = parts
            .last()
            .filter(|token| token.chars().all(|c| c.is_ascii_digit()))
            .and_then(|token| token.parse().ok())
            .unwrap_or(0);

        let upper = name.to_uppercase();
        let kind = if upper.contains("NVIDIA") || upper.contains("RADEON") {
            GpuKind::Dedicated
        } else {
            GpuKind::Integrated
        };

        gpus.push(GpuInfo {
            name,
            kind,
            vram_gib: round2(vram_bytes as f64 / 1_073_741_824.0),
        });
    }

    gpus
}

/// Parse `lspci` output filtered to display-class devices. The adapter name
/// is the text after the last colon.
pub fn parse_lspci_displays(stdout: &str) -> Vec<GpuInfo> {
    let mut gpus = Vec::new();

    for line in stdout.lines() {
        if !line.contains("VGA") {
            continue;
        }
        let name = line.rsplit(':').next().unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue;
        }

        let lower = name.to_lowercase();
        let kind = if ["nvidia", "radeon", "amd"].iter().any(|v| lower.contains(v)) {
            GpuKind::Dedicated
        } else {
            GpuKind::Integrated
        };

        // lspci does not report adapter memory
        gpus.push(GpuInfo {
            name,
            kind,
            vram_gib: 0.0,
        });
    }

    gpus
}

/// Parse `system_profiler SPDisplaysDataType` output, one adapter per
/// `Chipset Model:` line.
pub fn parse_macos_displays(stdout: &str) -> Vec<GpuInfo> {
    let mut gpus = Vec::new();

    for line in stdout.lines() {
        if !line.contains("Chipset Model") {
            continue;
        }
        let name = line.rsplit(':').next().unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue;
        }

        let kind = if name.to_lowercase().contains("intel") {
            GpuKind::Integrated
        } else {
            GpuKind::Dedicated
        };

        gpus.push(GpuInfo {
            name,
            kind,
            vram_gib: 0.0,
        });
    }

    gpus
}

/// Whether a CPU/processor descriptor mentions an AI accelerator.
pub fn contains_npu_marker(descriptor: &str) -> bool {
    let lower = descriptor.to_lowercase();
    ["npu", "neural", "vpu"].iter().any(|m| lower.contains(m))
}

/// Normalize a `Get-PhysicalDisk ... MediaType` value.
pub fn normalize_media_type(raw: &str) -> MediaType {
    let upper = raw.trim().to_uppercase();
    if upper.contains("SSD") {
        MediaType::Ssd
    } else if upper.contains("HDD") {
        MediaType::Hdd
    } else {
        MediaType::Unknown
    }
}
