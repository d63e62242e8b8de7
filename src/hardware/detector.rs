//! Platform-specific detection behind one capability trait.
//!
//! Each OS variant shells out to its inventory tools and hands the raw text
//! to the parsers. Every method degrades to a sentinel on failure; a broken
//! detector must never stop the rest of the probe.

use std::path::Path;
use std::process::Command;

use sysinfo::Disks;
use tracing::{debug, warn};

use crate::error::ProbeError;
use crate::hardware::parsers;
use crate::hardware::types::{round1, DiskInfo, GpuInfo, MediaType, NpuStatus};

/// Per-platform hardware capability: adapter enumeration, NPU presence,
/// system-drive facts. RAM/CPU/OS facts are platform-neutral and live with
/// the facts assembly instead.
pub trait HardwareDetector {
    fn gpus(&self) -> Vec<GpuInfo>;
    fn npu(&self) -> NpuStatus;
    fn disk(&self) -> DiskInfo;
}

/// Pick the detector for the host OS. Unknown platforms get a detector that
/// reports sentinels for everything.
pub fn for_host() -> Box<dyn HardwareDetector> {
    match std::env::consts::OS {
        "windows" => Box::new(WindowsDetector),
        "linux" => Box::new(LinuxDetector),
        "macos" => Box::new(MacosDetector),
        other => {
            warn!(os = other, "no hardware detector for this platform");
            Box::new(UnsupportedDetector)
        }
    }
}

/// Run an inventory command and capture stdout as text.
fn run_command(program: &str, args: &[&str]) -> Result<String, ProbeError> {
    let output = Command::new(program).args(args).output().map_err(|source| {
        ProbeError::CommandUnavailable {
            command: program.to_string(),
            source,
        }
    })?;

    if !output.status.success() {
        return Err(ProbeError::CommandFailed {
            command: program.to_string(),
            status: output.status,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// GPU list with the sentinel guarantee: never empty, one `Not detected`
/// entry when enumeration fails or finds nothing.
fn gpus_or_sentinel(result: Result<Vec<GpuInfo>, ProbeError>) -> Vec<GpuInfo> {
    match result {
        Ok(gpus) if !gpus.is_empty() => gpus,
        Ok(_) => vec![GpuInfo::not_detected()],
        Err(err) => {
            debug!(error = %err, "GPU enumeration failed");
            vec![GpuInfo::not_detected()]
        }
    }
}

fn npu_from_descriptor(result: Result<String, ProbeError>) -> NpuStatus {
    match result {
        Ok(text) if parsers::contains_npu_marker(&text) => NpuStatus::Detected,
        Ok(_) => NpuStatus::NotDetected,
        Err(err) => {
            debug!(error = %err, "NPU detection failed");
            NpuStatus::NotDetected
        }
    }
}

/// Total capacity in GiB of the filesystem mounted at `mount_point`.
fn mounted_total_gib(mount_point: &str) -> Result<f64, ProbeError> {
    let disks = Disks::new_with_refreshed_list();
    disks
        .iter()
        .find(|d| d.mount_point() == Path::new(mount_point))
        .map(|d| round1(d.total_space() as f64 / 1_073_741_824.0))
        .ok_or(ProbeError::Parse {
            what: "filesystem totals for the system mount",
        })
}

pub struct WindowsDetector;

impl WindowsDetector {
    const SYSTEM_MOUNT: &'static str = "C:\\";

    fn media_type(&self) -> Result<MediaType, ProbeError> {
        let stdout = run_command(
            "powershell",
            &[
                "-Command",
                "(Get-PhysicalDisk | Where-Object {$_.DeviceID -eq 0}).MediaType",
            ],
        )?;
        Ok(parsers::normalize_media_type(&stdout))
    }
}

impl HardwareDetector for WindowsDetector {
    fn gpus(&self) -> Vec<GpuInfo> {
        let result = run_command(
            "powershell",
            &[
                "-Command",
                "Get-WmiObject Win32_VideoController | Select-Object Name, AdapterRAM",
            ],
        )
        .map(|stdout| parsers::parse_windows_video_controllers(&stdout));
        gpus_or_sentinel(result)
    }

    fn npu(&self) -> NpuStatus {
        npu_from_descriptor(run_command(
            "powershell",
            &["-Command", "Get-WmiObject Win32_Processor"],
        ))
    }

    fn disk(&self) -> DiskInfo {
        let total_gib = match mounted_total_gib(Self::SYSTEM_MOUNT) {
            Ok(total) => total,
            Err(err) => {
                debug!(error = %err, "disk totals unavailable");
                return DiskInfo::unknown();
            }
        };

        // Media type is best effort on top of the totals
        let media = self.media_type().unwrap_or_else(|err| {
            debug!(error = %err, "media type query failed");
            MediaType::Unknown
        });

        DiskInfo {
            media,
            total_gib,
            mount_point: Self::SYSTEM_MOUNT.to_string(),
        }
    }
}

pub struct LinuxDetector;

impl HardwareDetector for LinuxDetector {
    fn gpus(&self) -> Vec<GpuInfo> {
        let result =
            run_command("lspci", &[]).map(|stdout| parsers::parse_lspci_displays(&stdout));
        gpus_or_sentinel(result)
    }

    fn npu(&self) -> NpuStatus {
        let descriptor = std::fs::read_to_string("/proc/cpuinfo").map_err(|source| {
            ProbeError::CommandUnavailable {
                command: "/proc/cpuinfo".to_string(),
                source,
            }
        });
        npu_from_descriptor(descriptor)
    }

    fn disk(&self) -> DiskInfo {
        unix_root_disk()
    }
}

pub struct MacosDetector;

impl HardwareDetector for MacosDetector {
    fn gpus(&self) -> Vec<GpuInfo> {
        let result = run_command("system_profiler", &["SPDisplaysDataType"])
            .map(|stdout| parsers::parse_macos_displays(&stdout));
        gpus_or_sentinel(result)
    }

    fn npu(&self) -> NpuStatus {
        npu_from_descriptor(run_command("sysctl", &["machdep.cpu"]))
    }

    fn disk(&self) -> DiskInfo {
        unix_root_disk()
    }
}

/// Shared Linux/macOS path: totals at `/`, media type approximated by the
/// `/dev/disk/by-id` symlink check. The symlink heuristic is known-weak and
/// kept as-is.
fn unix_root_disk() -> DiskInfo {
    let total_gib = match mounted_total_gib("/") {
        Ok(total) => total,
        Err(err) => {
            debug!(error = %err, "disk totals unavailable");
            return DiskInfo::unknown();
        }
    };

    let media = if Path::new("/dev/disk/by-id").is_symlink() {
        MediaType::Ssd
    } else {
        MediaType::Hdd
    };

    DiskInfo {
        media,
        total_gib,
        mount_point: "/".to_string(),
    }
}

/// Fallback for platforms without an inventory path: everything is a sentinel.
pub struct UnsupportedDetector;

impl HardwareDetector for UnsupportedDetector {
    fn gpus(&self) -> Vec<GpuInfo> {
        vec![GpuInfo::not_detected()]
    }

    fn npu(&self) -> NpuStatus {
        NpuStatus::NotDetected
    }

    fn disk(&self) -> DiskInfo {
        DiskInfo::unknown()
    }
}
