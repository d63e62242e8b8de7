use modelprobe::hardware::detector::{HardwareDetector, UnsupportedDetector};
use modelprobe::hardware::{DiskInfo, GpuKind, HardwareFacts, MediaType, NpuStatus};

#[test]
fn test_unsupported_platform_yields_sentinels() {
    let detector = UnsupportedDetector;

    let gpus = detector.gpus();
    assert_eq!(gpus.len(), 1, "exactly one sentinel entry, never zero");
    assert_eq!(gpus[0].name, "Not detected");
    assert_eq!(gpus[0].kind, GpuKind::Unknown);
    assert_eq!(gpus[0].vram_gib, 0.0);

    assert_eq!(detector.npu(), NpuStatus::NotDetected);

    let disk = detector.disk();
    assert_eq!(disk.media, MediaType::Unknown);
    assert_eq!(disk.total_gib, 0.0);
    assert_eq!(disk.mount_point, "/");
}

#[test]
fn test_facts_with_sentinel_detector() {
    // A completely failed platform path still produces a full snapshot
    let facts = HardwareFacts::with_detector(&UnsupportedDetector);

    assert!(!facts.os_label.is_empty());
    assert!(facts.cpu_cores >= 1);
    assert_eq!(facts.gpus.len(), 1);
    assert!(!facts.has_dedicated_gpu());
    assert_eq!(facts.disk, DiskInfo::unknown());
}

#[test]
fn test_facts_serialize_round_trip() {
    let facts = HardwareFacts::with_detector(&UnsupportedDetector);
    let json = serde_json::to_string(&facts).unwrap();
    let back: HardwareFacts = serde_json::from_str(&json).unwrap();
    assert_eq!(back.gpus, facts.gpus);
    assert_eq!(back.npu, facts.npu);
    assert_eq!(back.ram_gib, facts.ram_gib);
}
