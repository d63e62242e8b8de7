use modelprobe::advisor::{Suggestion, FALLBACK_MODEL, RECOMMENDED_MODELS};
use modelprobe::hardware::{GpuInfo, GpuKind};

fn gpu(name: &str, kind: GpuKind, vram_gib: f64) -> GpuInfo {
    GpuInfo {
        name: name.to_string(),
        kind,
        vram_gib,
    }
}

#[test]
fn test_catalog_for_sufficient_ram() {
    for ram in [8.0, 16.0, 64.0, 128.0] {
        let suggestion = Suggestion::for_system(ram, &[]);
        assert!(!suggestion.low_ram, "ram={}", ram);
        assert_eq!(suggestion.models, RECOMMENDED_MODELS);
    }
}

#[test]
fn test_fallback_for_low_ram() {
    for ram in [0.0, 4.0, 7.99] {
        let suggestion = Suggestion::for_system(ram, &[]);
        assert!(suggestion.low_ram, "ram={}", ram);
        assert_eq!(suggestion.models, vec![FALLBACK_MODEL]);
    }
}

#[test]
fn test_dedicated_gpu_triggers_acceleration_note() {
    let gpus = vec![
        gpu("Intel UHD", GpuKind::Integrated, 0.0),
        gpu("NVIDIA RTX 3080", GpuKind::Dedicated, 10.0),
    ];
    let suggestion = Suggestion::for_system(16.0, &gpus);
    assert!(suggestion.gpu_accelerated);
}

#[test]
fn test_no_dedicated_gpu_means_lightweight_note() {
    let integrated_only = vec![gpu("Intel UHD", GpuKind::Integrated, 0.0)];
    assert!(!Suggestion::for_system(16.0, &integrated_only).gpu_accelerated);

    // The failed-detection sentinel counts as not dedicated
    let sentinel = vec![GpuInfo::not_detected()];
    assert!(!Suggestion::for_system(16.0, &sentinel).gpu_accelerated);
}

#[test]
fn test_scenario_gaming_rig() {
    // RAM=16.0, one dedicated NVIDIA adapter
    let gpus = vec![gpu("NVIDIA RTX 3080", GpuKind::Dedicated, 10.0)];
    let suggestion = Suggestion::for_system(16.0, &gpus);

    assert_eq!(suggestion.models, RECOMMENDED_MODELS);
    assert!(suggestion.gpu_accelerated);
    assert!(!suggestion.low_ram);
}

#[test]
fn test_scenario_low_end_laptop() {
    // RAM=4.0, integrated graphics only
    let gpus = vec![gpu("Intel UHD", GpuKind::Integrated, 0.0)];
    let suggestion = Suggestion::for_system(4.0, &gpus);

    assert!(suggestion.low_ram);
    assert_eq!(suggestion.models, vec![FALLBACK_MODEL]);
    assert!(!suggestion.gpu_accelerated);
}
