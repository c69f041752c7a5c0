use super::*;

fn desktop(memory: Option<f64>, cores: Option<f64>) -> CapabilityHints {
    CapabilityHints {
        user_agent: "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/128.0".to_owned(),
        device_memory_gb: memory,
        hardware_concurrency: cores,
    }
}

#[test]
fn mobile_user_agents_are_detected_case_insensitively() {
    assert!(is_mobile_user_agent("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"));
    assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; ANDROID 14)"));
    assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
    assert!(!is_mobile_user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0)"));
}

#[test]
fn mobile_is_low_regardless_of_hardware() {
    let hints = CapabilityHints {
        user_agent: "Mozilla/5.0 (iPad; CPU OS 17_0)".to_owned(),
        device_memory_gb: Some(16.0),
        hardware_concurrency: Some(12.0),
    };
    assert_eq!(classify_tier(&hints), PerformanceTier::Low);
}

#[test]
fn memory_decides_before_cores() {
    assert_eq!(classify_tier(&desktop(Some(2.0), Some(16.0))), PerformanceTier::Low);
    assert_eq!(classify_tier(&desktop(Some(4.0), Some(16.0))), PerformanceTier::Medium);
    assert_eq!(classify_tier(&desktop(Some(8.0), Some(2.0))), PerformanceTier::Low);
}

#[test]
fn cores_decide_when_memory_is_unknown() {
    assert_eq!(classify_tier(&desktop(None, Some(2.0))), PerformanceTier::Low);
    assert_eq!(classify_tier(&desktop(None, Some(6.0))), PerformanceTier::Medium);
    assert_eq!(classify_tier(&desktop(None, Some(8.0))), PerformanceTier::High);
}

#[test]
fn zero_readings_count_as_unknown() {
    assert_eq!(classify_tier(&desktop(Some(0.0), Some(0.0))), PerformanceTier::High);
}

#[test]
fn nothing_known_is_high() {
    assert_eq!(classify_tier(&desktop(None, None)), PerformanceTier::High);
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_detect_honours_override() {
    let profile = detect(Some(PerformanceTier::Low));
    assert_eq!(profile.tier, PerformanceTier::Low);
    assert!(!profile.reduced_motion);
}
