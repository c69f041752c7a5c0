#![allow(clippy::float_cmp)]

use super::*;

fn policy(tier: PerformanceTier, reduced_motion: bool) -> MotionPolicy {
    MotionPolicy::from_profile(DeviceProfile { tier, reduced_motion })
}

#[test]
fn tier_parses_case_insensitively() {
    assert_eq!("LOW".parse::<PerformanceTier>(), Ok(PerformanceTier::Low));
    assert_eq!(" medium ".parse::<PerformanceTier>(), Ok(PerformanceTier::Medium));
    assert_eq!("high".parse::<PerformanceTier>(), Ok(PerformanceTier::High));
}

#[test]
fn tier_parse_rejects_unknown() {
    let err = "ultra".parse::<PerformanceTier>().unwrap_err();
    assert_eq!(err.to_string(), "unknown performance tier: \"ultra\"");
}

#[test]
fn tier_display_round_trips() {
    for tier in [PerformanceTier::Low, PerformanceTier::Medium, PerformanceTier::High] {
        assert_eq!(tier.to_string().parse::<PerformanceTier>(), Ok(tier));
    }
}

#[test]
fn high_tier_enables_everything() {
    let p = policy(PerformanceTier::High, false);
    assert!(p.effects_enabled);
    assert!(p.animate_text);
    assert_eq!(p.spin_factor, 1.0);
    assert_eq!(p.parallax_strength, 0.000_05);
}

#[test]
fn medium_tier_slows_spin_and_softens_parallax() {
    let p = policy(PerformanceTier::Medium, false);
    assert!(p.effects_enabled);
    assert_eq!(p.spin_factor, 1.3);
    assert_eq!(p.parallax_strength, 0.000_04);
}

#[test]
fn low_tier_disables_cursor_but_keeps_text() {
    let p = policy(PerformanceTier::Low, false);
    assert!(!p.effects_enabled);
    assert!(p.animate_text);
}

#[test]
fn reduced_motion_disables_all_motion() {
    let p = policy(PerformanceTier::High, true);
    assert!(!p.effects_enabled);
    assert!(!p.animate_text);
    assert_eq!(p.parallax_strength, 0.0);
}

#[test]
fn disabled_policy_is_inert() {
    let p = MotionPolicy::disabled();
    assert!(!p.effects_enabled);
    assert!(!p.animate_text);
}
