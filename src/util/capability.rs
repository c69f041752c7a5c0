//! Device capability detection.
//!
//! Runs once at start-up. The browser probing lives behind the `csr` feature;
//! the classification itself is pure so it can be tested natively. Anything
//! the browser cannot answer degrades toward the least-animated behaviour.

#[cfg(test)]
#[path = "capability_test.rs"]
mod capability_test;

use effects::policy::{DeviceProfile, PerformanceTier};

const MOBILE_MARKERS: [&str; 7] = ["android", "iphone", "ipad", "ipod", "blackberry", "iemobile", "opera mini"];

/// Raw navigator readings used to pick a tier.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CapabilityHints {
    pub user_agent: String,
    /// `navigator.deviceMemory` in GiB, when exposed.
    pub device_memory_gb: Option<f64>,
    /// `navigator.hardwareConcurrency`, when exposed.
    pub hardware_concurrency: Option<f64>,
}

#[must_use]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let lower = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Mobile devices are low; otherwise memory decides, then core count.
#[must_use]
pub fn classify_tier(hints: &CapabilityHints) -> PerformanceTier {
    if is_mobile_user_agent(&hints.user_agent) {
        return PerformanceTier::Low;
    }
    if let Some(memory) = hints.device_memory_gb.filter(|m| *m > 0.0) {
        if memory < 4.0 {
            return PerformanceTier::Low;
        }
        if memory < 8.0 {
            return PerformanceTier::Medium;
        }
    }
    if let Some(cores) = hints.hardware_concurrency.filter(|c| *c > 0.0) {
        if cores < 4.0 {
            return PerformanceTier::Low;
        }
        if cores < 8.0 {
            return PerformanceTier::Medium;
        }
    }
    PerformanceTier::High
}

/// Probe the browser and build the device profile.
///
/// `tier_override` replaces the detected tier but never the reduced-motion
/// preference.
pub fn detect(tier_override: Option<PerformanceTier>) -> DeviceProfile {
    #[cfg(feature = "csr")]
    {
        let tier = tier_override.unwrap_or_else(|| classify_tier(&read_hints()));
        let profile = DeviceProfile { tier, reduced_motion: prefers_reduced_motion() };
        log::info!("device profile: tier={} reduced_motion={}", profile.tier, profile.reduced_motion);
        profile
    }
    #[cfg(not(feature = "csr"))]
    {
        DeviceProfile { tier: tier_override.unwrap_or_default(), reduced_motion: false }
    }
}

#[cfg(feature = "csr")]
fn read_hints() -> CapabilityHints {
    let Some(navigator) = web_sys::window().map(|w| w.navigator()) else {
        return CapabilityHints::default();
    };
    let device_memory_gb = js_sys::Reflect::get(&navigator, &wasm_bindgen::JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64());
    CapabilityHints {
        user_agent: navigator.user_agent().unwrap_or_default(),
        device_memory_gb,
        hardware_concurrency: Some(navigator.hardware_concurrency()),
    }
}

/// A missing or failing media query counts as a reduced-motion request.
#[cfg(feature = "csr")]
fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map_or(true, |mq| mq.matches())
}
