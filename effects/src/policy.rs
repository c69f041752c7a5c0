//! Device capability inputs and the motion policy derived from them.
//!
//! The host classifies the device once at start-up. Everything downstream
//! reads the resulting [`MotionPolicy`] and never re-queries the browser.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use std::fmt;
use std::str::FromStr;

/// Coarse performance class of the current device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerformanceTier {
    Low,
    #[default]
    Medium,
    High,
}

impl PerformanceTier {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown performance tier: {0:?}")]
pub struct ParseTierError(pub String);

impl FromStr for PerformanceTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseTierError(s.to_owned())),
        }
    }
}

/// Raw capability inputs as detected by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceProfile {
    pub tier: PerformanceTier,
    pub reduced_motion: bool,
}

/// Effect behaviour chosen once from a [`DeviceProfile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionPolicy {
    /// Whether the custom cursor runs at all.
    pub effects_enabled: bool,
    /// Whether text reveals animate or render their final text directly.
    pub animate_text: bool,
    /// Multiplier applied to the configured spin period.
    pub spin_factor: f64,
    /// Pointer-to-bracket drift factor while tracking a target.
    pub parallax_strength: f64,
}

impl MotionPolicy {
    #[must_use]
    pub fn from_profile(profile: DeviceProfile) -> Self {
        let DeviceProfile { tier, reduced_motion } = profile;
        let spin_factor = match tier {
            PerformanceTier::Low => 2.0,
            PerformanceTier::Medium => 1.3,
            PerformanceTier::High => 1.0,
        };
        let parallax_strength = if reduced_motion {
            0.0
        } else {
            match tier {
                PerformanceTier::Low => 0.000_02,
                PerformanceTier::Medium => 0.000_04,
                PerformanceTier::High => 0.000_05,
            }
        };
        Self {
            effects_enabled: !reduced_motion && tier != PerformanceTier::Low,
            animate_text: !reduced_motion,
            spin_factor,
            parallax_strength,
        }
    }

    /// Everything off; the least-animated behaviour.
    #[must_use]
    pub fn disabled() -> Self {
        Self::from_profile(DeviceProfile { tier: PerformanceTier::Low, reduced_motion: true })
    }
}

impl Default for MotionPolicy {
    fn default() -> Self {
        Self::from_profile(DeviceProfile::default())
    }
}
