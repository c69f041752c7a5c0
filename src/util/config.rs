//! Site configuration baked in at compile time.
//!
//! Values come from `PORTFOLIO_*` environment variables visible to the build
//! and fall back to built-in defaults. Blank values count as unset.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use effects::policy::PerformanceTier;

pub const DEFAULT_GITHUB_USERNAME: &str = "DiaeEddineJamal";
pub const DEFAULT_SCENE_URL: &str = "https://prod.spline.design/kZDDjO5HuC9GJUM2/scene.splinecode";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Owner of the GitHub profile and repositories shown on the page.
    pub github_username: String,
    /// Form relay URL. `None` disables sending.
    pub contact_endpoint: Option<String>,
    /// Scene file for the 3D showcase.
    pub scene_url: String,
    /// Forces a performance tier instead of detecting one.
    pub tier_override: Option<PerformanceTier>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None)
    }
}

impl SiteConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("PORTFOLIO_GITHUB_USERNAME"),
            option_env!("PORTFOLIO_CONTACT_ENDPOINT"),
            option_env!("PORTFOLIO_SCENE_URL"),
            option_env!("PORTFOLIO_PERFORMANCE_TIER"),
        )
    }

    fn from_values(username: Option<&str>, endpoint: Option<&str>, scene: Option<&str>, tier: Option<&str>) -> Self {
        Self {
            github_username: non_blank(username).unwrap_or(DEFAULT_GITHUB_USERNAME).to_owned(),
            contact_endpoint: non_blank(endpoint).map(str::to_owned),
            scene_url: non_blank(scene).unwrap_or(DEFAULT_SCENE_URL).to_owned(),
            tier_override: non_blank(tier).and_then(parse_tier),
        }
    }

    /// Public profile page of the configured owner.
    #[must_use]
    pub fn github_profile_url(&self) -> String {
        format!("https://github.com/{}", self.github_username)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_tier(raw: &str) -> Option<PerformanceTier> {
    match raw.parse() {
        Ok(tier) => Some(tier),
        Err(_err) => {
            #[cfg(feature = "csr")]
            log::warn!("ignoring PORTFOLIO_PERFORMANCE_TIER: {_err}");
            None
        }
    }
}
