//! GitHub-backed profile state shared by the About, Skills, and Projects sections.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::collections::BTreeMap;

use crate::net::github::{GithubRepo, GithubUser, aggregate_languages};

pub const DEFAULT_DISPLAY_NAME: &str = "Software Engineer";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileState {
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub profile_url: Option<String>,
    pub repos: Vec<GithubRepo>,
    /// Set once the repository fetch has finished, successfully or not.
    pub repos_loaded: bool,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_owned(),
            bio: None,
            avatar_url: None,
            profile_url: None,
            repos: Vec::new(),
            repos_loaded: false,
        }
    }
}

impl ProfileState {
    /// Overlay whatever the profile fetch returned. Missing or blank fields
    /// keep their current values.
    pub fn apply_user(&mut self, user: Option<GithubUser>) {
        let Some(user) = user else {
            return;
        };
        if let Some(name) = non_blank(user.name) {
            self.display_name = name;
        }
        if let Some(bio) = non_blank(user.bio) {
            self.bio = Some(bio);
        }
        self.avatar_url = non_blank(Some(user.avatar_url)).or(self.avatar_url.take());
        self.profile_url = non_blank(Some(user.html_url)).or(self.profile_url.take());
    }

    pub fn apply_repos(&mut self, repos: Vec<GithubRepo>) {
        self.repos = repos;
        self.repos_loaded = true;
    }

    #[must_use]
    pub fn language_counts(&self) -> BTreeMap<String, usize> {
        aggregate_languages(&self.repos)
    }

    /// First `limit` repositories in API order (most recently updated).
    #[must_use]
    pub fn recent_repos(&self, limit: usize) -> &[GithubRepo] {
        &self.repos[..self.repos.len().min(limit)]
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
