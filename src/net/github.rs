//! Read-only GitHub REST helpers.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `None`/empty, since these calls only make
//! sense in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures never reach the user. A failed profile fetch yields `None` and the
//! page keeps its default copy; a failed repository fetch yields an empty list.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "github_test.rs"]
mod github_test;

use std::collections::BTreeMap;

use serde::Deserialize;

#[cfg(any(test, feature = "csr"))]
const API_BASE: &str = "https://api.github.com";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GithubUser {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub blog: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GithubRepo {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    pub language: Option<String>,
    pub homepage: Option<String>,
    #[serde(default)]
    pub fork: bool,
}

#[cfg(any(test, feature = "csr"))]
fn user_endpoint(username: &str) -> String {
    format!("{API_BASE}/users/{username}")
}

#[cfg(any(test, feature = "csr"))]
fn repos_endpoint(username: &str) -> String {
    format!("{API_BASE}/users/{username}/repos?per_page=100&sort=updated")
}

/// Drop forked repositories, keeping the API's order.
#[must_use]
pub fn without_forks(repos: Vec<GithubRepo>) -> Vec<GithubRepo> {
    repos.into_iter().filter(|repo| !repo.fork).collect()
}

/// Count repositories per primary language, skipping repositories with none.
#[must_use]
pub fn aggregate_languages(repos: &[GithubRepo]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for language in repos.iter().filter_map(|repo| repo.language.as_deref()) {
        *counts.entry(language.to_owned()).or_insert(0) += 1;
    }
    counts
}

/// The `limit` most used languages, most used first, ties by name.
#[must_use]
pub fn top_languages(counts: &BTreeMap<String, usize>, limit: usize) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = counts.iter().map(|(name, count)| (name.clone(), *count)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

/// Fetch the public profile of `username`.
pub async fn fetch_user(username: &str) -> Option<GithubUser> {
    #[cfg(feature = "csr")]
    {
        let resp = match gloo_net::http::Request::get(&user_endpoint(username)).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("github user fetch failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            log::warn!("github user fetch returned {}", resp.status());
            return None;
        }
        resp.json::<GithubUser>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = username;
        None
    }
}

/// Fetch up to 100 non-fork repositories of `username`, most recently updated first.
pub async fn fetch_repos(username: &str) -> Vec<GithubRepo> {
    #[cfg(feature = "csr")]
    {
        let resp = match gloo_net::http::Request::get(&repos_endpoint(username)).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("github repos fetch failed: {e}");
                return Vec::new();
            }
        };
        if !resp.ok() {
            log::warn!("github repos fetch returned {}", resp.status());
            return Vec::new();
        }
        resp.json::<Vec<GithubRepo>>().await.map(without_forks).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = username;
        Vec::new()
    }
}
