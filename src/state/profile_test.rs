use super::*;

fn user(name: Option<&str>, bio: Option<&str>) -> GithubUser {
    GithubUser {
        login: "octocat".to_owned(),
        name: name.map(str::to_owned),
        bio: bio.map(str::to_owned),
        blog: None,
        company: None,
        location: None,
        avatar_url: "https://avatars.githubusercontent.com/u/1".to_owned(),
        html_url: "https://github.com/octocat".to_owned(),
    }
}

fn repo(id: u64, language: Option<&str>) -> GithubRepo {
    GithubRepo {
        id,
        name: format!("r{id}"),
        html_url: String::new(),
        description: None,
        stargazers_count: 0,
        language: language.map(str::to_owned),
        homepage: None,
        fork: false,
    }
}

#[test]
fn failed_fetch_keeps_defaults() {
    let mut state = ProfileState::default();
    state.apply_user(None);
    assert_eq!(state, ProfileState::default());
    assert_eq!(state.display_name, DEFAULT_DISPLAY_NAME);
}

#[test]
fn user_fields_override_defaults() {
    let mut state = ProfileState::default();
    state.apply_user(Some(user(Some("The Octocat"), Some("Loves git"))));
    assert_eq!(state.display_name, "The Octocat");
    assert_eq!(state.bio.as_deref(), Some("Loves git"));
    assert_eq!(state.profile_url.as_deref(), Some("https://github.com/octocat"));
}

#[test]
fn blank_name_keeps_default() {
    let mut state = ProfileState::default();
    state.apply_user(Some(user(Some("  "), None)));
    assert_eq!(state.display_name, DEFAULT_DISPLAY_NAME);
    assert_eq!(state.bio, None);
}

#[test]
fn repos_mark_loaded_even_when_empty() {
    let mut state = ProfileState::default();
    state.apply_repos(Vec::new());
    assert!(state.repos_loaded);
    assert!(state.language_counts().is_empty());
}

#[test]
fn recent_repos_caps_at_limit() {
    let mut state = ProfileState::default();
    state.apply_repos(vec![repo(1, Some("Rust")), repo(2, None), repo(3, Some("Rust"))]);
    assert_eq!(state.recent_repos(2).len(), 2);
    assert_eq!(state.recent_repos(10).len(), 3);
    assert_eq!(state.language_counts()["Rust"], 2);
}
