use super::*;

#[test]
fn github_category_falls_back_without_data() {
    let categories = skill_categories(&BTreeMap::new());
    assert_eq!(categories.len(), 4);
    let github = &categories[3];
    assert_eq!(github.title, "From My GitHub");
    let names: Vec<&str> = github.skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["TypeScript", "JavaScript"]);
}

#[test]
fn github_category_ranks_and_caps_languages() {
    let counts: BTreeMap<String, usize> = [
        ("Rust", 5),
        ("Go", 1),
        ("Python", 3),
        ("C", 1),
        ("Dart", 2),
        ("Java", 2),
        ("Kotlin", 1),
    ]
    .into_iter()
    .map(|(name, count)| (name.to_owned(), count))
    .collect();

    let github = &skill_categories(&counts)[3];
    let names: Vec<&str> = github.skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Rust", "Python", "Dart", "Java", "C", "Go"]);
    assert!(github.skills.iter().all(|s| s.level == 80));
}

#[test]
fn nav_targets_are_section_ids() {
    assert!(NAV_ITEMS.iter().all(|(href, _)| href.starts_with('#')));
}

#[test]
fn featured_projects_have_code_links() {
    assert!(FEATURED_PROJECTS.iter().all(|p| p.code_url.starts_with("https://")));
}

#[test]
fn social_links_use_configured_profile() {
    let links = social_links("https://github.com/someone".to_owned());
    assert_eq!(links[0].url, "https://github.com/someone");
    assert_eq!(links[2].url, "mailto:diae_2002@hotmail.com");
}
