//! Featured projects plus the owner's most recently updated repositories.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::matrix_text::MatrixText;
use crate::net::github::GithubRepo;
use crate::state::content::{FEATURED_PROJECTS, FeaturedProject};
use crate::state::profile::ProfileState;
use crate::util::config::SiteConfig;

pub const RECENT_REPO_LIMIT: usize = 6;

/// Homepage link for a repository card, ignoring blank values.
#[must_use]
pub fn repo_homepage(repo: &GithubRepo) -> Option<&str> {
    repo.homepage.as_deref().map(str::trim).filter(|url| !url.is_empty())
}

fn project_card(project: &'static FeaturedProject) -> impl IntoView {
    view! {
        <article class=format!("project-card cursor-target {}", project.accent.class())>
            <img class="project-image" src=project.image alt=project.title loading="lazy" />
            <div class="project-body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="tech-tags">
                    {project.tech.iter().map(|tech| view! { <span class="tag">{*tech}</span> }).collect_view()}
                </div>
                <div class="project-links">
                    <a class="btn btn-outline cursor-target" href=project.code_url target="_blank" rel="noopener noreferrer">
                        "View Code"
                    </a>
                    {project.demo_url.map(|demo| {
                        view! {
                            <a class="btn btn-primary cursor-target" href=demo target="_blank" rel="noopener noreferrer">
                                "Live Demo"
                            </a>
                        }
                    })}
                </div>
            </div>
        </article>
    }
}

fn repo_card(repo: GithubRepo) -> impl IntoView {
    let homepage = repo_homepage(&repo).map(str::to_owned);
    view! {
        <article class="repo-card cursor-target">
            <h4>
                <a href=repo.html_url target="_blank" rel="noopener noreferrer">{repo.name}</a>
            </h4>
            <p>{repo.description.unwrap_or_default()}</p>
            <div class="repo-meta">
                {repo.language.map(|lang| view! { <span class="tag">{lang}</span> })}
                <span class="repo-stars">{format!("★ {}", repo.stargazers_count)}</span>
                {homepage.map(|url| view! { <a href=url target="_blank" rel="noopener noreferrer">"Website"</a> })}
            </div>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let profile = expect_context::<RwSignal<ProfileState>>();

    let recent = move || {
        let (loaded, repos) = profile.with(|p| (p.repos_loaded, p.recent_repos(RECENT_REPO_LIMIT).to_vec()));
        if !loaded {
            return view! { <p class="repo-status">"Loading repositories..."</p> }.into_any();
        }
        if repos.is_empty() {
            return ().into_any();
        }
        view! {
            <div class="recent-repos">
                <h3>"Recently Updated on GitHub"</h3>
                <div class="repo-grid">{repos.into_iter().map(repo_card).collect_view()}</div>
            </div>
        }
        .into_any()
    };

    view! {
        <section id="projects" class="projects">
            <div class="container">
                <div class="section-heading">
                    <MatrixText text="Featured Projects" scroll_triggered=true class="section-title" />
                </div>
                <div class="project-grid">{FEATURED_PROJECTS.iter().map(project_card).collect_view()}</div>
                {recent}
                <div class="projects-footer">
                    <a class="btn btn-outline cursor-target" href=config.github_profile_url() target="_blank" rel="noopener noreferrer">
                        "View All Projects on GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}
