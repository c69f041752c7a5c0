//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use effects::policy::MotionPolicy;

use crate::components::{
    about::About, contact::Contact, footer::Footer, header::Header, hero::Hero, projects::Projects,
    showcase::Showcase, skills::Skills, target_cursor::TargetCursor,
};
use crate::state::content::{OWNER_NAME, OWNER_TITLE};
use crate::state::profile::ProfileState;
use crate::util::capability;
use crate::util::config::SiteConfig;

#[cfg(feature = "csr")]
use crate::net::github::{fetch_repos, fetch_user};

/// Load the owner's GitHub profile and repositories into `profile`.
///
/// Both requests run once per page load. Failures leave the defaults in place.
fn load_profile(username: String, profile: RwSignal<ProfileState>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let user = fetch_user(&username).await;
        let _ = profile.try_update(|p| p.apply_user(user));
        let repos = fetch_repos(&username).await;
        log::info!("loaded {} repositories for {username}", repos.len());
        let _ = profile.try_update(|p| p.apply_repos(repos));
    });
    #[cfg(not(feature = "csr"))]
    let _ = (username, profile);
}

/// Root application component.
///
/// Detects the device once, derives the motion policy from it, and provides
/// config, device profile, policy, and GitHub profile state to every section.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_env();
    let device = capability::detect(config.tier_override);
    let policy = MotionPolicy::from_profile(device);
    let profile = RwSignal::new(ProfileState::default());

    load_profile(config.github_username.clone(), profile);

    provide_context(config);
    provide_context(device);
    provide_context(policy);
    provide_context(profile);

    view! {
        <Title text=format!("{OWNER_NAME} | {OWNER_TITLE}") />
        <Meta name="description" content="Portfolio of a software engineer working across web, mobile, and AI." />

        <TargetCursor spin_duration_s=2.0 hide_system_cursor=true />
        <Header />
        <main>
            <Hero />
            <Showcase />
            <About />
            <Skills />
            <Projects />
            <Contact />
        </main>
        <Footer />
    }
}
