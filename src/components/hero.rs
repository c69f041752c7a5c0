//! Landing section: the three-line matrix greeting and the profile card.

use leptos::prelude::*;

use crate::components::matrix_text::MatrixText;
use crate::state::content::{AVAILABILITY, CV_URL, LINKEDIN_URL, OWNER_INTRO, OWNER_NAME, OWNER_TITLE};
use crate::state::profile::ProfileState;
use crate::util::browser::scroll_to_section;
use crate::util::config::SiteConfig;

const FALLBACK_AVATAR: &str = "/profile-image.jpg";

#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let profile = expect_context::<RwSignal<ProfileState>>();
    let avatar = move || profile.with(|p| p.avatar_url.clone()).unwrap_or_else(|| FALLBACK_AVATAR.to_owned());
    let handle = format!("@{}", config.github_username);

    view! {
        <section id="home" class="hero">
            <div class="hero-grid container">
                <div class="hero-copy">
                    <h1 class="hero-heading">
                        <MatrixText text="G'day, I'm" initial_delay_ms=200.0 class="hero-line" />
                        <MatrixText text=OWNER_NAME initial_delay_ms=1500.0 class="hero-line hero-name" />
                        <MatrixText text="A Software Engineer" initial_delay_ms=3000.0 class="hero-line hero-role" />
                    </h1>
                    <p class="hero-intro">{OWNER_INTRO}</p>
                    <div class="hero-actions">
                        <button class="btn btn-primary cursor-target" on:click=move |_| scroll_to_section("#contact")>
                            "Contact me!"
                        </button>
                        <a class="btn btn-outline cursor-target" href=CV_URL download="">
                            "Curriculum Vitae | CV"
                        </a>
                    </div>
                    <div class="hero-socials">
                        <a class="cursor-target" href=config.github_profile_url() target="_blank" rel="noopener noreferrer">
                            "GitHub"
                        </a>
                        <a class="cursor-target" href=LINKEDIN_URL target="_blank" rel="noopener noreferrer">
                            "LinkedIn"
                        </a>
                    </div>
                </div>
                <div class="profile-card cursor-target">
                    <img class="profile-avatar" src=avatar alt=OWNER_NAME />
                    <div class="profile-info">
                        <h2>{OWNER_NAME}</h2>
                        <p class="profile-title">{OWNER_TITLE}</p>
                        <p class="profile-handle">{handle}</p>
                        <p class="profile-status">{AVAILABILITY}</p>
                    </div>
                    <button class="btn btn-primary cursor-target" on:click=move |_| scroll_to_section("#contact")>
                        "Contact Me"
                    </button>
                </div>
            </div>
        </section>
    }
}
