//! About section: GitHub name and bio over built-in copy, plus highlight cards.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::matrix_text::MatrixText;
use crate::state::content::HIGHLIGHTS;
use crate::state::profile::ProfileState;

const DEFAULT_BIO: [&str; 2] = [
    "Recently graduated software engineer with a strong foundation in AI and full-stack development. I specialize \
     in creating innovative solutions that bridge the gap between cutting-edge technology and practical applications.",
    "My expertise spans mobile and web application development, microservices architecture with Spring Boot, and AI \
     integration. I'm passionate about building scalable systems and exploring the potential of artificial \
     intelligence in modern software solutions.",
];

const ROLE_TAGS: [&str; 3] = ["AI Developer", "Full-Stack Engineer", "Microservices Expert"];

#[component]
pub fn About() -> impl IntoView {
    let profile = expect_context::<RwSignal<ProfileState>>();
    let display_name = move || profile.with(|p| p.display_name.clone());
    let bio = move || match profile.with(|p| p.bio.clone()) {
        Some(bio) => view! { <p>{bio}</p> }.into_any(),
        None => DEFAULT_BIO.iter().map(|para| view! { <p>{*para}</p> }).collect_view().into_any(),
    };

    view! {
        <section id="about" class="about">
            <div class="container">
                <div class="section-heading">
                    <MatrixText text="About Me" scroll_triggered=true class="section-title" />
                </div>
                <div class="about-grid">
                    <div class="about-copy">
                        <h3>{display_name} " & AI Enthusiast"</h3>
                        {bio}
                        <div class="role-tags">
                            {ROLE_TAGS.iter().map(|tag| view! { <span class="tag cursor-target">{*tag}</span> }).collect_view()}
                        </div>
                    </div>
                    <div class="highlight-grid">
                        {HIGHLIGHTS
                            .iter()
                            .map(|h| {
                                view! {
                                    <div class="highlight-card cursor-target">
                                        <h4>{h.title}</h4>
                                        <p>{h.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
