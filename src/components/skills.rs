//! Skills carousel: one slide per category, autoplaying every four seconds
//! until the pointer hovers it or the visitor navigates by hand.

use leptos::prelude::*;

use crate::components::matrix_text::MatrixText;
use crate::state::carousel::CarouselState;
use crate::state::content::{SkillCategory, skill_categories};
use crate::state::profile::ProfileState;

#[cfg(feature = "csr")]
use crate::state::carousel::AUTOPLAY_INTERVAL_MS;
#[cfg(feature = "csr")]
use gloo_timers::callback::Interval;

fn category_slide(category: SkillCategory) -> impl IntoView {
    let accent = category.accent.class();
    view! {
        <div class="skill-slide">
            <div class=format!("skill-category-title cursor-target {accent}")>{category.title}</div>
            <div class="skill-list">
                {category
                    .skills
                    .into_iter()
                    .map(|skill| {
                        view! {
                            <div class="skill-row">
                                <div class="skill-label">
                                    <span>{skill.name}</span>
                                    <span>{format!("{}%", skill.level)}</span>
                                </div>
                                <div class="skill-bar">
                                    <div class=format!("skill-fill {accent}") style:width=format!("{}%", skill.level)></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let profile = expect_context::<RwSignal<ProfileState>>();
    let categories = Memo::new(move |_| skill_categories(&profile.with(ProfileState::language_counts)));
    let carousel = RwSignal::new(CarouselState::new(categories.with_untracked(Vec::len)));

    #[cfg(feature = "csr")]
    {
        let autoplay = StoredValue::new_local(Some(Interval::new(AUTOPLAY_INTERVAL_MS, move || {
            let _ = carousel.try_update(CarouselState::advance);
        })));
        on_cleanup(move || {
            let _ = autoplay.try_update_value(Option::take);
        });
    }

    let dots = move || {
        categories.with(|all| {
            all.iter()
                .enumerate()
                .map(|(index, category)| {
                    let label = format!("Go to {} skills", category.title);
                    let class = move || {
                        if carousel.with(|c| c.index == index) { "carousel-dot active cursor-target" } else { "carousel-dot cursor-target" }
                    };
                    view! { <button class=class aria-label=label on:click=move |_| carousel.update(|c| c.go_to(index))></button> }
                })
                .collect_view()
        })
    };

    view! {
        <section id="skills" class="skills">
            <div class="container">
                <div class="section-heading">
                    <MatrixText text="Skills & Expertise" scroll_triggered=true class="section-title" />
                </div>
                <div
                    class="carousel"
                    on:mouseenter=move |_| carousel.update(|c| c.set_hovered(true))
                    on:mouseleave=move |_| carousel.update(|c| c.set_hovered(false))
                >
                    <button class="carousel-arrow prev cursor-target" aria-label="Previous" on:click=move |_| carousel.update(CarouselState::prev)>
                        "‹"
                    </button>
                    <button class="carousel-arrow next cursor-target" aria-label="Next" on:click=move |_| carousel.update(CarouselState::next)>
                        "›"
                    </button>
                    <div class="carousel-viewport">
                        <div class="carousel-track" style:transform=move || carousel.with(CarouselState::track_transform)>
                            {move || categories.get().into_iter().map(category_slide).collect_view()}
                        </div>
                    </div>
                    <div class="carousel-dots">{dots}</div>
                </div>
            </div>
        </section>
    }
}
