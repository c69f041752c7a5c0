//! Interactive 3D showcase: a Spline scene gated by device capability and
//! by whether the section is near the viewport.
//!
//! The scene itself is rendered by the `<spline-viewer>` custom element that
//! `index.html` loads. Leaving the viewport unmounts it so the WebGL context
//! is released while off screen.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use leptos::prelude::*;

use effects::policy::{DeviceProfile, PerformanceTier};

use crate::components::matrix_text::MatrixText;
use crate::util::browser::scroll_to_section;
use crate::util::config::SiteConfig;

#[cfg(feature = "csr")]
use crate::util::browser::VisibilityObserver;

pub const SCENE_VISIBILITY_THRESHOLD: f64 = 0.2;
pub const SCENE_ROOT_MARGIN: &str = "100px";

#[must_use]
pub fn scene_enabled(profile: DeviceProfile) -> bool {
    !profile.reduced_motion && profile.tier != PerformanceTier::Low
}

/// Placeholder text shown instead of the scene.
#[must_use]
pub fn scene_fallback_message(profile: DeviceProfile) -> &'static str {
    if profile.reduced_motion {
        "Animations disabled (reduced motion)"
    } else if profile.tier == PerformanceTier::Low {
        "3D disabled on low-performance device"
    } else {
        "Loading..."
    }
}

#[component]
pub fn Showcase() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let device = expect_context::<DeviceProfile>();
    let enabled = scene_enabled(device);
    let in_view = RwSignal::new(true);
    let scene_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let observer = StoredValue::new_local(None::<VisibilityObserver>);
        Effect::new(move || {
            let Some(el) = scene_ref.get() else {
                return;
            };
            if !enabled || observer.with_value(Option::is_some) {
                return;
            }
            observer.set_value(VisibilityObserver::observe(
                &el,
                SCENE_VISIBILITY_THRESHOLD,
                SCENE_ROOT_MARGIN,
                move |visible| {
                    let _ = in_view.try_set(visible);
                },
            ));
        });
        on_cleanup(move || {
            let _ = observer.try_update_value(Option::take);
        });
    }

    let scene_url = config.scene_url;
    view! {
        <section class="showcase">
            <div class="container">
                <div class="showcase-card">
                    <div class="showcase-copy">
                        <MatrixText text="Portfolio Showcase" scroll_triggered=true class="showcase-title" />
                        <p>
                            "Explore my portfolio of innovative software projects. From AI-powered applications \
                             to full-stack web solutions, discover the practical work that showcases my technical expertise."
                        </p>
                        <button class="btn btn-accent cursor-target" on:click=move |_| scroll_to_section("#projects")>
                            "View Projects"
                        </button>
                    </div>
                    <div class="showcase-scene" node_ref=scene_ref>
                        <Show
                            when=move || enabled && in_view.get()
                            fallback=move || {
                                view! { <div class="scene-fallback">{scene_fallback_message(device)}</div> }
                            }
                        >
                            <spline-viewer url=scene_url.clone()></spline-viewer>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}
