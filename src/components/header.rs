//! Fixed top navigation with a scroll-aware style and a mobile menu.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::state::content::{NAV_ITEMS, social_links};
use crate::util::browser::scroll_to_section;
use crate::util::config::SiteConfig;

#[cfg(feature = "csr")]
use crate::util::browser::{Listener, scroll_y};

/// Scroll offset past which the nav switches to its solid style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

#[must_use]
pub fn nav_class(scrolled: bool) -> &'static str {
    if scrolled { "site-nav scrolled" } else { "site-nav" }
}

/// GitHub, LinkedIn, and email links, shared with the contact section and footer.
pub fn social_row(github_url: String) -> impl IntoView {
    social_links(github_url)
        .into_iter()
        .map(|link| {
            view! {
                <a class="social-link cursor-target" href=link.url target="_blank" rel="noopener noreferrer">
                    {link.label}
                </a>
            }
        })
        .collect_view()
}

#[component]
pub fn Header() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        let listener = StoredValue::new_local(None::<Listener>);
        if let Some(window) = web_sys::window() {
            scrolled.set(is_scrolled(scroll_y()));
            listener.set_value(Listener::new(window.as_ref(), "scroll", move |_| {
                let _ = scrolled.try_set(is_scrolled(scroll_y()));
            }));
        }
        on_cleanup(move || {
            let _ = listener.try_update_value(Option::take);
        });
    }

    let go = move |href: &'static str| {
        scroll_to_section(href);
        menu_open.set(false);
    };
    let github_url = config.github_profile_url();
    let desktop_socials = social_row(github_url.clone());
    let nav_buttons = move |extra: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|&(href, label)| {
                view! {
                    <button class=format!("nav-button cursor-target {extra}") on:click=move |_| go(href)>
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header">
            <nav class=move || nav_class(scrolled.get())>
                <div class="nav-row">
                    <button class="nav-avatar cursor-target" on:click=move |_| go("#home")>
                        <img src="/profile-image2.jpg" alt="Profile" />
                    </button>
                    <div class="nav-links desktop-only">{nav_buttons("")}</div>
                    <div class="nav-socials desktop-only">{desktop_socials}</div>
                    <button
                        class="nav-toggle cursor-target mobile-only"
                        aria-label="Toggle menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="mobile-menu mobile-only">
                        <div class="mobile-links">{nav_buttons("mobile")}</div>
                        <div class="mobile-socials">{social_row(github_url.clone())}</div>
                    </div>
                </Show>
            </nav>
        </header>
    }
}
