//! Page footer with quick links, contact details, and back-to-top.

use leptos::prelude::*;

use crate::components::header::social_row;
use crate::state::content::{AVAILABILITY, NAV_ITEMS, OWNER_EMAIL, OWNER_NAME};
use crate::util::browser::{current_year, scroll_to_section, scroll_to_top};
use crate::util::config::SiteConfig;

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let year = current_year();

    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <h3>{OWNER_NAME}</h3>
                    <p>"Building thoughtful software across web, mobile, and AI."</p>
                    <div class="footer-socials">
                        {social_row(config.github_profile_url())}
                    </div>
                </div>
                <div class="footer-links">
                    <h4>"Quick Links"</h4>
                    {NAV_ITEMS
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <button class="footer-link cursor-target" on:click=move |_| scroll_to_section(href)>
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="footer-contact">
                    <h4>"Get In Touch"</h4>
                    <p>{OWNER_EMAIL}</p>
                    <p>{AVAILABILITY}</p>
                    <button class="btn btn-outline cursor-target" on:click=move |_| scroll_to_top()>
                        "↑ Back to Top"
                    </button>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{format!("© {year} {OWNER_NAME}")}</span>
                <span>"Crafted with modern technologies and attention to detail"</span>
            </div>
        </footer>
    }
}
