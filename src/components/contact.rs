//! Contact section: info cards, social links, and the relay-backed form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::components::header::social_row;
use crate::components::matrix_text::MatrixText;
use crate::state::contact::{ContactState, SubmitStatus};
use crate::state::content::CONTACT_INFO;
use crate::util::config::SiteConfig;

#[cfg(feature = "csr")]
use crate::net::contact::submit;

#[must_use]
pub fn status_class(status: &SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Sent => "form-status success",
        SubmitStatus::Failed(_) => "form-status error",
        SubmitStatus::Idle | SubmitStatus::Sending => "form-status",
    }
}

#[must_use]
pub fn submit_label(sending: bool) -> &'static str {
    if sending { "Sending..." } else { "Send Message" }
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let state = RwSignal::new(ContactState::default());
    let endpoint = config.contact_endpoint.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = state.try_update(ContactState::begin_submit).flatten() else {
            return;
        };
        let endpoint = endpoint.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = submit(endpoint.as_deref(), &payload).await;
            match &result {
                Ok(()) => log::info!("contact message sent"),
                Err(err) => log::warn!("contact message failed: {err}"),
            }
            let _ = state.try_update(|s| s.finish(result));
        });
        #[cfg(not(feature = "csr"))]
        let _ = (endpoint, payload);
    };

    let sending = move || state.with(ContactState::is_sending);
    let status = move || {
        state.with(|s| {
            s.status.message().map(|msg| view! { <p class=status_class(&s.status)>{msg.to_owned()}</p> })
        })
    };

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="section-heading">
                    <MatrixText text="Get In Touch" scroll_triggered=true class="section-title" />
                    <p>"Have a project in mind or just want to say hello? My inbox is open."</p>
                </div>
                <div class="contact-grid">
                    <div class="contact-info">
                        {CONTACT_INFO
                            .iter()
                            .map(|item| {
                                view! {
                                    <a class="info-card cursor-target" href=item.link>
                                        <h4>{item.title}</h4>
                                        <p>{item.info}</p>
                                    </a>
                                }
                            })
                            .collect_view()}
                        <h3>"Follow Me"</h3>
                        <div class="contact-socials">
                            {social_row(config.github_profile_url())}
                        </div>
                    </div>
                    <form class="contact-form" on:submit=on_submit novalidate=true>
                        <div class="form-row">
                            <input
                                class="cursor-target"
                                type="text"
                                placeholder="Your Name"
                                prop:value=move || state.with(|s| s.form.name.clone())
                                on:input=move |ev| state.update(|s| s.form.name = event_target_value(&ev))
                            />
                            <input
                                class="cursor-target"
                                type="email"
                                placeholder="Your Email"
                                prop:value=move || state.with(|s| s.form.email.clone())
                                on:input=move |ev| state.update(|s| s.form.email = event_target_value(&ev))
                            />
                        </div>
                        <input
                            class="cursor-target"
                            type="text"
                            placeholder="Subject"
                            prop:value=move || state.with(|s| s.form.subject.clone())
                            on:input=move |ev| state.update(|s| s.form.subject = event_target_value(&ev))
                        />
                        <textarea
                            class="cursor-target"
                            rows="6"
                            placeholder="Your Message"
                            prop:value=move || state.with(|s| s.form.message.clone())
                            on:input=move |ev| state.update(|s| s.form.message = event_target_value(&ev))
                        ></textarea>
                        <button class="btn btn-primary cursor-target" type="submit" disabled=sending>
                            {move || submit_label(sending())}
                        </button>
                        {status}
                    </form>
                </div>
            </div>
        </section>
    }
}
