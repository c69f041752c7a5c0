//! Page sections and the effect hosts they embed.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections read shared state (site config, motion policy, GitHub profile)
//! from Leptos context. `target_cursor` and `matrix_text` bridge the
//! browser-free engines in the `effects` crate to the live document.

pub mod about;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod matrix_text;
pub mod projects;
pub mod showcase;
pub mod skills;
pub mod target_cursor;
