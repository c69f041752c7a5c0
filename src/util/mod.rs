//! Utility helpers shared across the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` and `capability` are read once at start-up, `contact_form` holds
//! pure form rules, `cursor_lease` is the page-wide hold on the pointer
//! style, and `browser` holds the `web_sys` glue that the effect
//! hosts and sections build on.

pub mod browser;
pub mod capability;
pub mod config;
pub mod contact_form;
pub mod cursor_lease;
