//! Outbound HTTP.
//!
//! SYSTEM CONTEXT
//! ==============
//! `github` reads public profile and repository data; `contact` posts the
//! contact form to a third-party relay. Neither retries.

pub mod contact;
pub mod github;
