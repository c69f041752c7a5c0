//! Page state stored in signals and provided through context.
//!
//! DESIGN
//! ======
//! Plain structs with pure transition methods. Components own the signals and
//! call the transitions; everything here is testable without a browser.

pub mod carousel;
pub mod contact;
pub mod content;
pub mod profile;
