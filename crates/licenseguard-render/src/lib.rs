//! Presenters for license reports.
//!
//! Both presenters are pure: same report in, same bytes out.

#![forbid(unsafe_code)]

mod json;
mod text;

pub use json::render_json;
pub use text::render_text;
