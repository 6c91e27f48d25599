//! Server-side HTML rendering for the todo pages.
//!
//! Templates are embedded at compile time and rendered with `minijinja`,
//! which escapes HTML in every `.html` template.

mod renderer;

pub use renderer::{RenderError, TodoRenderer};
