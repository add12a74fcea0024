//! Template loading and per-guest poster rendering.
//!
//! The template is decoded once per batch and shared read-only; every
//! render invocation builds its own drawing surface, rasterizes the guest
//! name as an SVG text overlay, and encodes the result to PNG.

pub mod error;
pub mod poster;
pub mod template;

pub use error::{RenderError, TemplateError};
pub use poster::{render_poster, render_poster_to_file, TextStyle};
pub use template::Template;
