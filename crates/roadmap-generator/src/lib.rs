//! Roadmap Generator Library
//!
//! Renders the guide to a single static HTML page.
//!
//! # Modules
//!
//! - [`template`] - HTML template system with variable interpolation
//! - [`html`] - Block dispatcher and page composition
//! - [`build`] - Build orchestration

pub mod build;
pub mod html;
pub mod template;

pub use build::{BuildStats, Builder};
pub use html::{HtmlGenerator, render_block};
pub use template::{Template, TemplateContext, TemplateRegistry};
