//! Roadmap UI Components
//!
//! Leptos components for the interactive guide.
//!
//! # Components
//!
//! ## Blocks
//! - [`render_block`] - Dispatches a [`Block`](roadmap_core::Block) to its component
//! - [`ImageBlock`], [`TextBlock`], [`ListBlock`], [`CodeBlock`], [`TermsBlock`], [`LinksBlock`]
//!
//! ## Cards
//! - [`GroupSection`] - A filtered group and its cards
//! - [`ItemCard`] - One topic with a Hide/Details toggle
//!
//! ## Navigation
//! - [`TableOfContents`] - Sidebar listing every group and item
//! - [`scroll_to_anchor`] - Smooth-scrolls an item heading to the top
//!
//! ## Search & Export
//! - [`SearchBox`] - Query input bound to the [`ViewState`]
//! - [`ExportButton`] - Captures the main region and downloads it as PNG
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use roadmap_ui::{SearchBox, ViewState};
//!
//! #[component]
//! fn Header() -> impl IntoView {
//!     let state = RwSignal::new(ViewState::new());
//!     view! { <SearchBox state=state /> }
//! }
//! ```

pub mod blocks;
pub mod card;
pub mod export;
pub mod navigation;
pub mod search;
pub mod state;

pub use blocks::{
    CodeBlock, ImageBlock, LinksBlock, ListBlock, TermsBlock, TextBlock, render_block,
};
pub use card::{GroupSection, ItemCard};
pub use export::{CaptureOptions, ExportButton, ExportError, ExportRequest, export_region};
pub use navigation::{TableOfContents, TocEntry, TocSection, scroll_to_anchor, toc_sections};
pub use search::SearchBox;
pub use state::ViewState;
