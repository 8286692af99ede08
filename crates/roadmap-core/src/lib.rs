//! Roadmap Core Library
//!
//! Content model, catalog loading, asset resolution, configuration and error
//! handling shared by the generator, the CLI and the Leptos client.

pub mod assets;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;

pub use assets::AssetResolver;
pub use catalog::Catalog;
pub use config::Config;
pub use content::{Block, CodeLang, CodeSample, Group, Item, Resource, TermDef};
pub use error::{CoreError, Result};
