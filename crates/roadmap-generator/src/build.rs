//! Build orchestration.
//!
//! Writes the static snapshot of the guide to an output directory.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use roadmap_core::{Catalog, Config};
use roadmap_search::{filter, matched_item_count};
use thiserror::Error;
use tracing::{debug, info};

use crate::html::{HtmlError, HtmlGenerator};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Groups rendered.
    pub groups: usize,

    /// Items rendered.
    pub items: usize,

    /// Bytes written to the page.
    pub bytes: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Renders a catalog to `<output>/index.html`.
#[derive(Debug)]
pub struct Builder<'a> {
    config: Config,
    catalog: &'a Catalog,
    output_dir: PathBuf,
    query: String,
}

impl<'a> Builder<'a> {
    #[must_use]
    pub fn new(config: Config, catalog: &'a Catalog, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            catalog,
            output_dir: output_dir.into(),
            query: String::new(),
        }
    }

    /// Pre-filter the snapshot with a search query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Path of the page this builder writes.
    #[must_use]
    pub fn page_path(&self) -> PathBuf {
        self.output_dir.join("index.html")
    }

    /// Execute the build.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();

        info!(
            output = %self.output_dir.display(),
            query = %self.query,
            "starting build"
        );

        fs::create_dir_all(&self.output_dir)?;

        let visible = filter(self.catalog.groups(), &self.query);
        let generator = HtmlGenerator::new(self.config.clone());
        let html = generator.generate_page(self.catalog, &self.query)?;

        let path = self.page_path();
        write_page(&path, &html)?;

        let stats = BuildStats {
            groups: visible.len(),
            items: matched_item_count(&visible),
            bytes: html.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            groups = stats.groups,
            items = stats.items,
            bytes = stats.bytes,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    debug!(path = %path.display(), "wrote page");
    Ok(())
}
