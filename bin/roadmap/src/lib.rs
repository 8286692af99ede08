//! Roadmap CLI Library
//!
//! Command implementations for the `roadmap` binary, exposed as a library so
//! they can be driven from tests.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, check, search)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use roadmap::cmd;
//!
//! // Render the full guide to public/index.html
//! cmd::build::run(Path::new("roadmap.toml"), None, Some(Path::new("public")), None).unwrap();
//! ```

use std::{borrow::Cow, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use roadmap_core::{Catalog, Config};

pub mod cmd;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Load the configuration file, or the defaults when it does not exist.
///
/// `ROADMAP__SECTION__KEY` environment variables override file values.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "configuration file not found, using defaults");
        return Ok(Config::default());
    }

    Config::load_with_env(path)
        .wrap_err_with(|| format!("Failed to load configuration from {}", path.display()))
}

/// The catalog from `content`, or the built-in one.
pub fn load_catalog(content: Option<&Path>) -> Result<Cow<'static, Catalog>> {
    match content {
        Some(path) => {
            let catalog = Catalog::load(path)
                .wrap_err_with(|| format!("Failed to load content from {}", path.display()))?;
            Ok(Cow::Owned(catalog))
        }
        None => {
            let catalog = Catalog::builtin().wrap_err("Built-in content is invalid")?;
            Ok(Cow::Borrowed(catalog))
        }
    }
}
