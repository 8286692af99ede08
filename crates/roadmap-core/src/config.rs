//! Guide configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    assets::AssetResolver,
    error::{CoreError, Result},
};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Page-wide settings.
    pub site: SiteConfig,

    /// Where illustrative images are served from.
    #[serde(default)]
    pub assets: AssetResolver,

    /// Image export settings.
    #[serde(default)]
    pub export: ExportConfig,

    /// Static build settings.
    #[serde(default)]
    pub build: BuildConfig,
}

/// Page-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Page heading and document title.
    pub title: String,

    /// Meta description.
    #[serde(default)]
    pub description: Option<String>,

    /// Hint shown in the page footer.
    #[serde(default)]
    pub footer_tip: Option<String>,
}

/// Export configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// File name offered for the downloaded image.
    #[serde(default = "default_export_filename")]
    pub filename: String,

    /// Device pixel ratio used for the capture.
    #[serde(default = "default_export_scale")]
    pub scale: f64,
}

/// Build configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for the static snapshot.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_title() -> String {
    "Docker Roadmap — Interactive".to_string()
}

fn default_export_filename() -> String {
    "docker-roadmap.png".to_string()
}

fn default_export_scale() -> f64 {
    2.0
}

fn default_output_dir() -> String {
    "public".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: None,
            footer_tip: None,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: default_export_filename(),
            scale: default_export_scale(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            assets: AssetResolver::default(),
            export: ExportConfig::default(),
            build: BuildConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text, e.g. a file embedded at compile time.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| CoreError::config_with_source("Failed to parse config", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `ROADMAP__SECTION__KEY` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("ROADMAP").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if !self.export.filename.ends_with(".png") {
            return Err(CoreError::config(format!(
                "export.filename must end in .png, got `{}`",
                self.export.filename
            )));
        }

        if !self.export.scale.is_finite() || self.export.scale <= 0.0 {
            return Err(CoreError::config(format!(
                "export.scale must be a positive number, got {}",
                self.export.scale
            )));
        }

        if !self.assets.base_path.starts_with('/') {
            tracing::warn!(
                base_path = %self.assets.base_path,
                "assets.base_path should start with a slash"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "Docker Roadmap"
description = "Interactive study guide"
footer_tip = "Photos live in public/photos/"

[assets]
base_path = "/roadmap/"
dir = "img"
extension = "webp"

[export]
filename = "roadmap.png"
scale = 1.5

[build]
output_dir = "dist"
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("roadmap.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");

        assert_eq!(config.site.title, "Docker Roadmap");
        assert_eq!(
            config.site.footer_tip.as_deref(),
            Some("Photos live in public/photos/")
        );
        assert_eq!(config.assets.resolve("p4"), "/roadmap/img/p4.webp");
        assert_eq!(config.export.filename, "roadmap.png");
        assert_eq!(config.export.scale, 1.5);
        assert_eq!(config.build.output_dir, "dist");
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml_str("[site]\ntitle = \"Minimal\"\n").expect("parse");

        assert_eq!(config.assets, AssetResolver::default());
        assert_eq!(config.export.filename, "docker-roadmap.png");
        assert_eq!(config.export.scale, 2.0);
        assert_eq!(config.build.output_dir, "public");
        assert!(config.site.description.is_none());
    }

    #[test]
    fn test_config_validation_empty_title() {
        let result = Config::from_toml_str("[site]\ntitle = \"  \"\n");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_export_filename() {
        let result = Config::from_toml_str(
            "[site]\ntitle = \"T\"\n[export]\nfilename = \"roadmap.jpg\"\n",
        );
        assert!(result.unwrap_err().to_string().contains(".png"));
    }

    #[test]
    fn test_config_validation_export_scale() {
        for scale in ["0.0", "-1.0", "nan", "inf", "-inf"] {
            let result = Config::from_toml_str(&format!(
                "[site]\ntitle = \"T\"\n[export]\nscale = {scale}\n"
            ));
            assert!(result.is_err(), "scale = {scale} should be rejected");
            assert!(result.unwrap_err().to_string().contains("export.scale"));
        }

        let config = Config::from_toml_str("[site]\ntitle = \"T\"\n[export]\nscale = 0.5\n")
            .expect("parse");
        assert_eq!(config.export.scale, 0.5);
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load_with_env(Path::new("/nonexistent/roadmap.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_with_env_reads_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("roadmap.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");
        assert_eq!(config.export.filename, "roadmap.png");
    }

    #[test]
    fn test_workspace_config_is_valid() {
        let config = Config::from_toml_str(include_str!("../../../roadmap.toml"))
            .expect("workspace roadmap.toml parses");
        assert_eq!(config.export.filename, "docker-roadmap.png");
    }
}
