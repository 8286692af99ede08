//! Check command - validate configuration and content

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use roadmap_core::{Catalog, Config};

use crate::load_catalog;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration, the content catalog and, when `assets` is
/// given, that every image key has a file under it.
pub fn run(
    config_path: &Path,
    content: Option<&Path>,
    strict: bool,
    assets: Option<&Path>,
) -> Result<()> {
    tracing::info!(?config_path, ?content, strict, ?assets, "Checking configuration and content");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = check_config(config_path, &mut result);

    println!("\nChecking content...");
    let catalog = match load_catalog(content) {
        Ok(catalog) => {
            println!(
                "  ✓ {} groups, {} topics, {} blocks",
                catalog.groups().len(),
                catalog.item_count(),
                catalog.block_count()
            );
            Some(catalog)
        }
        Err(e) => {
            result.add_error(format!("Content error: {e:#}"));
            println!("  ✗ Content invalid: {e:#}");
            None
        }
    };

    if let Some(catalog) = &catalog {
        check_empty_groups(catalog, &mut result);

        println!("\nChecking images...");
        match assets {
            Some(root) => check_images(catalog, &config, root, &mut result),
            None => println!("  ℹ Skipped, pass --assets <DIR> to look for image files"),
        }
    }

    println!("\nChecking configuration values...");
    check_config_values(&config, &mut result);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Load the configuration, recording problems and falling back to defaults.
fn check_config(path: &Path, result: &mut ValidationResult) -> Config {
    if !path.exists() {
        result.add_warning(format!(
            "Configuration file {} not found, defaults apply",
            path.display()
        ));
        println!("  ⚠ {} missing, using defaults", path.display());
        return Config::default();
    }

    match Config::load_with_env(path) {
        Ok(config) => {
            println!("  ✓ Configuration valid");
            config
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            Config::default()
        }
    }
}

/// Groups without items only ever show up for an empty query.
fn check_empty_groups(catalog: &Catalog, result: &mut ValidationResult) {
    for group in catalog.groups().iter().filter(|g| g.items.is_empty()) {
        result.add_warning(format!("Group `{}` has no topics", group.id));
    }
}

/// Every image key must have a file at `<root>/<dir>/<key>.<ext>`.
fn check_images(catalog: &Catalog, config: &Config, root: &Path, result: &mut ValidationResult) {
    let keys = catalog.image_keys();
    let mut missing = 0;

    for key in &keys {
        let path = config.assets.local_path(root, key);
        if !path.is_file() {
            result.add_warning(format!("Missing image `{key}` (expected {})", path.display()));
            missing += 1;
        }
    }

    if missing == 0 {
        println!("  ✓ All {} images present", keys.len());
    } else {
        println!("  ⚠ {missing}/{} images missing", keys.len());
    }
}

/// Check configuration values for common issues.
fn check_config_values(config: &Config, result: &mut ValidationResult) {
    if !config.assets.base_path.starts_with('/') {
        result.add_warning(format!(
            "assets.base_path `{}` is relative, images resolve against the page URL",
            config.assets.base_path
        ));
    }

    let output = Path::new(&config.build.output_dir);
    if output.exists() && !output.is_dir() {
        result.add_error(format!(
            "Output path exists but is not a directory: {}",
            config.build.output_dir
        ));
    }

    println!("  ✓ Configuration values checked");
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_check_builtin_without_assets() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("roadmap.toml");
        fs::write(&config, "[site]\ntitle = \"Guide\"\n").unwrap();

        assert!(run(&config, None, true, None).is_ok());
    }

    #[test]
    fn test_missing_images_are_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("roadmap.toml");
        fs::write(&config, "[site]\ntitle = \"Guide\"\n").unwrap();

        assert!(run(&config, None, false, Some(dir.path())).is_ok());
        assert!(run(&config, None, true, Some(dir.path())).is_err());
    }

    #[test]
    fn test_present_images_pass_strict() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("roadmap.toml");
        fs::write(&config_path, "[site]\ntitle = \"Guide\"\n").unwrap();

        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        for key in catalog.image_keys() {
            let path = config.assets.local_path(dir.path(), key);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"png").unwrap();
        }

        assert!(run(&config_path, None, true, Some(dir.path())).is_ok());
    }

    #[test]
    fn test_invalid_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("roadmap.toml");
        fs::write(&config, "[site]\ntitle = \"\"\n").unwrap();

        assert!(run(&config, None, false, None).is_err());
    }

    #[test]
    fn test_empty_group_warning() {
        let catalog = Catalog::from_yaml_str(
            "groups:\n  - id: empty\n    title: Empty\n",
        )
        .unwrap();
        let mut result = ValidationResult::default();

        check_empty_groups(&catalog, &mut result);
        assert_eq!(result.warnings.len(), 1);
        assert!(!result.has_errors());
    }
}
