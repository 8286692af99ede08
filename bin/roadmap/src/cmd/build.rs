//! Build command - renders the static snapshot

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use color_eyre::eyre::{Result, WrapErr};
use roadmap_generator::Builder;

use crate::{load_catalog, load_config};

/// Run the build command.
///
/// Writes `index.html` to `output`, or to `build.output_dir` from the
/// configuration when no output is given.
pub fn run(
    config_path: &Path,
    content: Option<&Path>,
    output: Option<&Path>,
    query: Option<&str>,
) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?content, ?output, ?query, "Starting build");

    let config = load_config(config_path)?;
    let catalog = load_catalog(content)?;

    let output_dir = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.build.output_dir));

    tracing::debug!(?config, "Loaded configuration");

    let builder = Builder::new(config, &catalog, &output_dir).with_query(query.unwrap_or_default());
    let page = builder.page_path();
    let stats = builder.build().wrap_err("Build failed")?;

    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Groups:     {}", stats.groups);
    println!("  Topics:     {}", stats.items);
    println!("  Size:       {} bytes", stats.bytes);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        println!("  Filter:     \"{query}\"");
    }
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", page.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_build_to_explicit_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("site");

        run(
            &dir.path().join("missing.toml"),
            None,
            Some(&output),
            Some("compose"),
        )
        .unwrap();

        let html = fs::read_to_string(output.join("index.html")).unwrap();
        assert!(html.contains(r#"<h3 id="docker-compose">"#));
    }

    #[test]
    fn test_build_with_bad_content_fails() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content.yaml");
        fs::write(&content, "groups: [").unwrap();

        let result = run(
            &dir.path().join("missing.toml"),
            Some(&content),
            Some(dir.path()),
            None,
        );
        assert!(result.is_err());
    }
}
