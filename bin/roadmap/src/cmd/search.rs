//! Search command - prints the topics a query keeps

use std::{fmt::Write as _, path::Path};

use color_eyre::eyre::Result;
use roadmap_search::{GroupMatch, filter, matched_item_count};

use crate::load_catalog;

/// Run the search command.
///
/// Groups and topics are printed in catalog order. No matches is not an
/// error.
pub fn run(content: Option<&Path>, query: &str) -> Result<()> {
    let catalog = load_catalog(content)?;
    let matches = filter(catalog.groups(), query);

    tracing::info!(
        query,
        groups = matches.len(),
        items = matched_item_count(&matches),
        "Search complete"
    );

    print!("{}", format_matches(query, &matches));
    Ok(())
}

/// Render matches as an indented outline.
fn format_matches(query: &str, matches: &[GroupMatch<'_>]) -> String {
    let count = matched_item_count(matches);
    let mut out = String::new();

    if count == 0 && !query.is_empty() {
        let _ = writeln!(out, "No topics match \"{query}\".");
        return out;
    }

    for matched in matches {
        let _ = writeln!(out, "{}", matched.group.title);
        for item in &matched.items {
            let _ = writeln!(out, "  • {} (#{})", item.title, item.slug);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{count} topic(s) in {} group(s)", matches.len());
    out
}

#[cfg(test)]
mod tests {
    use roadmap_core::Catalog;

    use super::*;

    #[test]
    fn test_format_cgroup_matches() {
        let catalog = Catalog::builtin().unwrap();
        let matches = filter(catalog.groups(), "cgroup");
        let out = format_matches("cgroup", &matches);

        assert!(out.contains("(#cgroups)"));
        assert!(!out.contains("(#docker-compose)"));
        assert!(out.ends_with("group(s)\n"));
    }

    #[test]
    fn test_format_no_matches() {
        let catalog = Catalog::builtin().unwrap();
        let matches = filter(catalog.groups(), "zzz-nothing");

        assert_eq!(
            format_matches("zzz-nothing", &matches),
            "No topics match \"zzz-nothing\".\n"
        );
    }

    #[test]
    fn test_run_without_matches_succeeds() {
        assert!(run(None, "zzz-nothing").is_ok());
    }
}
