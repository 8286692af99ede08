//! Catalog filtering.

use roadmap_core::{Group, Item};
use tracing::debug;

use crate::{haystack::haystack, query::Query};

/// A group that survived filtering, with its surviving items.
///
/// Borrows from the catalog; filtering never copies or mutates content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMatch<'a> {
    pub group: &'a Group,
    pub items: Vec<&'a Item>,
}

/// Whether an item matches a non-empty query.
pub fn item_matches(item: &Item, query: &Query) -> bool {
    query.matches(&item.title)
        || query.matches(&item.summary)
        || item.blocks.iter().any(|block| query.matches(&haystack(block)))
}

/// Filter groups by a raw query string.
pub fn filter<'a>(groups: &'a [Group], query: &str) -> Vec<GroupMatch<'a>> {
    filter_query(groups, &Query::new(query))
}

/// Filter groups by an already-normalised query.
///
/// With an empty query every group and item is returned, including groups
/// that have no items. With a non-empty query a group is dropped once none of
/// its items match.
pub fn filter_query<'a>(groups: &'a [Group], query: &Query) -> Vec<GroupMatch<'a>> {
    let matches: Vec<GroupMatch<'a>> = groups
        .iter()
        .map(|group| GroupMatch {
            group,
            items: group
                .items
                .iter()
                .filter(|item| query.is_empty() || item_matches(item, query))
                .collect(),
        })
        .filter(|m| !m.items.is_empty() || query.is_empty())
        .collect();

    debug!(
        query = query.raw(),
        groups = matches.len(),
        items = matched_item_count(&matches),
        "filtered catalog"
    );

    matches
}

/// Number of items across a filter result.
pub fn matched_item_count(matches: &[GroupMatch<'_>]) -> usize {
    matches.iter().map(|m| m.items.len()).sum()
}

#[cfg(test)]
mod tests {
    use roadmap_core::{Block, TermDef};

    use super::*;

    fn item(slug: &str, title: &str, summary: &str, blocks: Vec<Block>) -> Item {
        Item {
            id: slug.to_string(),
            slug: slug.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            blocks,
        }
    }

    fn sample_groups() -> Vec<Group> {
        vec![
            Group {
                id: "engine".to_string(),
                title: "Engine".to_string(),
                items: vec![
                    item(
                        "cgroups",
                        "cgroups & Resource Limits",
                        "Prevent noisy neighbors with cgroups.",
                        vec![],
                    ),
                    item(
                        "namespaces",
                        "Namespaces",
                        "Isolation primitives.",
                        vec![Block::Terms {
                            heading: None,
                            terms: vec![TermDef {
                                term: "PID".to_string(),
                                definition: "Process ID isolation".to_string(),
                            }],
                        }],
                    ),
                ],
            },
            Group {
                id: "compose".to_string(),
                title: "Compose".to_string(),
                items: vec![item(
                    "docker-compose",
                    "Docker Compose",
                    "Multi-container apps.",
                    vec![],
                )],
            },
        ]
    }

    fn slugs<'a>(matches: &[GroupMatch<'a>]) -> Vec<&'a str> {
        matches
            .iter()
            .flat_map(|m| m.items.iter().map(|i| i.slug.as_str()))
            .collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let groups = sample_groups();
        let result = filter(&groups, "");

        assert_eq!(result.len(), groups.len());
        for (m, g) in result.iter().zip(&groups) {
            assert!(std::ptr::eq(m.group, g));
            assert_eq!(m.items.len(), g.items.len());
        }
    }

    #[test]
    fn test_title_match() {
        let groups = sample_groups();
        let result = filter(&groups, "cgroup");

        assert_eq!(slugs(&result), vec!["cgroups"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].group.id, "engine");
    }

    #[test]
    fn test_block_match() {
        let groups = sample_groups();
        let result = filter(&groups, "process id");
        assert_eq!(slugs(&result), vec!["namespaces"]);
    }

    #[test]
    fn test_no_match_drops_everything() {
        let groups = sample_groups();
        assert!(filter(&groups, "kubernetes").is_empty());
    }

    #[test]
    fn test_item_matches_summary() {
        let groups = sample_groups();
        let query = Query::new("NOISY");
        assert!(item_matches(&groups[0].items[0], &query));
        assert!(!item_matches(&groups[1].items[0], &query));
    }

    #[test]
    fn test_matched_item_count() {
        let groups = sample_groups();
        assert_eq!(matched_item_count(&filter(&groups, "")), 3);
        assert_eq!(matched_item_count(&filter(&groups, "docker")), 1);
    }
}
