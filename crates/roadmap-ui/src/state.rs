//! View state owned by the page: the query and per-item expansion flags.

use std::collections::HashSet;

use roadmap_core::Catalog;
use roadmap_search::{GroupMatch, filter};

/// Query plus the set of collapsed items.
///
/// Items are expanded unless their slug is in `collapsed`, so every card
/// starts open. The query and the flags never affect each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    query: String,
    collapsed: HashSet<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn is_expanded(&self, slug: &str) -> bool {
        !self.collapsed.contains(slug)
    }

    /// Flip an item's flag and return the new expansion state.
    pub fn toggle(&mut self, slug: &str) -> bool {
        if self.collapsed.remove(slug) {
            true
        } else {
            self.collapsed.insert(slug.to_string());
            false
        }
    }

    /// Groups and items visible under the current query.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<GroupMatch<'a>> {
        filter(catalog.groups(), &self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_start_expanded() {
        let state = ViewState::new();
        assert!(state.is_expanded("cgroups"));
        assert!(state.is_expanded("anything"));
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_toggle_is_per_item() {
        let mut state = ViewState::new();

        assert!(!state.toggle("cgroups"));
        assert!(!state.is_expanded("cgroups"));
        assert!(state.is_expanded("namespaces"));

        assert!(state.toggle("cgroups"));
        assert!(state.is_expanded("cgroups"));
    }

    #[test]
    fn test_query_change_keeps_flags() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = ViewState::new();
        state.toggle("cgroups");

        state.set_query("compose");
        let hidden = state
            .visible(catalog)
            .iter()
            .flat_map(|m| m.items.iter())
            .all(|item| item.slug != "cgroups");
        assert!(hidden);
        assert!(!state.is_expanded("cgroups"));

        state.set_query("");
        assert!(!state.is_expanded("cgroups"));
    }

    #[test]
    fn test_collapsed_item_stays_in_results() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = ViewState::new();
        state.toggle("cgroups");
        state.set_query("cgroup");

        let slugs: Vec<&str> = state
            .visible(catalog)
            .iter()
            .flat_map(|m| m.items.iter().map(|item| item.slug.as_str()))
            .collect();
        assert!(slugs.contains(&"cgroups"));
    }

    #[test]
    fn test_visible_with_empty_query_is_whole_catalog() {
        let catalog = Catalog::builtin().unwrap();
        let state = ViewState::new();
        assert_eq!(state.visible(catalog).len(), catalog.groups().len());
    }
}
