//! The validated, read-only content catalog.

use std::{collections::HashSet, path::Path, sync::LazyLock};

use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    content::{Block, Group, Item},
    error::{CoreError, Result},
};

/// Content shipped with the guide.
const BUILTIN_CONTENT: &str = include_str!("../../../content/roadmap.yaml");

static BUILTIN: LazyLock<std::result::Result<Catalog, String>> =
    LazyLock::new(|| Catalog::from_yaml_str(BUILTIN_CONTENT).map_err(|e| e.to_string()));

/// On-disk shape of a content file.
#[derive(Debug, Deserialize)]
struct ContentFile {
    groups: Vec<Group>,
}

/// Ordered collection of groups whose invariants were checked at construction.
///
/// Group order, item order within a group, and block order within an item are
/// the presentation order and are never changed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    groups: Vec<Group>,
}

impl Catalog {
    /// Build a catalog, rejecting content that breaks a model invariant.
    pub fn new(groups: Vec<Group>) -> Result<Self> {
        validate(&groups)?;

        let catalog = Self { groups };
        debug!(
            groups = catalog.groups.len(),
            items = catalog.item_count(),
            blocks = catalog.block_count(),
            "catalog constructed"
        );
        Ok(catalog)
    }

    /// The catalog compiled into the binary, parsed once per process.
    pub fn builtin() -> Result<&'static Catalog> {
        BUILTIN.as_ref().map_err(|e| CoreError::content(e.clone()))
    }

    /// Parse a catalog from YAML content.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: ContentFile = serde_yaml::from_str(content)?;
        Self::new(file.groups)
    }

    /// Load a catalog from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: ContentFile = serde_yaml::from_str(&content)
            .map_err(|e| CoreError::parse(path, e.to_string()))?;

        let catalog = Self::new(file.groups)?;
        info!(path = %path.display(), items = catalog.item_count(), "loaded content");
        Ok(catalog)
    }

    /// All groups in presentation order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// All items in presentation order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    /// Look up an item by its anchor slug.
    pub fn item_by_slug(&self, slug: &str) -> Option<&Item> {
        self.items().find(|item| item.slug == slug)
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn block_count(&self) -> usize {
        self.items().map(|item| item.blocks.len()).sum()
    }

    /// Distinct image asset keys, in first-use order.
    pub fn image_keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items()
            .flat_map(|item| item.blocks.iter())
            .filter_map(|block| match block {
                Block::Image { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .filter(|key| seen.insert(*key))
            .collect()
    }
}

fn validate(groups: &[Group]) -> Result<()> {
    let mut group_ids = HashSet::new();
    let mut slugs = HashSet::new();

    for group in groups {
        if group.id.is_empty() {
            return Err(CoreError::content(format!(
                "group `{}` has an empty id",
                group.title
            )));
        }
        if !group_ids.insert(group.id.as_str()) {
            return Err(CoreError::content(format!(
                "duplicate group id `{}`",
                group.id
            )));
        }

        for item in &group.items {
            if item.id.is_empty() {
                return Err(CoreError::content(format!(
                    "item `{}` in group `{}` has an empty id",
                    item.title, group.id
                )));
            }
            if !is_url_safe(&item.slug) {
                return Err(CoreError::content(format!(
                    "item `{}` has a slug that is not URL-safe: `{}`",
                    item.id, item.slug
                )));
            }
            if !slugs.insert(item.slug.as_str()) {
                return Err(CoreError::content(format!(
                    "duplicate slug `{}`",
                    item.slug
                )));
            }
        }
    }

    Ok(())
}

/// Slugs are non-empty and limited to ASCII alphanumerics, `-` and `_`.
pub fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
