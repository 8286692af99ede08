//! Roadmap Search
//!
//! Filters the content catalog by a free-text query.
//!
//! # Model
//!
//! - An item survives when the query is a case-insensitive substring of its
//!   title, its summary, or the haystack of any of its blocks.
//! - A group survives when any of its items survives, or when the query is
//!   empty.
//! - Survivors keep declaration order; there is no ranking.
//!
//! Every call rescans the catalog. The data is small and fixed, so no index
//! is kept between keystrokes.
//!
//! # Example
//!
//! ```
//! use roadmap_core::Catalog;
//! use roadmap_search::filter;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let visible = filter(catalog.groups(), "cgroup");
//! assert!(visible.iter().any(|m| m.items.iter().any(|i| i.slug == "cgroups")));
//! ```

pub mod filter;
pub mod haystack;
pub mod query;

pub use filter::{GroupMatch, filter, filter_query, item_matches, matched_item_count};
pub use haystack::haystack;
pub use query::Query;
