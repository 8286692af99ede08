//! Table of contents and anchor scrolling.

use leptos::prelude::*;
use roadmap_core::Catalog;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// One group in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocSection<'a> {
    pub title: &'a str,
    pub entries: Vec<TocEntry<'a>>,
}

/// A link to an item heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry<'a> {
    pub title: &'a str,
    pub anchor: &'a str,
}

/// Every group and item of the catalog, in catalog order.
///
/// The outline is never filtered by the current query.
pub fn toc_sections(catalog: &Catalog) -> Vec<TocSection<'_>> {
    catalog
        .groups()
        .iter()
        .map(|group| TocSection {
            title: &group.title,
            entries: group
                .items
                .iter()
                .map(|item| TocEntry {
                    title: &item.title,
                    anchor: &item.slug,
                })
                .collect(),
        })
        .collect()
}

/// Smooth-scroll the element with the given id to the top of the viewport.
///
/// Returns `false` when no such element is mounted, which happens when the
/// item is filtered out. Nothing else changes in that case.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        log::debug!("no element with id {id:?} to scroll to");
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Sidebar outline of the whole catalog.
#[component]
pub fn TableOfContents(catalog: &'static Catalog) -> impl IntoView {
    view! {
      <aside class="roadmap-toc" aria-label="Table of contents">
        <div class="roadmap-toc-title">"Contents"</div>
        <ul>
          {toc_sections(catalog)
              .into_iter()
              .map(|section| {
                  view! {
                    <li>
                      <div class="roadmap-toc-group">{section.title}</div>
                      <ul>
                        {section
                            .entries
                            .into_iter()
                            .map(|entry| {
                                let anchor = entry.anchor;
                                view! {
                                  <li>
                                    <button
                                      class="roadmap-toc-link"
                                      on:click=move |_| {
                                          scroll_to_anchor(anchor);
                                      }
                                    >
                                      "• "
                                      {entry.title}
                                    </button>
                                  </li>
                                }
                            })
                            .collect_view()}
                      </ul>
                    </li>
                  }
              })
              .collect_view()}
        </ul>
      </aside>
    }
}
