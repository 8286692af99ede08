//! Group sections and item cards.

use leptos::prelude::*;
use roadmap_core::{Group, Item};
use roadmap_search::GroupMatch;

use crate::{blocks::render_block, state::ViewState};

/// A group heading followed by the cards that survived filtering.
#[component]
pub fn GroupSection(matched: GroupMatch<'static>, state: RwSignal<ViewState>) -> impl IntoView {
    let group: &'static Group = matched.group;

    view! {
      <section class="roadmap-group" id={format!("group-{}", group.id)}>
        <h2>{group.title.as_str()}</h2>
        <div class="roadmap-group-items">
          {matched
              .items
              .into_iter()
              .map(|item| view! { <ItemCard item=item state=state /> })
              .collect_view()}
        </div>
      </section>
    }
}

/// One topic: title, summary and its blocks behind a Hide/Details toggle.
///
/// The heading carries the item slug as its id so the table of contents
/// can scroll to it.
#[component]
pub fn ItemCard(item: &'static Item, state: RwSignal<ViewState>) -> impl IntoView {
    let slug = item.slug.as_str();
    let expanded = Memo::new(move |_| state.with(|s| s.is_expanded(slug)));

    let on_toggle = move |_| {
        state.update(|s| {
            s.toggle(slug);
        });
    };

    view! {
      <section class="roadmap-card">
        <div class="roadmap-card-header">
          <div>
            <h3 id=slug>{item.title.as_str()}</h3>
            <p class="roadmap-card-summary">{item.summary.as_str()}</p>
          </div>
          <button
            class="roadmap-button"
            aria-expanded=move || expanded.get().to_string()
            on:click=on_toggle
          >
            {move || if expanded.get() { "Hide" } else { "Details" }}
          </button>
        </div>
        <Show when=move || expanded.get()>
          {item
              .blocks
              .iter()
              .enumerate()
              .map(|(index, block)| {
                  let class = if index % 2 == 1 {
                      format!("roadmap-block roadmap-block-alt roadmap-block-{}", block.kind())
                  } else {
                      format!("roadmap-block roadmap-block-{}", block.kind())
                  };
                  view! { <div class=class>{render_block(block)}</div> }
              })
              .collect_view()}
        </Show>
      </section>
    }
}
