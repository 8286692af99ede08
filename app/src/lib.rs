use leptos::{html, prelude::*};
use leptos_meta::{Meta, Title, provide_meta_context};
use roadmap_core::{Catalog, Config};
use roadmap_search::GroupMatch;
use roadmap_ui::{ExportButton, ExportRequest, GroupSection, SearchBox, TableOfContents, ViewState};

/// Root component: header with search and export, the outline, and the
/// filtered groups.
#[component]
pub fn App(catalog: &'static Catalog, config: Config) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(config.assets.clone());

    let state = RwSignal::new(ViewState::new());
    let query = Memo::new(move |_| state.with(|s| s.query().to_string()));

    // Re-filters on query changes only; expansion toggles do not reach here.
    let visible = Memo::new(move |_| {
        query.track();
        state.with_untracked(|s| s.visible(catalog))
    });

    let no_matches = move || !query.get().is_empty() && visible.with(Vec::is_empty);

    let region = NodeRef::<html::Main>::new();
    let request = ExportRequest::from_config(&config.export);
    let title = config.site.title.clone();
    let description = config.site.description.clone().unwrap_or_default();
    let footer_tip = config.site.footer_tip.clone();

    view! {
      <Title text=title.clone() />
      <Meta name="description" content=description />

      <header class="roadmap-header">
        <div class="roadmap-header-inner">
          <h1>{title}</h1>
          <div class="roadmap-actions">
            <SearchBox state=state />
            <ExportButton region=region request=request />
          </div>
        </div>
      </header>

      <div class="roadmap-layout">
        <TableOfContents catalog=catalog />
        <main class="roadmap-main" id="roadmap-main" node_ref=region>
          <Show when=no_matches>
            <p class="roadmap-empty">"No topics match “" {move || query.get()} "”."</p>
          </Show>
          <For
            each=move || visible.get()
            key=group_key
            children=move |matched| view! { <GroupSection matched=matched state=state /> }
          />
          <footer class="roadmap-footer">
            {footer_tip.map(|tip| view! { <p>"Tip: " {tip}</p> })}
          </footer>
        </main>
      </div>
    }
}

/// Groups re-render only when their set of surviving items changes.
fn group_key(matched: &GroupMatch<'static>) -> (String, Vec<String>) {
    (
        matched.group.id.clone(),
        matched.items.iter().map(|item| item.slug.clone()).collect(),
    )
}
