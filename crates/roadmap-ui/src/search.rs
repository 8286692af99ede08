//! Search input bound to the view state.

use leptos::prelude::*;
use web_sys::KeyboardEvent;

use crate::state::ViewState;

/// Search box input component.
///
/// Every keystroke replaces the query in `state`; Escape clears it.
#[component]
pub fn SearchBox(
    /// Placeholder text for the input.
    #[prop(default = "Search topics…".to_string())]
    placeholder: String,
    /// Page state holding the query.
    state: RwSignal<ViewState>,
) -> impl IntoView {
    let query = Memo::new(move |_| state.with(|s| s.query().to_string()));

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            state.update(|s| s.set_query(""));
        }
    };

    view! {
      <div class="roadmap-search">
        <input
          type="search"
          placeholder=placeholder
          aria-label="Search topics"
          prop:value=move || query.get()
          on:input=move |ev| {
              let value = event_target_value(&ev);
              state.update(|s| s.set_query(value));
          }
          on:keydown=on_keydown
        />
      </div>
    }
}
