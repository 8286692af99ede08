//! Block components and the dispatcher that maps each variant to one of them.

use leptos::prelude::*;
use roadmap_core::{AssetResolver, Block, CodeSample, Resource, TermDef};

/// Render a block with the component for its variant.
///
/// The match is exhaustive, so a new [`Block`] variant fails to compile
/// until it has a component here.
pub fn render_block(block: &'static Block) -> AnyView {
    match block {
        Block::Image { key, caption } => view! {
            <ImageBlock asset_key=key.as_str() caption=caption.as_deref() />
        }
        .into_any(),
        Block::Text { heading, body } => view! {
            <TextBlock heading=heading.as_deref() body=body.as_str() />
        }
        .into_any(),
        Block::List { heading, items } => view! {
            <ListBlock heading=heading.as_deref() items=items.as_slice() />
        }
        .into_any(),
        Block::Code { heading, code } => view! {
            <CodeBlock heading=heading.as_deref() code=code />
        }
        .into_any(),
        Block::Terms { heading, terms } => view! {
            <TermsBlock heading=heading.as_deref() terms=terms.as_slice() />
        }
        .into_any(),
        Block::Links { heading, links } => view! {
            <LinksBlock heading=heading.as_deref() links=links.as_slice() />
        }
        .into_any(),
    }
}

fn block_heading(heading: Option<&'static str>) -> impl IntoView {
    heading.map(|text| view! { <h4 class="roadmap-block-heading">{text}</h4> })
}

/// A screenshot resolved through the [`AssetResolver`] in context.
///
/// A failed load swaps the picture for a label carrying the caption, and
/// the key badge stays visible either way.
#[component]
pub fn ImageBlock(asset_key: &'static str, caption: Option<&'static str>) -> impl IntoView {
    let assets = use_context::<AssetResolver>().unwrap_or_default();
    let src = assets.resolve(asset_key);
    let alt = caption.unwrap_or(asset_key);
    let broken = RwSignal::new(false);

    view! {
      <figure class="roadmap-figure">
        <Show
          when=move || !broken.get()
          fallback=move || view! { <div class="roadmap-figure-missing">{alt}</div> }
        >
          <img
            src=src.clone()
            alt=alt
            loading="lazy"
            on:error=move |_| {
                log::warn!("image {asset_key} failed to load");
                broken.set(true);
            }
          />
        </Show>
        <figcaption>
          <span>{caption}</span>
          <span class="roadmap-badge">{asset_key}</span>
        </figcaption>
      </figure>
    }
}

#[component]
pub fn TextBlock(heading: Option<&'static str>, body: &'static str) -> impl IntoView {
    view! {
      <div class="roadmap-text">
        {block_heading(heading)}
        <p>{body}</p>
      </div>
    }
}

#[component]
pub fn ListBlock(heading: Option<&'static str>, items: &'static [String]) -> impl IntoView {
    view! {
      <div class="roadmap-list">
        {block_heading(heading)}
        <ul>
          {items.iter().map(|item| view! { <li>{item.as_str()}</li> }).collect_view()}
        </ul>
      </div>
    }
}

/// Code sample with its language label. Lines are shown verbatim.
#[component]
pub fn CodeBlock(heading: Option<&'static str>, code: &'static CodeSample) -> impl IntoView {
    view! {
      <div class="roadmap-code-block">
        {block_heading(heading)}
        <div class="roadmap-code">
          <div class="roadmap-code-label">{code.lang.label()}</div>
          <pre class={format!("language-{}", code.lang.as_str())}>
            <code>{code.source()}</code>
          </pre>
        </div>
      </div>
    }
}

#[component]
pub fn TermsBlock(heading: Option<&'static str>, terms: &'static [TermDef]) -> impl IntoView {
    view! {
      <div class="roadmap-terms-block">
        {block_heading(heading)}
        <dl class="roadmap-terms">
          {terms
              .iter()
              .map(|def| {
                  view! {
                    <div class="roadmap-term">
                      <dt>{def.term.as_str()}</dt>
                      <dd>{def.definition.as_str()}</dd>
                    </div>
                  }
              })
              .collect_view()}
        </dl>
      </div>
    }
}

/// External links, opened in a new tab without a referrer.
#[component]
pub fn LinksBlock(heading: Option<&'static str>, links: &'static [Resource]) -> impl IntoView {
    view! {
      <div class="roadmap-links-block">
        {block_heading(heading)}
        <div class="roadmap-links">
          {links
              .iter()
              .map(|link| {
                  view! {
                    <a href=link.url.as_str() target="_blank" rel="noreferrer">
                      "🔗 "
                      {link.label.as_str()}
                    </a>
                  }
              })
              .collect_view()}
        </div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos::tachys::view::RenderHtml;
    use roadmap_core::{Catalog, CodeLang};

    use super::*;

    fn leak(block: Block) -> &'static Block {
        Box::leak(Box::new(block))
    }

    #[test]
    fn test_code_block_label_and_line_order() {
        let block = leak(Block::Code {
            heading: Some("Everyday commands".to_string()),
            code: CodeSample {
                lang: CodeLang::Bash,
                lines: vec!["docker ps".to_string(), "docker images".to_string()],
            },
        });
        let html = render_block(block).to_html();

        assert!(html.contains("roadmap-code-label"));
        assert!(html.contains("BASH"));
        assert!(html.contains("Everyday commands"));
        let first = html.find("docker ps").expect("first line rendered");
        let second = html.find("docker images").expect("second line rendered");
        assert!(first < second);
    }

    #[test]
    fn test_links_open_in_new_context() {
        let block = leak(Block::Links {
            heading: None,
            links: vec![Resource {
                label: "Docker docs".to_string(),
                url: "https://docs.docker.com/".to_string(),
            }],
        });
        let html = render_block(block).to_html();

        assert!(html.contains(r#"href="https://docs.docker.com/""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noreferrer""#));
        assert!(html.contains("Docker docs"));
    }

    #[test]
    fn test_image_resolves_key_and_shows_badge() {
        let block = leak(Block::Image {
            key: "p102_cgroups".to_string(),
            caption: Some("Resource limits".to_string()),
        });
        let html = render_block(block).to_html();

        assert!(html.contains(r#"src="/photos/p102_cgroups.png""#));
        assert!(html.contains("roadmap-badge"));
        assert!(html.contains("Resource limits"));
    }

    #[test]
    fn test_terms_and_list_keep_order() {
        let terms = leak(Block::Terms {
            heading: None,
            terms: vec![
                TermDef {
                    term: "Image".to_string(),
                    definition: "Read-only template".to_string(),
                },
                TermDef {
                    term: "Container".to_string(),
                    definition: "Running instance".to_string(),
                },
            ],
        });
        let html = render_block(terms).to_html();
        let first = html.find("Read-only template").expect("first term rendered");
        let second = html.find("Running instance").expect("second term rendered");
        assert!(first < second);
        assert!(html.contains("<dt>"));

        let list = leak(Block::List {
            heading: None,
            items: vec!["build".to_string(), "ship".to_string(), "run".to_string()],
        });
        let html = render_block(list).to_html();
        let positions: Vec<usize> = ["build", "ship", "run"]
            .iter()
            .map(|s| html.find(s).expect("item rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("<li>"));
    }

    #[test]
    fn test_every_variant_renders_distinctly() {
        let catalog = Catalog::builtin().unwrap();
        let mut seen = std::collections::HashSet::new();

        for block in catalog.items().flat_map(|item| item.blocks.iter()) {
            let html = render_block(block).to_html();
            let marker = match block {
                Block::Image { .. } => "roadmap-figure",
                Block::Text { .. } => "roadmap-text",
                Block::List { .. } => "roadmap-list",
                Block::Code { .. } => "roadmap-code-block",
                Block::Terms { .. } => "roadmap-terms-block",
                Block::Links { .. } => "roadmap-links-block",
            };
            assert!(html.contains(marker), "{} block lacks {marker}", block.kind());
            seen.insert(block.kind());
        }

        assert_eq!(seen.len(), 6);
    }
}
