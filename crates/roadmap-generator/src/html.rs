//! Static HTML rendering.
//!
//! [`render_block`] is the string counterpart of the Leptos dispatcher in
//! `roadmap-ui`: one routine per block variant, no fallback arm.
//! [`HtmlGenerator`] composes the rendered groups into a full page.

use chrono::Utc;
use roadmap_core::{
    AssetResolver, Block, Catalog, CodeSample, Config, Item, Resource, TermDef,
};
use roadmap_search::{GroupMatch, filter};
use thiserror::Error;
use tracing::debug;

use crate::template::{STYLESHEET, TemplateContext, TemplateError, TemplateRegistry};

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// Escape text for use in element content and quoted attributes.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render one block.
pub fn render_block(block: &Block, assets: &AssetResolver) -> String {
    match block {
        Block::Image { key, caption } => image_html(key, caption.as_deref(), assets),
        Block::Text { heading, body } => text_html(heading.as_deref(), body),
        Block::List { heading, items } => list_html(heading.as_deref(), items),
        Block::Code { heading, code } => code_html(heading.as_deref(), code),
        Block::Terms { heading, terms } => terms_html(heading.as_deref(), terms),
        Block::Links { heading, links } => links_html(heading.as_deref(), links),
    }
}

fn heading_html(heading: Option<&str>) -> String {
    heading
        .map(|h| format!("<h4>{}</h4>", html_escape(h)))
        .unwrap_or_default()
}

fn image_html(key: &str, caption: Option<&str>, assets: &AssetResolver) -> String {
    // The alt text is the fallback label when the image cannot load.
    let alt = caption.unwrap_or(key);
    format!(
        r#"<figure class="roadmap-figure"><img src="{src}" alt="{alt}" loading="lazy"><figcaption><span>{caption}</span><span class="roadmap-badge">{key}</span></figcaption></figure>"#,
        src = html_escape(&assets.resolve(key)),
        alt = html_escape(alt),
        caption = html_escape(caption.unwrap_or_default()),
        key = html_escape(key),
    )
}

fn text_html(heading: Option<&str>, body: &str) -> String {
    format!("{}<p>{}</p>", heading_html(heading), html_escape(body))
}

fn list_html(heading: Option<&str>, items: &[String]) -> String {
    let items_html: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", html_escape(item)))
        .collect();
    format!("{}<ul>{items_html}</ul>", heading_html(heading))
}

fn code_html(heading: Option<&str>, code: &CodeSample) -> String {
    format!(
        r#"{}<div class="roadmap-code"><div class="roadmap-code-label">{}</div><pre><code>{}</code></pre></div>"#,
        heading_html(heading),
        code.lang.label(),
        html_escape(&code.source()),
    )
}

fn terms_html(heading: Option<&str>, terms: &[TermDef]) -> String {
    let terms_html: String = terms
        .iter()
        .map(|def| {
            format!(
                r#"<div class="roadmap-term"><dt>{}</dt><dd>{}</dd></div>"#,
                html_escape(&def.term),
                html_escape(&def.definition)
            )
        })
        .collect();
    format!(
        r#"{}<dl class="roadmap-terms">{terms_html}</dl>"#,
        heading_html(heading)
    )
}

fn links_html(heading: Option<&str>, links: &[Resource]) -> String {
    let links_html: String = links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" target="_blank" rel="noreferrer">🔗 {}</a>"#,
                html_escape(&link.url),
                html_escape(&link.label)
            )
        })
        .collect();
    format!(
        r#"{}<div class="roadmap-links">{links_html}</div>"#,
        heading_html(heading)
    )
}

/// Render an item card. Cards start open; `<details>` lets readers collapse them.
pub fn item_html(item: &Item, assets: &AssetResolver) -> String {
    let blocks_html: String = item
        .blocks
        .iter()
        .enumerate()
        .map(|(i, block)| {
            let class = if i % 2 == 1 {
                "roadmap-block roadmap-block-alt"
            } else {
                "roadmap-block"
            };
            format!(
                r#"<div class="{class} roadmap-block-{}">{}</div>"#,
                block.kind(),
                render_block(block, assets)
            )
        })
        .collect();

    format!(
        r#"<section class="roadmap-card"><details open><summary><h3 id="{slug}">{title}</h3><p class="roadmap-card-summary">{summary}</p></summary>{blocks_html}</details></section>"#,
        slug = html_escape(&item.slug),
        title = html_escape(&item.title),
        summary = html_escape(&item.summary),
    )
}

/// Render a filtered group with its surviving items.
pub fn group_html(group: &GroupMatch<'_>, assets: &AssetResolver) -> String {
    let items_html: String = group
        .items
        .iter()
        .map(|item| item_html(item, assets))
        .collect();

    format!(
        r#"<section class="roadmap-group" id="group-{id}"><h2>{title}</h2><div class="roadmap-group-items">{items_html}</div></section>"#,
        id = html_escape(&group.group.id),
        title = html_escape(&group.group.title),
    )
}

/// Table of contents over the whole catalog, independent of any filter.
pub fn toc_html(catalog: &Catalog) -> String {
    let groups_html: String = catalog
        .groups()
        .iter()
        .map(|group| {
            let items_html: String = group
                .items
                .iter()
                .map(|item| {
                    format!(
                        "<li><a href=\"#{}\">• {}</a></li>",
                        html_escape(&item.slug),
                        html_escape(&item.title)
                    )
                })
                .collect();
            format!(
                r#"<li><div class="roadmap-toc-group">{}</div><ul>{items_html}</ul></li>"#,
                html_escape(&group.title)
            )
        })
        .collect();

    format!(
        r#"<aside class="roadmap-toc" aria-label="Table of contents"><div class="roadmap-toc-title">Contents</div><ul>{groups_html}</ul></aside>"#
    )
}

/// HTML page generator.
#[derive(Debug)]
pub struct HtmlGenerator {
    templates: TemplateRegistry,
    config: Config,
}

impl HtmlGenerator {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            config,
        }
    }

    /// Generate the full guide page, filtered by `query`.
    pub fn generate_page(&self, catalog: &Catalog, query: &str) -> Result<String> {
        let visible = filter(catalog.groups(), query);
        debug!(query, groups = visible.len(), "generating guide page");

        let assets = &self.config.assets;
        let groups_html = if visible.is_empty() && !query.is_empty() {
            format!(
                r#"<p class="roadmap-empty">No topics match “{}”.</p>"#,
                html_escape(query)
            )
        } else {
            visible.iter().map(|g| group_html(g, assets)).collect()
        };

        let mut guide_ctx = TemplateContext::new()
            .with_var("site_title", html_escape(&self.config.site.title))
            .with_var("toc", toc_html(catalog))
            .with_var("groups", groups_html)
            .with_var("generated", Utc::now().format("%Y-%m-%d").to_string());

        if !query.is_empty() {
            guide_ctx.insert(
                "query_note",
                format!(
                    r#"<p class="roadmap-query">Filtered by “{}”</p>"#,
                    html_escape(query)
                ),
            );
        }

        if let Some(tip) = &self.config.site.footer_tip {
            guide_ctx.insert("footer_tip", format!("<p>Tip: {}</p>", html_escape(tip)));
        }

        let inner_html = self.templates.render("guide", &guide_ctx)?;

        let mut base_ctx = TemplateContext::new()
            .with_var("title", html_escape(&self.config.site.title))
            .with_var("stylesheet", STYLESHEET)
            .with_var("content", inner_html);

        if let Some(desc) = &self.config.site.description {
            base_ctx.insert("description", html_escape(desc));
        }

        Ok(self.templates.render("base", &base_ctx)?)
    }
}
