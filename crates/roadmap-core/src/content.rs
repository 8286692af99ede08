//! Content types: the `Group` → `Item` → `Block` hierarchy.

use serde::{Deserialize, Serialize};

/// Source format of a code sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLang {
    /// Shell sessions and scripts.
    Bash,
    /// YAML documents (Compose files, manifests).
    Yaml,
    /// Dockerfile instructions.
    Dockerfile,
    /// JSON documents.
    Json,
    /// Plain text.
    Text,
}

impl CodeLang {
    /// The declared tag as written in the content file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bash => "bash",
            Self::Yaml => "yaml",
            Self::Dockerfile => "dockerfile",
            Self::Json => "json",
            Self::Text => "text",
        }
    }

    /// Visible label for a rendered code block (the tag, uppercased).
    pub fn label(&self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

/// A code sample: format tag plus verbatim source lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    pub lang: CodeLang,
    pub lines: Vec<String>,
}

impl CodeSample {
    /// Source lines joined with newlines, as presented in a code block.
    pub fn source(&self) -> String {
        self.lines.join("\n")
    }
}

/// A glossary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermDef {
    pub term: String,
    pub definition: String,
}

/// An outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub label: String,
    pub url: String,
}

/// One displayable unit of content.
///
/// The set of variants is closed. Consumers match on it without a wildcard
/// arm so a new variant fails to compile until every renderer handles it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    /// Illustrative image referenced by asset key.
    Image {
        key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    /// Prose paragraph.
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        body: String,
    },
    /// Bullet list.
    List {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        items: Vec<String>,
    },
    /// Labeled monospace code sample.
    Code {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        code: CodeSample,
    },
    /// Term/definition glossary.
    Terms {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        terms: Vec<TermDef>,
    },
    /// Set of outbound links.
    Links {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        links: Vec<Resource>,
    },
}

impl Block {
    /// Discriminant name, as used for the `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Image { .. } => "image",
            Self::Text { .. } => "text",
            Self::List { .. } => "list",
            Self::Code { .. } => "code",
            Self::Terms { .. } => "terms",
            Self::Links { .. } => "links",
        }
    }
}

/// One topic card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier.
    pub id: String,

    /// URL-safe anchor, unique across the catalog.
    pub slug: String,

    pub title: String,

    /// One-paragraph summary shown under the title.
    pub summary: String,

    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A thematic section of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<Item>,
}
