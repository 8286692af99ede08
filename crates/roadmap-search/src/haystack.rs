//! Searchable text extraction for blocks.

use roadmap_core::Block;

/// All human-readable text of a block, joined with single spaces.
///
/// Links blocks are not searched.
pub fn haystack(block: &Block) -> String {
    let mut parts: Vec<&str> = Vec::new();

    match block {
        Block::Text { heading, body } => {
            parts.extend(heading.as_deref());
            parts.push(body);
        }
        Block::List { heading, items } => {
            parts.extend(heading.as_deref());
            parts.extend(items.iter().map(String::as_str));
        }
        Block::Terms { heading, terms } => {
            parts.extend(heading.as_deref());
            for def in terms {
                parts.push(&def.term);
                parts.push(&def.definition);
            }
        }
        Block::Code { heading, code } => {
            parts.extend(heading.as_deref());
            parts.extend(code.lines.iter().map(String::as_str));
        }
        Block::Image { key, caption } => {
            parts.extend(caption.as_deref());
            parts.push(key);
        }
        Block::Links { .. } => {}
    }

    parts.join(" ")
}
