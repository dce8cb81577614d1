use crate::block::{Block, spans_text};

/// Render blocks as plain text with all formatting markers removed.
pub fn blocks_to_text(blocks: &[Block]) -> String {
    let mut parts = Vec::with_capacity(blocks.len());

    for block in blocks {
        match block {
            Block::List(list) => {
                let lines: Vec<String> = list
                    .items
                    .iter()
                    .map(|item| format!("- {}", spans_text(&item.content)))
                    .collect();
                parts.push(lines.join("\n"));
            }
            _ => parts.push(block.plain_text()),
        }
    }

    let mut out = parts.join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
