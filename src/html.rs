use tracing::debug;

use crate::block::{Block, List, Span};
use crate::config::HtmlConfig;

/// Convert blocks to an HTML fragment
pub fn blocks_to_html(blocks: &[Block], config: &HtmlConfig) -> String {
    if blocks.is_empty() {
        return String::new();
    }

    let p = config.class_prefix.as_str();
    let mut out = String::new();

    if config.wrap {
        out.push_str("<div class=\"");
        escape_into(&config.wrapper_class, &mut out);
        out.push_str("\">\n");
    }

    for block in blocks {
        emit_block(block, p, &mut out);
    }

    if config.wrap {
        out.push_str("</div>\n");
    }

    debug!(blocks = blocks.len(), bytes = out.len(), "rendered html");
    out
}

fn emit_block(block: &Block, p: &str, out: &mut String) {
    match block {
        Block::Heading {
            level,
            rank,
            content,
        } => {
            let tag = rank.tag();
            out.push_str(&format!("<{tag} class=\"{p}heading {p}h{level}\">"));
            spans_to_html(content, p, out);
            out.push_str(&format!("</{tag}>\n"));
        }
        Block::Paragraph { content } => {
            out.push_str(&format!("<p class=\"{p}paragraph\">"));
            spans_to_html(content, p, out);
            out.push_str("</p>\n");
        }
        Block::List(list) => list_to_html(list, p, out),
    }
}

fn list_to_html(list: &List, p: &str, out: &mut String) {
    out.push_str(&format!("<ul class=\"{p}list\">\n"));
    for item in &list.items {
        out.push_str(&format!("<li class=\"{p}list-item\">"));
        spans_to_html(&item.content, p, out);
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
}

fn spans_to_html(spans: &[Span], p: &str, out: &mut String) {
    for span in spans {
        let (tag, class) = match span {
            Span::Text(text) => {
                escape_into(text, out);
                continue;
            }
            Span::Bold(_) => ("strong", "bold"),
            Span::Italic(_) => ("em", "italic"),
            Span::Code(_) => ("code", "code"),
        };
        out.push_str(&format!("<{tag} class=\"{p}{class}\">"));
        escape_into(span.text(), out);
        out.push_str(&format!("</{tag}>"));
    }
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
