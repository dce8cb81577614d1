use tracing::debug;

use crate::block::{Block, HeadingRank, List, ListItem};
use crate::inline;

/// Line-level output before list items are grouped
#[derive(Debug)]
enum LineBlock {
    Block(Block),
    Item(ListItem),
}

/// Parse markdown text into a list of blocks
pub fn parse(markdown: Option<&str>) -> Vec<Block> {
    let Some(markdown) = markdown.filter(|m| !m.is_empty()) else {
        return Vec::new();
    };

    let mut line_blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut line_count = 0;

    for line in markdown.lines() {
        line_count += 1;
        let trimmed = line.trim();

        if let Some(block) = heading(trimmed) {
            flush_paragraph(&mut paragraph, &mut line_blocks);
            line_blocks.push(LineBlock::Block(block));
        } else if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            flush_paragraph(&mut paragraph, &mut line_blocks);
            line_blocks.push(LineBlock::Item(ListItem {
                content: inline::spans(rest),
            }));
        } else if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut line_blocks);
        } else {
            paragraph.push(line);
        }
    }
    flush_paragraph(&mut paragraph, &mut line_blocks);

    let blocks = group_lists(line_blocks);
    debug!(lines = line_count, blocks = blocks.len(), "parsed markdown");
    blocks
}

/// A `#` run counts as a heading marker only when whitespace follows it somewhere on the line.
fn heading(trimmed: &str) -> Option<Block> {
    let text = trimmed.trim_start_matches('#');
    // `#` is one byte, so the byte difference is the marker count
    let level = trimmed.len() - text.len();
    if level == 0 || !text.contains(char::is_whitespace) {
        return None;
    }
    Some(Block::Heading {
        level,
        rank: HeadingRank::from_level(level),
        content: inline::spans(text.trim_start()),
    })
}

fn flush_paragraph(paragraph: &mut Vec<&str>, out: &mut Vec<LineBlock>) {
    if paragraph.is_empty() {
        return;
    }
    let joined = paragraph.join(" ");
    paragraph.clear();
    out.push(LineBlock::Block(Block::Paragraph {
        content: inline::spans(&joined),
    }));
}

/// Collapse each run of adjacent list items into one list block.
fn group_lists(line_blocks: Vec<LineBlock>) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(line_blocks.len());
    let mut items = Vec::new();

    for line_block in line_blocks {
        match line_block {
            LineBlock::Item(item) => items.push(item),
            LineBlock::Block(block) => {
                if !items.is_empty() {
                    blocks.push(Block::List(List {
                        items: std::mem::take(&mut items),
                    }));
                }
                blocks.push(block);
            }
        }
    }

    if !items.is_empty() {
        blocks.push(Block::List(List { items }));
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Span;

    fn text(s: &str) -> Vec<Span> {
        vec![Span::Text(s.to_string())]
    }

    fn item(s: &str) -> ListItem {
        ListItem { content: text(s) }
    }

    #[test]
    fn empty_and_absent() {
        assert!(parse(None).is_empty());
        assert!(parse(Some("")).is_empty());
        assert!(parse(Some("\n\n  \n")).is_empty());
    }

    #[test]
    fn heading_rank_one() {
        assert_eq!(
            parse(Some("# Hello **there**")),
            vec![Block::Heading {
                level: 1,
                rank: HeadingRank::H1,
                content: vec![Span::Text("Hello ".into()), Span::Bold("there".into())],
            }]
        );
    }

    #[test]
    fn heading_clamps_to_rank_six() {
        let blocks = parse(Some("####### x"));
        assert_eq!(
            blocks,
            vec![Block::Heading {
                level: 7,
                rank: HeadingRank::H6,
                content: text("x"),
            }]
        );
    }

    #[test]
    fn indented_heading_strips_whitespace() {
        assert_eq!(
            parse(Some("   ##   Title  ")),
            vec![Block::Heading {
                level: 2,
                rank: HeadingRank::H2,
                content: text("Title"),
            }]
        );
    }

    #[test]
    fn hash_without_whitespace_is_text() {
        assert_eq!(
            parse(Some("#tag")),
            vec![Block::Paragraph {
                content: text("#tag"),
            }]
        );
        assert_eq!(
            parse(Some("###\n#")),
            vec![Block::Paragraph {
                content: text("### #"),
            }]
        );
    }

    #[test]
    fn hash_run_followed_later_by_space() {
        assert_eq!(
            parse(Some("#foo bar")),
            vec![Block::Heading {
                level: 1,
                rank: HeadingRank::H1,
                content: text("foo bar"),
            }]
        );
    }

    #[test]
    fn list_grouping() {
        assert_eq!(
            parse(Some("- a\n- b\n\ntext")),
            vec![
                Block::List(List {
                    items: vec![item("a"), item("b")],
                }),
                Block::Paragraph {
                    content: text("text"),
                },
            ]
        );
    }

    #[test]
    fn star_and_dash_markers_share_a_list() {
        assert_eq!(
            parse(Some("* one\n  - two")),
            vec![Block::List(List {
                items: vec![item("one"), item("two")],
            })]
        );
    }

    #[test]
    fn blank_line_between_items_keeps_one_list() {
        assert_eq!(
            parse(Some("- a\n\n- b")),
            vec![Block::List(List {
                items: vec![item("a"), item("b")],
            })]
        );
    }

    #[test]
    fn heading_between_items_splits_lists() {
        let blocks = parse(Some("- a\n# H\n- b"));
        assert!(matches!(blocks[0], Block::List(_)));
        assert!(matches!(blocks[1], Block::Heading { .. }));
        assert!(matches!(blocks[2], Block::List(_)));
    }

    #[test]
    fn multi_line_paragraph_join() {
        assert_eq!(
            parse(Some("line one\nline two")),
            vec![Block::Paragraph {
                content: text("line one line two"),
            }]
        );
    }

    #[test]
    fn paragraph_keeps_raw_lines() {
        assert_eq!(
            parse(Some("  indented\nnext  ")),
            vec![Block::Paragraph {
                content: text("  indented next  "),
            }]
        );
    }

    #[test]
    fn paragraph_flushed_before_heading() {
        assert_eq!(
            parse(Some("intro\n## Next")),
            vec![
                Block::Paragraph {
                    content: text("intro"),
                },
                Block::Heading {
                    level: 2,
                    rank: HeadingRank::H2,
                    content: text("Next"),
                },
            ]
        );
    }

    #[test]
    fn dash_without_space_is_text() {
        assert_eq!(
            parse(Some("-not a list")),
            vec![Block::Paragraph {
                content: text("-not a list"),
            }]
        );
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(
            parse(Some("- a\r\n- b\r\n")),
            vec![Block::List(List {
                items: vec![item("a"), item("b")],
            })]
        );
    }

    fn flat_text(markdown: &str) -> String {
        parse(Some(markdown))
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn only_consumed_markers_are_dropped() {
        let cases = [
            ("#tag", "#tag"),
            ("a_b_c", "abc"),
            ("**open", "**open"),
            ("`", "`"),
            ("__x_", "_x"),
            ("* item", "item"),
            ("- ", "- "),
            ("***x***", "*x*"),
            ("## done", "done"),
            ("héllo **wörld** 日本 _語_", "héllo wörld 日本 語"),
        ];
        for (source, expected) in cases {
            assert_eq!(flat_text(source), expected, "source: {source:?}");
        }
    }

    #[test]
    fn text_is_conserved_across_blocks() {
        let blocks = parse(Some("# **Big** title\nsome _soft_\ntext\n- `x` item"));
        let texts: Vec<String> = blocks.iter().map(Block::plain_text).collect();
        assert_eq!(texts, vec!["Big title", "some soft text", "x item"]);
    }
}
