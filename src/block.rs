use serde::Serialize;

/// Inline text fragments. Markers are already stripped from the contained text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
}

impl Span {
    /// The fragment's text without its markdown markers.
    pub fn text(&self) -> &str {
        match self {
            Span::Text(t) | Span::Bold(t) | Span::Italic(t) | Span::Code(t) => t,
        }
    }
}

/// Display rank of a heading. Deeper `#` runs clamp to `H6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingRank {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingRank {
    const ALL: [HeadingRank; 6] = [
        HeadingRank::H1,
        HeadingRank::H2,
        HeadingRank::H3,
        HeadingRank::H4,
        HeadingRank::H5,
        HeadingRank::H6,
    ];

    pub fn from_level(level: usize) -> Self {
        Self::ALL[level.clamp(1, 6) - 1]
    }

    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn tag(self) -> &'static str {
        match self {
            HeadingRank::H1 => "h1",
            HeadingRank::H2 => "h2",
            HeadingRank::H3 => "h3",
            HeadingRank::H4 => "h4",
            HeadingRank::H5 => "h5",
            HeadingRank::H6 => "h6",
        }
    }
}

/// A single bullet line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub content: Vec<Span>,
}

/// A maximal run of adjacent list items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub items: Vec<ListItem>,
}

/// Block-level elements, in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading {
        /// Number of leading `#` characters as written.
        level: usize,
        rank: HeadingRank,
        content: Vec<Span>,
    },
    Paragraph {
        content: Vec<Span>,
    },
    List(List),
}

impl Block {
    /// Text of the block with formatting markers removed. List items are joined by newlines.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { content, .. } | Block::Paragraph { content } => {
                spans_text(content)
            }
            Block::List(list) => list
                .items
                .iter()
                .map(|item| spans_text(&item.content))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

pub(crate) fn spans_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}
