mod block;
mod config;
mod error;
mod html;
pub mod inline;
mod parser;
mod text;

pub use block::{Block, HeadingRank, List, ListItem, Span};
pub use config::{Config, Format, HtmlConfig, OutputConfig};
pub use error::{Error, Result};
pub use html::blocks_to_html;
pub use text::blocks_to_text;

/// Parse markdown text into a vector of blocks. Absent and empty input give no blocks.
pub fn parse<'a>(markdown: impl Into<Option<&'a str>>) -> Vec<Block> {
    parser::parse(markdown.into())
}

/// Convert markdown to HTML using default config.
pub fn markdown_to_html<'a>(markdown: impl Into<Option<&'a str>>) -> String {
    markdown_to_html_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to HTML with custom config.
pub fn markdown_to_html_with_config<'a>(
    markdown: impl Into<Option<&'a str>>,
    config: &Config,
) -> String {
    let blocks = parse(markdown);
    html::blocks_to_html(&blocks, &config.html)
}

/// Convert markdown to plain text.
pub fn markdown_to_text<'a>(markdown: impl Into<Option<&'a str>>) -> String {
    text::blocks_to_text(&parse(markdown))
}

/// Convert markdown to the JSON form of its block tree.
pub fn markdown_to_json<'a>(markdown: impl Into<Option<&'a str>>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&parse(markdown))?)
}
