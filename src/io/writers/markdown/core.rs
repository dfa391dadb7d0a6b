//! Markdown primitives
//!
//! Small pure constructors for headings, paragraphs, quotes, tables and
//! inline fragments. They know nothing about frameworks or components and
//! perform no escaping: callers hand in content that is already valid
//! markdown.

use crate::errors::{ReportError, Result};
use std::fmt;

/// A rendered block of markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block(String);

impl Block {
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Blank blocks are dropped by [`lines`].
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Input to [`lines`]: a single block, a group flattened one level, or
/// nothing at all.
#[derive(Debug, Clone)]
pub enum Node {
    Block(Block),
    Many(Vec<Block>),
    Empty,
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Node::Block(block)
    }
}

impl From<Vec<Block>> for Node {
    fn from(blocks: Vec<Block>) -> Self {
        Node::Many(blocks)
    }
}

impl From<Option<Block>> for Node {
    fn from(block: Option<Block>) -> Self {
        block.map_or(Node::Empty, Node::Block)
    }
}

/// `#` or `##` heading. Deeper levels are rejected.
pub fn heading(level: u8, text: &str) -> Result<Block> {
    match level {
        1 | 2 => Ok(Block(format!("{} {}", "#".repeat(level as usize), text))),
        _ => Err(ReportError::InvalidHeadingLevel { level }),
    }
}

pub fn paragraph(text: &str) -> Block {
    Block(text.to_string())
}

/// Authored markdown passed through verbatim.
pub fn raw(markdown: &str) -> Block {
    Block(markdown.trim_end().to_string())
}

/// Block quote; every line gets the `> ` prefix.
pub fn quote(text: &str) -> Block {
    if text.is_empty() {
        return Block::empty();
    }
    let quoted = text
        .lines()
        .map(|line| {
            if line.is_empty() {
                ">".to_string()
            } else {
                format!("> {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    Block(quoted)
}

pub fn link(text: &str, href: &str) -> String {
    format!("[{text}]({href})")
}

pub fn inline_code(text: &str) -> String {
    format!("`{text}`")
}

/// Pipe table. Every row must have exactly as many cells as `headers`.
pub fn table<H: AsRef<str>>(headers: &[H], rows: &[Vec<String>]) -> Result<Block> {
    let expected = headers.len();
    let mut output = vec![
        table_row(headers.iter().map(AsRef::as_ref)),
        table_row(headers.iter().map(|_| "---")),
    ];

    for (index, cells) in rows.iter().enumerate() {
        if cells.len() != expected {
            return Err(ReportError::RowLength {
                row: index,
                expected,
                actual: cells.len(),
            });
        }
        output.push(table_row(cells.iter().map(String::as_str)));
    }

    Ok(Block(output.join("\n")))
}

fn table_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let inner = cells.collect::<Vec<_>>().join(" | ");
    format!("| {inner} |")
}

/// Bullet list of `**name**: criterion` pairs.
pub fn criteria<N, T>(pairs: &[(N, T)]) -> Block
where
    N: AsRef<str>,
    T: AsRef<str>,
{
    let bullets = pairs
        .iter()
        .map(|(name, text)| format!("- **{}**: {}", name.as_ref(), text.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");
    Block(bullets)
}

/// Join blocks with one blank line, dropping empty ones.
pub fn lines<I>(nodes: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    nodes
        .into_iter()
        .flat_map(|node| match node.into() {
            Node::Block(block) => vec![block],
            Node::Many(blocks) => blocks,
            Node::Empty => vec![],
        })
        .filter(|block| !block.is_empty())
        .map(Block::into_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// [`lines`] wrapped back into a single block, for nesting sections.
pub fn section<I>(nodes: I) -> Block
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    Block(lines(nodes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading(1, "Title").unwrap().as_str(), "# Title");
        assert_eq!(heading(2, "Alert").unwrap().as_str(), "## Alert");
    }

    #[test]
    fn test_heading_rejects_unsupported_levels() {
        assert!(matches!(
            heading(3, "Deep"),
            Err(ReportError::InvalidHeadingLevel { level: 3 })
        ));
        assert!(heading(0, "None").is_err());
    }

    #[test]
    fn test_quote_prefixes_every_line() {
        assert_eq!(quote("one\n\ntwo").as_str(), "> one\n>\n> two");
        assert!(quote("").is_empty());
    }

    #[test]
    fn test_inline_fragments() {
        assert_eq!(link("Acme", "https://acme.dev"), "[Acme](https://acme.dev)");
        assert_eq!(link("Top", "#top"), "[Top](#top)");
        assert_eq!(inline_code("variant"), "`variant`");
    }

    #[test]
    fn test_table_renders_header_separator_and_rows() {
        let block = table(
            &["Framework", "Dismissible"],
            &[row(&["Acme", "✅"]), row(&["Beta", "❌"])],
        )
        .unwrap();

        let expected = indoc! {"
            | Framework | Dismissible |
            | --- | --- |
            | Acme | ✅ |
            | Beta | ❌ |"};
        assert_eq!(block.as_str(), expected);
    }

    #[test]
    fn test_table_passes_special_characters_through() {
        let block = table(&["H"], &[row(&["a|b"])]).unwrap();
        assert!(block.as_str().ends_with("| a|b |"));
    }

    #[test]
    fn test_table_rejects_mismatched_row() {
        let rows = [row(&["Acme", "✅"]), row(&["Beta"])];
        let err = table(&["Framework", "Dismissible"], &rows).unwrap_err();
        assert!(matches!(
            err,
            ReportError::RowLength {
                row: 1,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_criteria_bullets() {
        let block = criteria(&[("Dismissible", "Can be closed"), ("Variants", "Count")]);
        assert_eq!(
            block.as_str(),
            "- **Dismissible**: Can be closed\n- **Variants**: Count"
        );
    }

    #[test]
    fn test_lines_flattens_and_drops_empty_blocks() {
        let output = lines(vec![
            Node::from(paragraph("first")),
            Node::Empty,
            Node::from(vec![paragraph("second"), Block::empty(), paragraph("third")]),
            Node::from(None::<Block>),
            Node::from(paragraph("   ")),
        ]);
        assert_eq!(output, "first\n\nsecond\n\nthird");
    }
}
