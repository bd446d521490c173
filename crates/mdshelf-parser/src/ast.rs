//! AST types for parsed markdown documents.
//!
//! The tree is deliberately shallow: a document is a sequence of line
//! blocks, each holding inline nodes. Only the link variant carries a
//! destination the rewriter cares about; everything else exists so the
//! serializer can reproduce the source text exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An inline node within a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    /// Raw text, reproduced verbatim.
    Text(String),
    /// An inline link `[label](destination)`. The destination is mutable
    /// in place during rewriting.
    Link { label: String, destination: String },
    /// An image `![label](destination)`. Never rewritten.
    Image { label: String, destination: String },
}

/// A single source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// An ATX heading: 1–6 `#` markers followed by a space.
    Heading { level: u8, content: Vec<Inline> },
    /// Any other line.
    Line(Vec<Inline>),
}

/// A parsed markdown document.
///
/// Serializing via [`fmt::Display`] reconstructs the original text
/// byte-for-byte, except for link destinations that were rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownDoc {
    pub blocks: Vec<Block>,
    /// Whether the source ended with a newline.
    pub trailing_newline: bool,
}

impl fmt::Display for Inline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Link { label, destination } => write!(f, "[{label}]({destination})"),
            Self::Image { label, destination } => write!(f, "![{label}]({destination})"),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading { level, content } => {
                for _ in 0..*level {
                    f.write_str("#")?;
                }
                f.write_str(" ")?;
                for inline in content {
                    write!(f, "{inline}")?;
                }
                Ok(())
            }
            Self::Line(content) => {
                for inline in content {
                    write!(f, "{inline}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for MarkdownDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{block}")?;
        }
        if self.trailing_newline {
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ast_serde_roundtrip() {
        let doc = MarkdownDoc {
            blocks: vec![
                Block::Heading {
                    level: 2,
                    content: vec![Inline::Text("Title".to_string())],
                },
                Block::Line(vec![
                    Inline::Text("see ".to_string()),
                    Inline::Link {
                        label: "here".to_string(),
                        destination: "api_auth.md".to_string(),
                    },
                ]),
            ],
            trailing_newline: true,
        };

        let json = serde_json::to_string(&doc).expect("serialize");
        let back: MarkdownDoc = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(doc, back);
    }

    #[test]
    fn display_reconstructs_markdown_syntax() {
        let block = Block::Line(vec![
            Inline::Link {
                label: "a".to_string(),
                destination: "b.md".to_string(),
            },
            Inline::Text(" and ".to_string()),
            Inline::Image {
                label: "logo".to_string(),
                destination: "logo.png".to_string(),
            },
        ]);
        assert_eq!(block.to_string(), "[a](b.md) and ![logo](logo.png)");
    }
}
