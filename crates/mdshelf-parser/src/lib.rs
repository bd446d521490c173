//! # mdshelf-parser
//!
//! Markdown parser for the mdshelf link rewriter.
//!
//! Parses a document into a shallow tree of tagged nodes — headings,
//! raw text, inline links, images — built for one job: finding link
//! destinations, mutating them in place, and serializing the tree back
//! out byte-for-byte. Inline syntax is recognized by a pest PEG grammar
//! (`src/markdown.pest`); line structure is handled here so CRLF endings
//! and trailing-newline presence survive the round trip.

pub mod ast;
pub mod visitor;

use pest::iterators::Pair;
use pest::Parser;
use thiserror::Error;

pub use ast::{Block, Inline, MarkdownDoc};
pub use visitor::Visitor;

#[derive(pest_derive::Parser)]
#[grammar = "markdown.pest"]
struct MarkdownParser;

/// Markdown parse failure.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("markdown syntax error: {0}")]
    Syntax(Box<pest::error::Error<Rule>>),
}

impl From<pest::error::Error<Rule>> for ParseError {
    fn from(err: pest::error::Error<Rule>) -> Self {
        Self::Syntax(Box::new(err))
    }
}

/// Parse markdown content into a [`MarkdownDoc`].
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] if the inline grammar rejects a line.
/// The grammar's `text` rule is a catch-all, so in practice any content
/// parses.
pub fn parse(content: &str) -> Result<MarkdownDoc, ParseError> {
    let trailing_newline = content.ends_with('\n');
    let body = if trailing_newline {
        &content[..content.len() - 1]
    } else {
        content
    };

    let mut blocks = Vec::new();
    for line in body.split('\n') {
        blocks.push(parse_line(line)?);
    }

    Ok(MarkdownDoc {
        blocks,
        trailing_newline,
    })
}

fn parse_line(line: &str) -> Result<Block, ParseError> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if (1..=6).contains(&hashes) && line.as_bytes().get(hashes) == Some(&b' ') {
        return Ok(Block::Heading {
            level: hashes as u8,
            content: parse_inline(&line[hashes + 1..])?,
        });
    }
    Ok(Block::Line(parse_inline(line)?))
}

fn parse_inline(input: &str) -> Result<Vec<Inline>, ParseError> {
    let mut out = Vec::new();
    for pair in MarkdownParser::parse(Rule::document, input)? {
        if pair.as_rule() != Rule::document {
            continue;
        }
        for node in pair.into_inner() {
            match node.as_rule() {
                Rule::text => out.push(Inline::Text(node.as_str().to_string())),
                Rule::link => out.push(reference_node(node, false)),
                Rule::image => out.push(reference_node(node, true)),
                _ => {} // EOI
            }
        }
    }
    Ok(out)
}

fn reference_node(pair: Pair<Rule>, image: bool) -> Inline {
    let mut label = String::new();
    let mut destination = String::new();
    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::label => label = part.as_str().to_string(),
            Rule::destination => destination = part.as_str().to_string(),
            _ => {}
        }
    }
    if image {
        Inline::Image { label, destination }
    } else {
        Inline::Link { label, destination }
    }
}
