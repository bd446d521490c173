//! Generic visitor over the markdown node tree.

use crate::ast::{Block, Inline, MarkdownDoc};

/// Walks every node of a [`MarkdownDoc`]. All methods default to no-ops,
/// so implementors pick out the variants they care about — the link
/// rewriter, for instance, only overrides [`Visitor::visit_link`].
pub trait Visitor {
    fn visit_heading(&mut self, _level: u8) {}

    fn visit_text(&mut self, _text: &mut String) {}

    fn visit_link(&mut self, _label: &mut String, _destination: &mut String) {}

    fn visit_image(&mut self, _label: &mut String, _destination: &mut String) {}
}

impl MarkdownDoc {
    /// Walk every node in document order, letting the visitor mutate
    /// inline content in place.
    pub fn walk<V: Visitor>(&mut self, visitor: &mut V) {
        for block in &mut self.blocks {
            match block {
                Block::Heading { level, content } => {
                    visitor.visit_heading(*level);
                    for inline in content {
                        walk_inline(inline, visitor);
                    }
                }
                Block::Line(content) => {
                    for inline in content {
                        walk_inline(inline, visitor);
                    }
                }
            }
        }
    }
}

fn walk_inline<V: Visitor>(inline: &mut Inline, visitor: &mut V) {
    match inline {
        Inline::Text(text) => visitor.visit_text(text),
        Inline::Link { label, destination } => visitor.visit_link(label, destination),
        Inline::Image { label, destination } => visitor.visit_image(label, destination),
    }
}
