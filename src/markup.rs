/// Markup assessment seam for summary extraction.
///
/// The summary extractor only needs two facts about a piece of docstring
/// text: does it open with an ordinary prose paragraph, and does parsing it
/// produce diagnostics (a signal that a sentence split landed inside inline
/// markup). Both are answered through [`MarkupParser`] so the extractor
/// stays independent of any concrete markup engine.
use tree_sitter::{Language, Node, Parser, Tree};

/// Verdict of parsing a candidate summary as markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupAssessment {
    /// The text opens with a plain paragraph (not a heading, list, code
    /// block, or other structural construct).
    pub is_paragraph: bool,
    /// Parsing produced error or missing nodes, or inline markup was left
    /// unclosed — splitting here would break the markup.
    pub has_diagnostics: bool,
}

/// Parses docstring text and reports paragraph-ness and diagnostics.
pub trait MarkupParser {
    /// Assess `text` as a standalone block of markup.
    fn assess(&self, text: &str) -> MarkupAssessment;
}

/// Markdown-backed [`MarkupParser`] using the tree-sitter block and inline
/// grammars.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownAssessor;

impl MarkdownAssessor {
    /// Build an assessor.
    pub fn new() -> Self {
        MarkdownAssessor
    }
}

impl MarkupParser for MarkdownAssessor {
    fn assess(&self, text: &str) -> MarkupAssessment {
        let Some(block_tree) = parse_with(text, &tree_sitter_md::LANGUAGE.into()) else {
            return MarkupAssessment {
                is_paragraph: false,
                has_diagnostics: true,
            };
        };

        let inline_error = parse_with(text, &tree_sitter_md::INLINE_LANGUAGE.into())
            .is_none_or(|tree| tree.root_node().has_error());

        MarkupAssessment {
            is_paragraph: opens_with_paragraph(block_tree.root_node()),
            has_diagnostics: block_tree.root_node().has_error()
                || inline_error
                || has_unclosed_code_span(text),
        }
    }
}

/// Parse `text` with the given grammar. `None` if the grammar cannot be
/// set or parsing bails out.
fn parse_with(text: &str, language: &Language) -> Option<Tree> {
    let mut parser = Parser::new();
    parser.set_language(language).ok()?;
    parser.parse(text, None)
}

/// Walk past `section` wrappers and report whether the first content node
/// is a paragraph.
fn opens_with_paragraph(root: Node<'_>) -> bool {
    let mut node = root;
    loop {
        let mut cursor = node.walk();
        let Some(child) = node.named_children(&mut cursor).next() else {
            return false;
        };
        if child.kind() == "section" {
            node = child;
            continue;
        }
        return child.kind() == "paragraph";
    }
}

/// An odd number of backticks means a sentence split landed inside an
/// inline code span.
fn has_unclosed_code_span(text: &str) -> bool {
    text.bytes().filter(|b| *b == b'`').count() % 2 == 1
}
