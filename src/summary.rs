/// First-sentence summary extraction from docstring lines.
use std::sync::LazyLock;

use regex::Regex;

use crate::markup::MarkupParser;

/// Sentence boundary: a period followed by whitespace.
static PERIODS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s+").expect("valid regex"));
/// Literal-block marker left dangling at the end of a summary.
static LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"::\s*$").expect("valid regex"));

/// Extract a one-sentence summary from docstring `lines`.
///
/// Only the opening paragraph is eligible: leading blank lines are dropped
/// and everything from the first paragraph break onward is discarded. When
/// the opening text is not prose (a heading, list, or code block), the
/// first line is returned verbatim — sentence splitting is unsafe there.
/// Otherwise the summary grows sentence by sentence until it parses without
/// markup diagnostics, so a period inside inline markup never produces a
/// truncated, broken summary. A trailing `::` is normalized to a period.
pub fn extract_summary(lines: &[String], parser: &dyn MarkupParser) -> String {
    let mut doc: &[String] = lines;

    // Drop leading blank lines.
    while let [first, rest @ ..] = doc {
        if !first.trim().is_empty() {
            break;
        }
        doc = rest;
    }

    // The first blank line ends the opening paragraph; nothing after it is
    // eligible for the summary.
    if let Some(end) = doc.iter().position(|line| line.trim().is_empty()) {
        doc = &doc[..end];
    }

    if doc.is_empty() {
        return String::new();
    }

    let mut summary = if parser.assess(&doc.join("\n")).is_paragraph {
        first_markup_safe_sentence(&doc.join(" "), parser)
    } else {
        // Document starts with non-paragraph content: pick up the first line.
        doc[0].trim().to_string()
    };

    // Strip the literal notation mark `::` from the tail of the summary.
    summary = LITERAL_RE.replace(&summary, ".").into_owned();
    summary
}

/// Split `text` at period boundaries and accumulate sentences until the
/// result parses cleanly.
///
/// A period inside inline markup (an abbreviation in a code span, say)
/// makes the naive first split invalid markup; absorbing the next sentence
/// repairs it. If no boundary ever becomes clean the full accumulation is
/// returned.
fn first_markup_safe_sentence(text: &str, parser: &dyn MarkupParser) -> String {
    let sentences: Vec<&str> = PERIODS_RE.split(text).collect();
    if sentences.len() == 1 {
        return sentences[0].trim().to_string();
    }

    let mut summary = String::new();
    for sentence in sentences {
        summary.push_str(sentence);
        summary.push('.');
        if !parser.assess(&summary).has_diagnostics {
            break;
        }
    }
    summary
}
