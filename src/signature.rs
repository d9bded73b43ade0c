/// Call-signature compaction for summary-table display.
///
/// The compactor is a pure text pipeline: it never fails, and degrades
/// gracefully on malformed input (unbalanced brackets simply stop matching
/// and pass through).
use std::sync::LazyLock;

use regex::Regex;

use crate::join::join_bounded;

/// Marker appended when an argument list is cut to fit its budget.
const OVERFLOW_MARKER: &str = "...";

/// Trailing return-type annotation: `) -> T` to end of string.
static RETURN_ANNOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\)\s*->\s.*$").expect("valid regex"));
/// One enclosing layer of parentheses around the whole signature.
static ENCLOSING_PARENS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((.*)\)$").expect("valid regex"));
/// String literal with single quotes.
static SINGLE_QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'[^']*'").expect("valid regex"));
/// String literal with double quotes.
static DOUBLE_QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]*""#).expect("valid regex"));
/// Contents of a parenthesized sub-expression, one nesting level at a time.
static PAREN_CONTENTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid regex"));
/// Contents of an angle-bracketed sub-expression.
static ANGLE_CONTENTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
/// Contents of a curly-braced sub-expression.
static BRACE_CONTENTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}").expect("valid regex"));
/// Rightmost keyword argument: `<anything>, name = ` (or `name = ` at the
/// very start).
static KEYWORD_ARG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*, )?([a-zA-Z0-9_*]+)\s*=\s*").expect("valid regex"));

/// Strip a `: type` annotation from a single argument.
fn strip_arg_annotation(arg: &str) -> &str {
    arg.split_once(':').map_or(arg, |(name, _)| name).trim()
}

/// Reformat a call signature to a more compact form within `max_chars`.
///
/// Positional arguments always appear un-bracketed; keyword arguments are
/// reduced to their names and shown in a trailing `[, ...]` group only when
/// the budget allows, and are silently dropped from display otherwise. Type
/// annotations and default values never survive compaction. Output is
/// always a parenthesized comma-separated list, and re-compacting compacted
/// output is a no-op.
pub fn compact_signature(signature: &str, max_chars: usize) -> String {
    // Strip the return-type annotation, then the enclosing parentheses.
    let s = RETURN_ANNOTATION_RE.replace(signature, ")");
    let s = ENCLOSING_PARENS_RE.replace(&s, "$1");
    let mut s = s.trim().to_string();

    // Remove escape sequences, then whole string literals, so literal
    // contents cannot be mistaken for structural brackets below.
    s = s.replace("\\\\", "");
    s = s.replace("\\'", "");
    s = s.replace("\\\"", "");
    s = SINGLE_QUOTED_RE.replace_all(&s, "").into_owned();
    s = DOUBLE_QUOTED_RE.replace_all(&s, "").into_owned();

    // Collapse bracketed sub-expressions (e.g. default values such as
    // `NamedTuple(attr=...)`, `<object>`, `{}`). Each pass empties one
    // nesting level, exposing the next.
    for re in [&PAREN_CONTENTS_RE, &ANGLE_CONTENTS_RE, &BRACE_CONTENTS_RE] {
        while re.is_match(&s) {
            s = re.replace_all(&s, "").into_owned();
        }
    }

    // Peel keyword arguments off the right end; whatever remains on the
    // left is the positional arguments.
    let mut args: Vec<String> = Vec::new();
    let mut opts: Vec<String> = Vec::new();
    while !s.is_empty() {
        let Some(caps) = KEYWORD_ARG_RE.captures(&s) else {
            args = s.split(", ").map(str::to_string).collect();
            break;
        };
        opts.insert(0, caps[2].to_string());
        let rest = caps.get(1).map_or("", |m| m.as_str());
        s = rest.strip_suffix(", ").unwrap_or("").to_string();
    }

    let args: Vec<&str> = args.iter().map(|a| strip_arg_annotation(a)).collect();
    let opts: Vec<&str> = opts.iter().map(|o| strip_arg_annotation(o)).collect();

    // Assemble within budget, reserving 2 chars for the enclosing parens.
    let mut out = join_bounded(", ", &args, max_chars.saturating_sub(2), OVERFLOW_MARKER);
    if !opts.is_empty() {
        if out.is_empty() {
            let joined = join_bounded(", ", &opts, max_chars.saturating_sub(4), OVERFLOW_MARKER);
            out = format!("[{joined}]");
        } else if out.len() < max_chars.saturating_sub(4 + 2 + 3) {
            let joined = join_bounded(
                ", ",
                &opts,
                max_chars - out.len() - 4 - 2,
                OVERFLOW_MARKER,
            );
            out = format!("{out}[, {joined}]");
        }
    }

    format!("({out})")
}

#[cfg(test)]
mod tests {
    use super::{compact_signature, strip_arg_annotation};

    #[test]
    fn keyword_args_move_into_bracket_group() {
        assert_eq!(compact_signature("(a, b=1)", 30), "(a[, b])");
    }

    #[test]
    fn return_annotation_is_stripped() {
        assert_eq!(compact_signature("() -> int", 30), "()");
    }

    #[test]
    fn annotations_and_literal_defaults_vanish() {
        // An annotated default (`y: str = 'a'`) reads as positional because
        // the annotation sits between the name and the `=`; either way the
        // type and the literal never reach the display.
        let out = compact_signature("(x: int, y: str = 'a')", 30);
        assert_eq!(out, "(x, y)");
        assert!(!out.contains("int"));
        assert!(!out.contains("str"));
        assert!(!out.contains("'a'"));
    }

    #[test]
    fn empty_signature() {
        assert_eq!(compact_signature("()", 30), "()");
    }

    #[test]
    fn keyword_only_args_get_their_own_brackets() {
        assert_eq!(compact_signature("(x=1, y=2)", 30), "([x, y])");
    }

    #[test]
    fn nested_call_in_default_is_collapsed() {
        assert_eq!(
            compact_signature("(a, b=Point(x=0, y=0))", 30),
            "(a[, b])"
        );
    }

    #[test]
    fn deeply_nested_brackets_collapse() {
        assert_eq!(compact_signature("(a={'k': (1, {2})})", 30), "([a])");
    }

    #[test]
    fn escaped_quotes_inside_literals() {
        assert_eq!(compact_signature(r"(sep='\'', end='\n')", 30), "([sep, end])");
    }

    #[test]
    fn star_args_survive() {
        assert_eq!(compact_signature("(a, *args, **kwargs)", 30), "(a, *args, **kwargs)");
    }

    #[test]
    fn positional_args_truncate_to_budget() {
        let out = compact_signature("(alpha, beta, gamma, delta, epsilon)", 14);
        assert_eq!(out, "(alpha, ...)");
    }

    #[test]
    fn keywords_dropped_when_budget_is_tight() {
        // Positional part fills the budget; keyword group is silently dropped.
        let out = compact_signature("(alpha, beta, kw=1)", 12);
        assert!(!out.contains('['));
        assert!(out.starts_with('('));
        assert!(out.ends_with(')'));
    }

    #[test]
    fn compaction_is_idempotent() {
        for (sig, budget) in [
            ("(a, b=1)", 30),
            ("(x: int, y: str = 'a')", 30),
            ("(a, *args, **kwargs)", 30),
            ("()", 30),
            ("(alpha, beta, gamma, delta)", 14),
        ] {
            let once = compact_signature(sig, budget);
            assert_eq!(compact_signature(&once, budget), once, "for {sig}");
        }
    }

    #[test]
    fn annotation_stripping() {
        assert_eq!(strip_arg_annotation("x: int"), "x");
        assert_eq!(strip_arg_annotation("  y  "), "y");
        assert_eq!(strip_arg_annotation("plain"), "plain");
    }
}
