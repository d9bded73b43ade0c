/// Summary-row assembly: the authoring-time loop that turns a list of
/// dotted names into display rows.
use tracing::warn;

use crate::loader::ModuleLoader;
use crate::markup::MarkupParser;
use crate::object::ObjectKind;
use crate::resolver;
use crate::signature::compact_signature;
use crate::summary::extract_summary;

/// Signatures always get at least this much room, however long the name.
const MIN_SIGNATURE_CHARS: usize = 10;

/// One row of a summary table.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ItemRow {
    /// Name shown in the table (shortened when the entry used `~`).
    pub display_name: String,
    /// Compacted signature, empty for modules and data attributes.
    pub signature: String,
    /// First-sentence docstring summary.
    pub summary: String,
    /// Fully resolved dotted name (the requested name when resolution
    /// failed).
    pub canonical_name: String,
}

/// Build one summary row per requested name.
///
/// A leading `~` shortens the display name to the final dotted segment
/// while resolving the full name. Entries that fail to resolve are not
/// fatal: a warning is logged and the row degrades to an empty signature
/// and summary.
pub fn build_items(
    names: &[String],
    prefixes: &[Option<String>],
    loader: &dyn ModuleLoader,
    parser: &dyn MarkupParser,
    max_item_chars: usize,
) -> Vec<ItemRow> {
    let mut items = Vec::with_capacity(names.len());

    for raw in names {
        let (name, display_name) = match raw.strip_prefix('~') {
            Some(full) => {
                let last = full.rsplit('.').next().unwrap_or(full);
                (full, last.to_string())
            },
            None => (raw.as_str(), raw.clone()),
        };

        let resolved = match resolver::resolve(name, prefixes, loader) {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(name, error = %e, "failed to resolve summary entry");
                items.push(ItemRow {
                    display_name,
                    signature: String::new(),
                    summary: String::new(),
                    canonical_name: name.to_string(),
                });
                continue;
            },
        };

        let signature = match &resolved.object.signature {
            Some(signature) if resolved.object.kind != ObjectKind::Module => {
                let budget = MIN_SIGNATURE_CHARS.max(max_item_chars.saturating_sub(display_name.len()));
                compact_signature(signature, budget)
            },
            _ => String::new(),
        };

        let summary = extract_summary(&resolved.object.doc, parser);

        items.push(ItemRow {
            display_name,
            signature,
            summary,
            canonical_name: resolved.canonical,
        });
    }

    items
}

#[cfg(test)]
mod tests {
    use super::build_items;
    use crate::error::Error;
    use crate::loader::ModuleLoader;
    use crate::markup::MarkdownAssessor;
    use crate::object::{Object, ObjectKind};

    struct OneModule {
        module: Object,
    }

    impl ModuleLoader for OneModule {
        fn load(&self, path: &str) -> Result<Object, Error> {
            if path == "pkg.mod" {
                Ok(self.module.clone())
            } else {
                Err(Error::ModuleNotFound {
                    module: path.to_string(),
                })
            }
        }
    }

    fn sample_loader() -> OneModule {
        let mut greet = Object::new("greet", ObjectKind::Function);
        greet.signature = Some("(name: str, punctuation: str = '!') -> str".to_string());
        greet.doc = vec!["Return a greeting. Possibly loud.".to_string()];

        let mut module = Object::new("mod", ObjectKind::Module);
        module.doc = vec!["Greeting helpers.".to_string()];
        module.members.push(greet);

        OneModule { module }
    }

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn resolved_entry_gets_signature_and_summary() {
        let loader = sample_loader();
        let items = build_items(
            &names(&["pkg.mod.greet"]),
            &[None],
            &loader,
            &MarkdownAssessor::new(),
            50,
        );

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].display_name, "pkg.mod.greet");
        assert_eq!(items[0].canonical_name, "pkg.mod.greet");
        assert_eq!(items[0].signature, "(name, punctuation)");
        assert_eq!(items[0].summary, "Return a greeting.");
    }

    #[test]
    fn tilde_shortens_display_name_only() {
        let loader = sample_loader();
        let items = build_items(
            &names(&["~pkg.mod.greet"]),
            &[None],
            &loader,
            &MarkdownAssessor::new(),
            50,
        );

        assert_eq!(items[0].display_name, "greet");
        assert_eq!(items[0].canonical_name, "pkg.mod.greet");
    }

    #[test]
    fn module_entry_has_no_signature() {
        let loader = sample_loader();
        let items = build_items(
            &names(&["pkg.mod"]),
            &[None],
            &loader,
            &MarkdownAssessor::new(),
            50,
        );

        assert_eq!(items[0].signature, "");
        assert_eq!(items[0].summary, "Greeting helpers.");
    }

    #[test]
    fn failed_entry_degrades_instead_of_aborting() {
        let loader = sample_loader();
        let items = build_items(
            &names(&["pkg.mod.greet", "pkg.missing", "pkg.mod"]),
            &[None],
            &loader,
            &MarkdownAssessor::new(),
            50,
        );

        assert_eq!(items.len(), 3);
        assert_eq!(items[1].display_name, "pkg.missing");
        assert_eq!(items[1].signature, "");
        assert_eq!(items[1].summary, "");
        assert_eq!(items[1].canonical_name, "pkg.missing");
        // Neighbors are unaffected.
        assert!(!items[0].signature.is_empty());
        assert!(!items[2].summary.is_empty());
    }

    #[test]
    fn long_display_names_still_get_minimum_signature_budget() {
        let loader = sample_loader();
        let items = build_items(
            &names(&["pkg.mod.greet"]),
            &[None],
            &loader,
            &MarkdownAssessor::new(),
            // Budget smaller than the display name forces the floor.
            10,
        );

        // max(10, 10 - 13) = 10: the argument list is cut to the floor budget.
        assert_eq!(items[0].signature, "(name, ...)");
    }
}
