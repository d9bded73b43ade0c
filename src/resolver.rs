/// Dotted-name resolution against a module loader.
///
/// A documentation author writes `Greeter.greet` inside a module context;
/// resolution tries each candidate prefix in order and pins the name to a
/// concrete object, its owning parent, and its owning module. Where the
/// boundary between module path and attribute path falls is unknown up
/// front, so single-candidate resolution probes both interpretations.
use crate::error::Error;
use crate::loader::ModuleLoader;
use crate::object::{Object, ResolvedName};

/// Build the candidate prefix list for a document context.
///
/// Order matters and mirrors lexical proximity: the enclosing class scope
/// first, then the current module, then no prefix at all.
pub fn import_prefixes(module: Option<&str>, class: Option<&str>) -> Vec<Option<String>> {
    let mut prefixes: Vec<Option<String>> = vec![None];

    if let Some(module) = module {
        prefixes.insert(0, Some(module.to_string()));
    }
    if let Some(class) = class {
        let scoped = match module {
            Some(module) => format!("{module}.{class}"),
            None => class.to_string(),
        };
        prefixes.insert(0, Some(scoped));
    }

    prefixes
}

/// Resolve `name` under the first candidate prefix that works.
///
/// Prefixes are tried strictly in order and the first success wins — no
/// attempt is made to rank or disambiguate among later candidates.
///
/// # Errors
///
/// Returns `Error::ResolutionFailed` listing every attempted candidate, in
/// order, when no prefix yields an object.
pub fn resolve(
    name: &str,
    prefixes: &[Option<String>],
    loader: &dyn ModuleLoader,
) -> Result<ResolvedName, Error> {
    let mut tried = Vec::new();

    for prefix in prefixes {
        let candidate = match prefix {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}.{name}"),
            _ => name.to_string(),
        };

        match resolve_candidate(&candidate, loader) {
            Ok((object, parent, module)) => {
                return Ok(ResolvedName {
                    canonical: candidate,
                    object,
                    parent,
                    module,
                });
            },
            Err(_) => tried.push(candidate),
        }
    }

    Err(Error::ResolutionFailed {
        name: name.to_string(),
        tried,
    })
}

/// Outcome of probing dotted-path splits for a loadable module prefix.
enum ModuleProbe {
    /// `depth` leading segments form a loadable module.
    Found { module: Object, depth: usize },
    /// No split of the name loads as a module.
    NotFound,
}

/// Find the longest prefix of `parts` that loads as a module, continuing
/// past individual load failures.
fn probe_module_prefix(parts: &[&str], loader: &dyn ModuleLoader) -> ModuleProbe {
    for depth in (1..=parts.len()).rev() {
        let path = parts[..depth].join(".");
        if let Ok(module) = loader.load(&path) {
            return ModuleProbe::Found { module, depth };
        }
    }
    ModuleProbe::NotFound
}

/// Resolve one fully-prefixed candidate.
///
/// Strategy A treats everything up to the last dot as a module path and the
/// last segment as an attribute of it. When that fails, strategy B finds
/// the longest loadable module prefix and walks the remaining segments as
/// nested attributes, tracking the immediate parent. A candidate that is
/// itself a module resolves with no parent.
///
/// # Errors
///
/// Any import, attribute-lookup, or empty-name failure surfaces as a single
/// per-candidate error; the caller folds it into the cross-candidate
/// diagnostic.
fn resolve_candidate(
    candidate: &str,
    loader: &dyn ModuleLoader,
) -> Result<(Object, Option<Object>, String), Error> {
    let parts: Vec<&str> = candidate.split('.').collect();
    if candidate.is_empty() || parts.iter().any(|segment| segment.is_empty()) {
        return Err(Error::InvalidName {
            name: candidate.to_string(),
        });
    }

    // Strategy A: MODPATH.attr — all but the last segment as a module.
    if parts.len() > 1 {
        let module_path = parts[..parts.len() - 1].join(".");
        if let Ok(module) = loader.load(&module_path) {
            if let Some(attribute) = module.attr(parts[parts.len() - 1]) {
                let attribute = attribute.clone();
                return Ok((attribute, Some(module), module_path));
            }
        }
    }

    // Strategy B: longest loadable module prefix, then an attribute walk.
    let ModuleProbe::Found { module, depth } = probe_module_prefix(&parts, loader) else {
        return Err(Error::ModuleNotFound {
            module: candidate.to_string(),
        });
    };
    let module_path = parts[..depth].join(".");

    if depth == parts.len() {
        return Ok((module, None, module_path));
    }

    let mut parent: Option<Object> = None;
    let mut object = module;
    let mut walked = module_path.clone();
    for segment in &parts[depth..] {
        let next = object.attr(segment).cloned().ok_or_else(|| Error::AttributeNotFound {
            object: walked.clone(),
            attribute: (*segment).to_string(),
        })?;
        walked.push('.');
        walked.push_str(segment);
        parent = Some(object);
        object = next;
    }

    Ok((object, parent, module_path))
}
