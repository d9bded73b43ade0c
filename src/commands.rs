/// CLI command bodies: build summary tables, resolve single names, list
/// loadable modules.
use std::path::Path;

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Error;
use crate::loader::FsModuleLoader;
use crate::markup::MarkdownAssessor;
use crate::resolver;
use crate::table::{ItemRow, build_items};

/// Build and print summary rows for the given names.
///
/// # Errors
///
/// Returns errors from config loading or JSON serialization. Per-entry
/// resolution failures degrade to blank rows and do not fail the command.
pub fn cmd_table(
    names: &[String],
    module: Option<&str>,
    class: Option<&str>,
    json: bool,
) -> Result<(), Error> {
    let config = Config::load(Path::new("."))?;
    let loader = FsModuleLoader::new(config.roots);
    let parser = MarkdownAssessor::new();
    let prefixes = resolver::import_prefixes(module, class);

    let items = build_items(names, &prefixes, &loader, &parser, config.max_item_chars);

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    print_rows(&items);
    Ok(())
}

/// Print rows as two aligned columns: `name signature` then summary.
fn print_rows(items: &[ItemRow]) {
    let width = items
        .iter()
        .map(|item| item.display_name.len() + item.signature.len())
        .max()
        .unwrap_or(0);

    for item in items {
        let first = format!("{}{}", item.display_name, item.signature);
        println!("{first:<width$}  {}", item.summary);
    }
}

/// Resolve one name and print where it landed.
///
/// # Errors
///
/// Returns errors from config loading, or `Error::ResolutionFailed` when no
/// candidate prefix yields an object.
pub fn cmd_resolve(name: &str, module: Option<&str>, class: Option<&str>) -> Result<(), Error> {
    let config = Config::load(Path::new("."))?;
    let loader = FsModuleLoader::new(config.roots);
    let prefixes = resolver::import_prefixes(module, class);

    let resolved = resolver::resolve(name, &prefixes, &loader)?;

    println!("canonical: {}", resolved.canonical);
    println!("module:    {}", resolved.module);
    println!("kind:      {}", resolved.object.kind.label());
    if let Some(parent) = &resolved.parent {
        println!("parent:    {}", parent.name);
    }
    Ok(())
}

/// List every dotted module path loadable from the configured roots,
/// sorted and deduplicated.
///
/// # Errors
///
/// Returns errors from config loading.
pub fn cmd_modules() -> Result<(), Error> {
    let config = Config::load(Path::new("."))?;

    let mut paths: Vec<String> = Vec::new();
    for root in &config.roots {
        collect_module_paths(root, &mut paths);
    }
    paths.sort();
    paths.dedup();

    if paths.is_empty() {
        println!("No modules found.");
        return Ok(());
    }
    for path in paths {
        println!("{path}");
    }
    Ok(())
}

/// Walk one search root and collect dotted paths for every `.py` file whose
/// path segments are all identifiers.
fn collect_module_paths(root: &Path, paths: &mut Vec<String>) {
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "py"))
    {
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if let Some(dotted) = dotted_module_path(relative) {
            paths.push(dotted);
        }
    }
}

/// Convert a root-relative `.py` path to a dotted module path.
/// `pkg/mod.py` → `pkg.mod`; `pkg/__init__.py` → `pkg`. Returns `None` for
/// paths with non-identifier segments or a bare top-level `__init__.py`.
fn dotted_module_path(relative: &Path) -> Option<String> {
    let mut segments: Vec<String> = Vec::new();
    for component in relative.with_extension("").components() {
        let segment = component.as_os_str().to_str()?;
        segments.push(segment.to_string());
    }

    if segments.last().map(String::as_str) == Some("__init__") {
        segments.pop();
    }
    if segments.is_empty() || !segments.iter().all(|s| crate::loader::is_identifier(s)) {
        return None;
    }

    Some(segments.join("."))
}
