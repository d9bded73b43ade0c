/// Module loading: dotted paths to parsed program objects.
///
/// Resolution needs a way to turn `pkg.mod` into an [`Object`] tree. The
/// [`ModuleLoader`] trait is that seam; [`FsModuleLoader`] is the production
/// implementation, mapping dotted paths to `.py` files under configured
/// search roots and parsing them with tree-sitter. Loading is stateless —
/// every call re-reads and re-parses, and callers that need interception
/// (stub modules, fixtures) implement the trait themselves.
use std::path::{Path, PathBuf};

use tree_sitter::{Node, Parser, Tree};

use crate::error::Error;
use crate::object::{Object, ObjectKind};

/// Maximum source file size (16 MiB).
const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Loads the module at a dotted path, or fails.
pub trait ModuleLoader {
    /// Load `path` (e.g. `pkg.mod`) as a module object.
    ///
    /// # Errors
    ///
    /// Returns `Error::ModuleNotFound` for unknown or ill-formed paths, and
    /// loader-specific errors for unreadable or unparseable sources.
    fn load(&self, path: &str) -> Result<Object, Error>;
}

/// Filesystem-backed loader over a list of search roots.
///
/// For the path `a.b`, each root is probed for `a/b.py`, then
/// `a/b/__init__.py`; the first hit wins.
pub struct FsModuleLoader {
    roots: Vec<PathBuf>,
}

impl FsModuleLoader {
    /// Build a loader over the given search roots, probed in order.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        FsModuleLoader { roots }
    }

    /// Locate the source file for a dotted path, if any root contains one.
    fn find_source(&self, parts: &[&str]) -> Option<PathBuf> {
        for root in &self.roots {
            let base = parts.iter().fold(root.clone(), |p, seg| p.join(seg));
            let as_file = base.with_extension("py");
            if as_file.is_file() {
                return Some(as_file);
            }
            let as_package = base.join("__init__.py");
            if as_package.is_file() {
                return Some(as_package);
            }
        }
        None
    }
}

impl ModuleLoader for FsModuleLoader {
    fn load(&self, path: &str) -> Result<Object, Error> {
        let parts: Vec<&str> = path.split('.').collect();
        if path.is_empty() || !parts.iter().copied().all(is_identifier) {
            return Err(Error::ModuleNotFound {
                module: path.to_string(),
            });
        }

        let file = self.find_source(&parts).ok_or_else(|| Error::ModuleNotFound {
            module: path.to_string(),
        })?;

        let source = std::fs::read_to_string(&file)?;
        let source_len: u64 = source.len().try_into().unwrap_or(u64::MAX);
        if source_len > MAX_FILE_SIZE {
            return Err(Error::FileTooLarge {
                file,
                size_bytes: source_len,
                max_bytes: MAX_FILE_SIZE,
            });
        }

        let name = parts.last().copied().unwrap_or(path);
        parse_module_source(name, &file, &source)
    }
}

/// Text of a named field of a CST node.
fn field_text(node: Node<'_>, field: &str, source: &str) -> Option<String> {
    let child = node.child_by_field_name(field)?;
    child.utf8_text(source.as_bytes()).ok().map(str::to_string)
}

/// Whether a dotted-path segment is a plausible identifier.
pub(crate) fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_') && chars.all(|c| c.is_alphanumeric() || c == '_')
}

// ── Source parsing ─────────────────────────────────────────────────────

/// Parse Python source into a module object.
///
/// # Errors
///
/// Returns `Error::ParseFailed` if the grammar cannot be set or parsing
/// fails outright.
fn parse_module_source(name: &str, file: &Path, source: &str) -> Result<Object, Error> {
    let tree = parse_python(file, source)?;
    let root = tree.root_node();

    let mut module = Object::new(name, ObjectKind::Module);
    module.doc = leading_docstring(root, source);
    module.members = collect_members(root, source, false);
    Ok(module)
}

/// Parse source with the Python grammar.
fn parse_python(file: &Path, source: &str) -> Result<Tree, Error> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| Error::ParseFailed {
            file: file.to_path_buf(),
            reason: e.to_string(),
        })?;

    parser.parse(source, None).ok_or_else(|| Error::ParseFailed {
        file: file.to_path_buf(),
        reason: "tree-sitter returned None".to_string(),
    })
}

/// Collect the member objects of a module root or definition body.
/// `in_class` drops the leading receiver from method display signatures.
fn collect_members(container: Node<'_>, source: &str, in_class: bool) -> Vec<Object> {
    let mut members = Vec::new();
    let mut cursor = container.walk();

    for node in container.named_children(&mut cursor) {
        // Decorators wrap the definition; documentation ignores them.
        let node = if node.kind() == "decorated_definition" {
            match node.child_by_field_name("definition") {
                Some(inner) => inner,
                None => continue,
            }
        } else {
            node
        };

        match node.kind() {
            "function_definition" => {
                if let Some(function) = function_object(node, source, in_class) {
                    members.push(function);
                }
            },
            "class_definition" => {
                if let Some(class) = class_object(node, source) {
                    members.push(class);
                }
            },
            "expression_statement" => collect_assigned_names(node, source, &mut members),
            _ => {},
        }
    }

    members
}

/// Extract a function or method definition.
fn function_object(node: Node<'_>, source: &str, in_class: bool) -> Option<Object> {
    let name = field_text(node, "name", source)?;
    let params = field_text(node, "parameters", source)?;

    let mut signature = if in_class {
        strip_leading_receiver(&params)
    } else {
        params
    };
    if let Some(ret) = field_text(node, "return_type", source) {
        signature.push_str(" -> ");
        signature.push_str(&ret);
    }

    let mut object = Object::new(name, ObjectKind::Function);
    object.signature = Some(signature);
    if let Some(body) = node.child_by_field_name("body") {
        object.doc = leading_docstring(body, source);
    }
    Some(object)
}

/// Extract a class definition, its docstring, and its body members.
/// The class display signature is borrowed from `__init__` when present.
fn class_object(node: Node<'_>, source: &str) -> Option<Object> {
    let name = field_text(node, "name", source)?;
    let mut object = Object::new(name, ObjectKind::Class);

    if let Some(body) = node.child_by_field_name("body") {
        object.doc = leading_docstring(body, source);
        object.members = collect_members(body, source, true);
    }
    object.signature = object
        .attr("__init__")
        .and_then(|init| init.signature.clone());

    Some(object)
}

/// Collect data attributes from a simple assignment statement.
fn collect_assigned_names(statement: Node<'_>, source: &str, members: &mut Vec<Object>) {
    let Some(assignment) = statement.named_child(0).filter(|n| n.kind() == "assignment") else {
        return;
    };
    let Some(left) = assignment.child_by_field_name("left") else {
        return;
    };

    match left.kind() {
        "identifier" => {
            if let Ok(name) = left.utf8_text(source.as_bytes()) {
                members.push(Object::new(name, ObjectKind::Data));
            }
        },
        "pattern_list" => {
            let mut cursor = left.walk();
            for target in left.named_children(&mut cursor) {
                if target.kind() != "identifier" {
                    continue;
                }
                if let Ok(name) = target.utf8_text(source.as_bytes()) {
                    members.push(Object::new(name, ObjectKind::Data));
                }
            }
        },
        _ => {},
    }
}

/// Drop a leading `self`/`cls` receiver from a parameter list for display.
fn strip_leading_receiver(params: &str) -> String {
    let Some(inner) = params.strip_prefix('(').and_then(|p| p.strip_suffix(')')) else {
        return params.to_string();
    };

    let trimmed = inner.trim_start();
    for receiver in ["self", "cls"] {
        let Some(rest) = trimmed.strip_prefix(receiver) else {
            continue;
        };
        if rest.is_empty() {
            return "()".to_string();
        }
        if let Some(tail) = rest.trim_start().strip_prefix(',') {
            return format!("({})", tail.trim_start());
        }
    }
    params.to_string()
}

// ── Docstrings ─────────────────────────────────────────────────────────

/// Extract the docstring of a module root or definition body: a leading
/// expression statement holding a string literal.
fn leading_docstring(container: Node<'_>, source: &str) -> Vec<String> {
    let mut cursor = container.walk();
    let Some(first) = container.named_children(&mut cursor).next() else {
        return Vec::new();
    };
    if first.kind() != "expression_statement" {
        return Vec::new();
    }
    let Some(string) = first.named_child(0).filter(|n| n.kind() == "string") else {
        return Vec::new();
    };

    let Some(text) = string_literal_text(string, source) else {
        return Vec::new();
    };
    docstring_lines(&text)
}

/// The text between a string literal's delimiters.
fn string_literal_text(string: Node<'_>, source: &str) -> Option<String> {
    let mut start = None;
    let mut end = None;
    let mut cursor = string.walk();
    for child in string.children(&mut cursor) {
        match child.kind() {
            "string_start" => start = Some(child.end_byte()),
            "string_end" => end = Some(child.start_byte()),
            _ => {},
        }
    }

    match (start, end) {
        (Some(s), Some(e)) if s <= e => source.get(s..e).map(str::to_string),
        _ => None,
    }
}

/// Split a docstring into lines and strip the common indentation that
/// triple-quoted literals carry on continuation lines.
fn docstring_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();

    let indent = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    for line in lines.iter_mut().skip(1) {
        if line.trim().is_empty() {
            line.clear();
        } else {
            let stripped = line.get(indent..).unwrap_or_else(|| line.trim_start()).to_string();
            *line = stripped;
        }
    }

    lines
}
