/// Core domain types for resolved program objects.
///
/// Objects are transient, request-scoped values built by a [`crate::loader::ModuleLoader`]
/// and consumed by the resolver and table builder. Nothing here outlives a
/// single resolution request.

/// What kind of program entity an [`Object`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// A loadable module (a source file or a package `__init__`).
    Module,
    /// A class definition.
    Class,
    /// A function or method definition.
    Function,
    /// A module- or class-level assignment.
    Data,
}

impl ObjectKind {
    /// Lowercase label used in CLI output.
    pub fn label(self) -> &'static str {
        match self {
            ObjectKind::Module => "module",
            ObjectKind::Class => "class",
            ObjectKind::Function => "function",
            ObjectKind::Data => "data",
        }
    }
}

/// A program object extracted from source: a module, class, function, or
/// data attribute, together with its members.
#[derive(Debug, Clone)]
pub struct Object {
    /// Unqualified name (last dotted segment).
    pub name: String,
    /// Entity kind.
    pub kind: ObjectKind,
    /// Textual call signature, e.g. `(a, b=1) -> int`. `None` for modules
    /// and data attributes.
    pub signature: Option<String>,
    /// Docstring split into lines, leading indentation normalized.
    pub doc: Vec<String>,
    /// Member objects, in source order.
    pub members: Vec<Object>,
}

impl Object {
    /// Build an object with no signature, docstring, or members.
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Object {
            name: name.into(),
            kind,
            signature: None,
            doc: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Dynamic member lookup — the `getattr` of the static object model.
    pub fn attr(&self, name: &str) -> Option<&Object> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Whether this object is a module.
    pub fn is_module(&self) -> bool {
        self.kind == ObjectKind::Module
    }
}

/// Output of successful name resolution.
///
/// Invariant: `module` is a prefix of (or equal to) `canonical`, and was
/// loadable at the time of resolution.
#[derive(Debug, Clone)]
pub struct ResolvedName {
    /// Prefix-joined dotted name that resolved.
    pub canonical: String,
    /// The resolved object.
    pub object: Object,
    /// The object owning `object` (`None` when the name resolved to a
    /// module itself).
    pub parent: Option<Object>,
    /// Dotted path of the module the object lives in.
    pub module: String,
}
