use std::path::Path;
use std::process::Command;

/// Lay out a small package tree and return the directory holding it.
fn demo_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
    let pkg = dir.path().join("pkg");
    std::fs::create_dir(&pkg).unwrap_or_else(|e| panic!("mkdir: {e}"));

    std::fs::write(
        pkg.join("__init__.py"),
        "\"\"\"Demo package for greetings.\"\"\"\n",
    )
    .unwrap_or_else(|e| panic!("write: {e}"));

    std::fs::write(
        pkg.join("text.py"),
        r#""""Text helpers. Internal detail."""

def greet(name: str, punctuation: str = "!") -> str:
    """Return a greeting. The second sentence is noise."""
    return name + punctuation

class Formatter:
    """Formats greetings nicely."""

    def __init__(self, prefix="Hello"):
        self.prefix = prefix

    def apply(self, name):
        """Apply the format. Rarely fails."""
        return self.prefix + name
"#,
    )
    .unwrap_or_else(|e| panic!("write: {e}"));

    dir
}

fn apisum_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_apisum"));
    cmd.current_dir(dir);
    cmd
}

#[test]
fn resolve_prints_canonical_location() {
    let dir = demo_tree();
    let out = apisum_cmd(dir.path())
        .args(["resolve", "pkg.text.greet"])
        .output()
        .unwrap_or_else(|e| panic!("spawn: {e}"));

    assert!(
        out.status.success(),
        "resolve failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("canonical: pkg.text.greet"));
    assert!(stdout.contains("module:    pkg.text"));
    assert!(stdout.contains("kind:      function"));
    assert!(stdout.contains("parent:    text"));
}

#[test]
fn resolve_uses_module_prefix_context() {
    let dir = demo_tree();
    let out = apisum_cmd(dir.path())
        .args(["resolve", "Formatter", "--module", "pkg.text"])
        .output()
        .unwrap_or_else(|e| panic!("spawn: {e}"));

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("canonical: pkg.text.Formatter"));
    assert!(stdout.contains("kind:      class"));
}

#[test]
fn resolve_failure_reports_candidates_and_fails() {
    let dir = demo_tree();
    let out = apisum_cmd(dir.path())
        .args(["resolve", "nothing.here", "--module", "pkg"])
        .output()
        .unwrap_or_else(|e| panic!("spawn: {e}"));

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cannot resolve `nothing.here`"));
    assert!(stderr.contains("pkg.nothing.here"));
}

#[test]
fn table_prints_signatures_and_summaries() {
    let dir = demo_tree();
    let out = apisum_cmd(dir.path())
        .args(["table", "pkg.text.greet", "~pkg.text.Formatter"])
        .output()
        .unwrap_or_else(|e| panic!("spawn: {e}"));

    assert!(
        out.status.success(),
        "table failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("pkg.text.greet(name, punctuation)"));
    assert!(stdout.contains("Return a greeting."));
    assert!(!stdout.contains("The second sentence is noise"));
    // `~` shortened the class entry to its last segment.
    assert!(stdout.contains("Formatter([prefix])"));
    assert!(stdout.contains("Formats greetings nicely."));
}

#[test]
fn table_degrades_on_unresolvable_entries() {
    let dir = demo_tree();
    let out = apisum_cmd(dir.path())
        .args(["table", "pkg.text.greet", "pkg.missing"])
        .output()
        .unwrap_or_else(|e| panic!("spawn: {e}"));

    // Per-entry failure is a warning, not a command failure.
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("pkg.missing"));
    assert!(stdout.contains("Return a greeting."));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed to resolve"));
}

#[test]
fn table_json_output_is_structured() {
    let dir = demo_tree();
    let out = apisum_cmd(dir.path())
        .args(["table", "--json", "pkg.text.greet"])
        .output()
        .unwrap_or_else(|e| panic!("spawn: {e}"));

    assert!(out.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&out.stdout)
        .unwrap_or_else(|e| panic!("invalid json: {e}"));
    assert_eq!(rows[0]["display_name"], "pkg.text.greet");
    assert_eq!(rows[0]["canonical_name"], "pkg.text.greet");
    assert_eq!(rows[0]["signature"], "(name, punctuation)");
    assert_eq!(rows[0]["summary"], "Return a greeting.");
}

#[test]
fn modules_lists_loadable_paths() {
    let dir = demo_tree();
    let out = apisum_cmd(dir.path())
        .args(["modules"])
        .output()
        .unwrap_or_else(|e| panic!("spawn: {e}"));

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let listed: Vec<&str> = stdout.lines().collect();
    assert!(listed.contains(&"pkg"));
    assert!(listed.contains(&"pkg.text"));
}
