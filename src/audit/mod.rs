//! Workspace layout audit — convention checks over the configured dev root.
//! Findings flow through the same result/report pipeline as health probes.

use std::path::{Path, PathBuf};

use crate::report::CheckResult;

pub const AUDIT_CATEGORY: &str = "layout";

/// Top-level files that are allowed to sit loose in the dev root.
const ALLOWED_LOOSE_FILES: &[&str] = &[
    "README.md",
    "LICENSE",
    "Makefile",
    ".gitignore",
    ".gitattributes",
    ".editorconfig",
    ".env",
    ".env.example",
];

/// Directories every workspace root is expected to have.
const EXPECTED_DIRS: &[&str] = &["docs", "scripts", "configs"];

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FileSystem trait — abstraction for testability
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn list_dir(&self, path: &Path) -> Result<Vec<String>, std::io::Error>;
}

/// Production filesystem using std::fs.
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>, std::io::Error> {
        let entries = std::fs::read_dir(path)?
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        Ok(entries)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LayoutAudit
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct LayoutAudit<'a> {
    fs: &'a dyn FileSystem,
    root: PathBuf,
}

impl<'a> LayoutAudit<'a> {
    pub fn new(fs: &'a dyn FileSystem, root: &Path) -> Self {
        Self {
            fs,
            root: root.to_path_buf(),
        }
    }

    #[tracing::instrument(name = "Run layout audit", skip(self))]
    pub fn run(&self) -> Vec<CheckResult> {
        if !self.fs.is_dir(&self.root) {
            return vec![CheckResult::error(
                "dev-root",
                AUDIT_CATEGORY,
                format!("{} is not a directory", self.root.display()),
            )];
        }

        let mut results = Vec::new();
        results.push(self.check_loose_files());
        for dir in EXPECTED_DIRS {
            results.push(self.check_expected_dir(dir));
        }
        results.push(self.check_root_node_modules());
        results
    }

    /// Loose regular files at the top level, outside the allowlist.
    fn check_loose_files(&self) -> CheckResult {
        let entries = match self.fs.list_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                return CheckResult::error(
                    "loose-files",
                    AUDIT_CATEGORY,
                    format!("cannot list {}: {e}", self.root.display()),
                )
            }
        };

        let mut loose: Vec<String> = entries
            .into_iter()
            .filter(|name| !self.fs.is_dir(&self.root.join(name)))
            .filter(|name| !name.starts_with('.'))
            .filter(|name| !ALLOWED_LOOSE_FILES.contains(&name.as_str()))
            .collect();
        loose.sort();

        if loose.is_empty() {
            CheckResult::healthy(
                "loose-files",
                AUDIT_CATEGORY,
                "no loose files at top level".to_string(),
            )
        } else {
            CheckResult::unhealthy(
                "loose-files",
                AUDIT_CATEGORY,
                format!("{} loose file(s): {}", loose.len(), loose.join(", ")),
            )
        }
    }

    fn check_expected_dir(&self, name: &str) -> CheckResult {
        let check_name = format!("dir:{name}");
        if self.fs.is_dir(&self.root.join(name)) {
            CheckResult::healthy(&check_name, AUDIT_CATEGORY, "present".to_string())
        } else {
            CheckResult::unhealthy(&check_name, AUDIT_CATEGORY, format!("{name}/ missing"))
        }
    }

    /// node_modules directly under the root means something was npm-installed
    /// outside a project directory.
    fn check_root_node_modules(&self) -> CheckResult {
        if self.fs.exists(&self.root.join("node_modules")) {
            CheckResult::unhealthy(
                "node-modules",
                AUDIT_CATEGORY,
                "node_modules present at workspace root".to_string(),
            )
        } else {
            CheckResult::healthy(
                "node-modules",
                AUDIT_CATEGORY,
                "no stray node_modules".to_string(),
            )
        }
    }
}
