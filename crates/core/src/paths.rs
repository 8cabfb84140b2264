//! Workspace-relative path rendering
//!
//! Generated documents refer to files through the editor's `${workspaceFolder}` variable
//! instead of absolute paths, and always use `/` as the separator. [`ResolvedPath`] holds a
//! path in that form as a list of segments.

use std::fmt;
use std::path::{Component, Path};

/// Editor variable that expands to the workspace folder.
pub const WORKSPACE_FOLDER_TOKEN: &str = "${workspaceFolder}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Anchor {
    /// Relative to the workspace folder.
    WorkspaceFolder,
    /// Absolute. Holds the drive prefix (`C:`) or an empty string for `/`.
    Absolute(String),
}

/// A path rendered with forward slashes, anchored at the workspace folder when possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    anchor: Anchor,
    segments: Vec<String>,
}

impl ResolvedPath {
    /// The workspace folder itself.
    pub fn workspace_folder() -> Self {
        Self {
            anchor: Anchor::WorkspaceFolder,
            segments: Vec::new(),
        }
    }

    /// Resolve `path` against the workspace `root`.
    ///
    /// Relative paths are taken to be relative to the root. Absolute paths under the root
    /// are re-anchored at the workspace folder; anything else stays absolute.
    pub fn resolve(path: &Path, root: &Path) -> Self {
        let target = LexicalPath::new(path);
        if !target.absolute {
            return Self {
                anchor: Anchor::WorkspaceFolder,
                segments: target.segments,
            };
        }

        let root = LexicalPath::new(root);
        if root.absolute
            && root.prefix == target.prefix
            && target.segments.starts_with(&root.segments)
        {
            return Self {
                anchor: Anchor::WorkspaceFolder,
                segments: target.segments[root.segments.len()..].to_vec(),
            };
        }

        Self {
            anchor: Anchor::Absolute(target.prefix.unwrap_or_default()),
            segments: target.segments,
        }
    }

    /// Append one or more `/`-separated segments.
    pub fn join(&self, relative: &str) -> Self {
        let mut joined = self.clone();
        joined.segments.extend(
            relative
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string),
        );
        joined
    }

    /// The containing directory. The workspace folder is its own parent.
    pub fn parent(&self) -> Self {
        let mut parent = self.clone();
        parent.segments.pop();
        parent
    }

    pub fn is_workspace_relative(&self) -> bool {
        self.anchor == Anchor::WorkspaceFolder
    }

    /// All segments including the anchor, so that `to_string().split('/')` yields the same list.
    pub fn segments(&self) -> Vec<&str> {
        let anchor = match &self.anchor {
            Anchor::WorkspaceFolder => WORKSPACE_FOLDER_TOKEN,
            Anchor::Absolute(prefix) => prefix.as_str(),
        };
        std::iter::once(anchor)
            .chain(self.segments.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.segments().join("/");
        if rendered.is_empty() {
            // The filesystem root on its own
            return f.write_str("/");
        }
        f.write_str(&rendered)
    }
}

/// A path split into normalized components without touching the filesystem.
struct LexicalPath {
    prefix: Option<String>,
    absolute: bool,
    segments: Vec<String>,
}

impl LexicalPath {
    fn new(path: &Path) -> Self {
        let mut prefix = None;
        let mut absolute = false;
        let mut segments: Vec<String> = Vec::new();

        for component in path.components() {
            match component {
                Component::Prefix(p) => {
                    prefix = Some(p.as_os_str().to_string_lossy().replace('\\', "/"));
                }
                Component::RootDir => absolute = true,
                Component::CurDir => {}
                Component::ParentDir => {
                    if segments.pop().is_none() && !absolute {
                        segments.push("..".to_string());
                    }
                }
                Component::Normal(name) => segments.push(name.to_string_lossy().into_owned()),
            }
        }

        Self {
            prefix,
            absolute,
            segments,
        }
    }
}
