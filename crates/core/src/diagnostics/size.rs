/// Default source-file count above which a workspace is large.
pub const DEFAULT_MAX_PROJECT_FILE_COUNT: usize = 1000;

/// Workspace size, as it affects which documents show diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkspaceSizeClass {
    #[default]
    Normal,
    /// Only open documents show diagnostics.
    Large,
}

impl WorkspaceSizeClass {
    /// A workspace with more than `max_file_count` source files is large.
    pub fn classify(file_count: usize, max_file_count: usize) -> Self {
        if file_count > max_file_count {
            Self::Large
        } else {
            Self::Normal
        }
    }

    pub fn is_visible(self, is_open: bool) -> bool {
        is_open || self == Self::Normal
    }
}
