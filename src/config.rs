use std::path::PathBuf;

pub const DEFAULT_PROTOTYPE_DIR: &str = "make_example_prototype";
pub const DEFAULT_TARGET_DIR: &str = "../src/examples";

/// Where templates are read from and where new projects are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Flat directory of template files, never written to
    pub prototype_dir: PathBuf,
    /// Parent directory for generated projects
    pub target_dir: PathBuf,
}

impl ScaffoldConfig {
    pub fn new(prototype_dir: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            prototype_dir: prototype_dir.into(),
            target_dir: target_dir.into(),
        }
    }
}

impl Default for ScaffoldConfig {
    // paths are relative to the working directory, the tool is run from packaging/
    fn default() -> Self {
        Self::new(DEFAULT_PROTOTYPE_DIR, DEFAULT_TARGET_DIR)
    }
}
