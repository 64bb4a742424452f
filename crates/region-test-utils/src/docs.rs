//! [`DocsFixture`] builder for embedding scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use region_fs::NormalizedPath;
use tempfile::TempDir;

/// A temporary project directory holding docs and the sources they embed.
///
/// # Example
///
/// ```rust,no_run
/// use region_test_utils::DocsFixture;
///
/// let fixture = DocsFixture::new()
///     .with_file("lib/x.dart", "// #region setup\nvar x = 1;\n// #endregion\n")
///     .with_file("docs/guide.md", "```dart file=<rootDir>/lib/x.dart#setup\n```\n");
/// let guide = fixture.path("docs/guide.md");
/// ```
pub struct DocsFixture {
    temp_dir: TempDir,
}

impl Default for DocsFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl DocsFixture {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("DocsFixture::new: failed to create temp dir"),
        }
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        self.write(relative, content);
        self
    }

    /// Write `content` to `relative` on an existing fixture.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.native(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("DocsFixture::write: failed to create dirs");
        }
        fs::write(&path, content).expect("DocsFixture::write: failed to write file");
    }

    /// Read a file back from the fixture.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.native(relative)).expect("DocsFixture::read: failed to read file")
    }

    /// Root of the fixture as a native path.
    pub fn root_native(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root of the fixture as a normalized path.
    pub fn root(&self) -> NormalizedPath {
        NormalizedPath::new(self.temp_dir.path())
    }

    /// Normalized absolute path of a file inside the fixture.
    pub fn path(&self, relative: &str) -> NormalizedPath {
        self.root().join(relative)
    }

    /// Native absolute path of a file inside the fixture.
    pub fn native(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }
}
