#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the pubpage binary.
#[macro_export]
macro_rules! pubpage {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("pubpage"))
    };
}

/// Small well-formed publication document used across integration tests.
pub const SAMPLE_PUBS: &str = r#"[
    {
        "title": "A Systems Paper",
        "year": 2024,
        "venue": "SOSP",
        "authors": ["Ada Lovelace", "Charles Babbage"],
        "type": "paper",
        "links": [{"url": "https://example.com/paper.pdf", "label": "PDF"}]
    },
    {
        "title": "An Invited Talk",
        "year": 2023,
        "venue": "RustConf",
        "authors": ["Ada Lovelace"],
        "type": "talk"
    },
    {
        "title": "Undated Note",
        "year": "n/a"
    }
]"#;

/// Temporary directory with helpers for creating test files.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory and
    /// returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes the shared sample publication document and returns its path.
    pub fn sample_pubs(&self) -> PathBuf {
        self.create_file("pubs.json", SAMPLE_PUBS)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
