//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary source tree
//! - Command builder helpers that run inside that tree

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running in the temporary directory.
    ///
    /// The log mode variable is cleared so the host environment cannot change
    /// what the binary prints on stderr.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("amalgamate").expect("Failed to find amalgamate binary");
        cmd.current_dir(&self.temp_path);
        cmd.env_remove("AMALGAM_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the temp directory, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create test directory");
        }
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the temp directory.
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.temp_path.join(relative)).expect("Failed to read file")
    }

    /// Lay out the small library used by most tests.
    ///
    /// ```text
    /// lib/lib.h          -> "detail/a.h", "detail/b.h", <vector>
    /// lib/detail/a.h     -> "common.h"
    /// lib/detail/b.h     -> "common.h"
    /// lib/detail/common.h
    /// ```
    pub fn sample_library(&self) -> PathBuf {
        self.write(
            "lib/detail/common.h",
            "// common banner\n#pragma once\n#define COMMON 1\n",
        );
        self.write(
            "lib/detail/a.h",
            "// a banner\n#pragma once\n#include \"common.h\"\nint a;\n",
        );
        self.write(
            "lib/detail/b.h",
            "// b banner\n#pragma once\n#include \"common.h\"\n#include <vector>\nint b;\n",
        );
        self.write(
            "lib/lib.h",
            "// lib banner\n// license text\n#pragma once\n#include <vector>\n\
             #include \"detail/a.h\"\n#include \"detail/b.h\"\n",
        )
    }
}

/// Expected stdout for `amalgamate lib/lib.h` over [`TestEnv::sample_library`].
///
/// `<vector>` appears twice: system includes are keyed by the including
/// file's directory like any other include.
#[allow(dead_code)]
pub const SAMPLE_EXPANSION: &str = "\n// lib banner\n// license text\n#pragma once\n\
#include <vector>\n\n#pragma once\n\n#pragma once\n#define COMMON 1\nint a;\n\n\
#pragma once\n#include <vector>\nint b;\n";
