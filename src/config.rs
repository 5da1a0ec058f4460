// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fixed locations and constants shared by the extract and generate stages

use std::path::PathBuf;

/// Versioned MS-LCID page listing every LCID and its language tag.
///
/// The Office variant (MS-OE376) carries a similar table but is less complete.
pub const LCID_LIST_URL: &str = "https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-lcid/63d3d639-7fd2-4afb-abbe-0d5b5551eef8";

/// Zero-based positions of the authoritative tables on the reference page.
pub const AUTHORITATIVE_TABLES: [usize; 2] = [2, 3];

pub const LCID_HEADER: &str = "lcid";
pub const LANG_TAG_HEADER: &str = "lang_tag";

/// Package of the `Lcid` converter library that consumes the Java tables.
pub const DEFAULT_JAVA_PACKAGE: &str = "io.github.djsutho.lcid.converter";

/// Directory layout of the project the artifacts are written into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Anchor on this crate's own manifest directory, or `root` when given.
    pub fn resolve(root: Option<PathBuf>) -> Self {
        root.map(Self::new)
            .unwrap_or_else(|| Self::new(env!("CARGO_MANIFEST_DIR")))
    }

    pub fn intermediate_path(&self) -> PathBuf {
        self.root
            .join("data")
            .join(format!("{}_to_{}.csv", LCID_HEADER, LANG_TAG_HEADER))
    }

    pub fn rust_module_path(&self) -> PathBuf {
        self.root.join("src").join("generated").join("lcid_data.rs")
    }

    pub fn java_module_path(&self, package: &str) -> PathBuf {
        let mut path = self.root.join("src").join("main").join("java");
        for segment in package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.join("Data.java")
    }
}
