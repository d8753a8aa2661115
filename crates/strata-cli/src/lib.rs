//! # strata-cli — CLI Tool for the Strata Content Toolchain
//!
//! Provides the `strata` command-line interface: schema-level checks a
//! site author runs locally and in CI, before the site framework ever
//! touches the content tree.
//!
//! ## Subcommands
//!
//! - `strata validate` — Validate content entries against their
//!   collection schemas.
//! - `strata schema` — Inspect and export the compiled collection
//!   schemas.
//!
//! A build that validates cleanly here will not be rejected by the
//! content pipeline's schema pass; a build that fails lists every
//! offending entry with field-level detail.

pub mod config;
pub mod schema;
pub mod validate;

use std::path::{Path, PathBuf};

/// Resolve a path that may be relative to the site root.
///
/// If the path is absolute, returns it as-is. If relative and the file
/// exists relative to `site_root`, uses that. Otherwise returns the path
/// relative to the current directory.
pub fn resolve_path(path: &Path, site_root: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let root_relative = site_root.join(path);
    if root_relative.exists() {
        root_relative
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_path_passes_through() {
        let resolved = resolve_path(Path::new("/etc/hosts"), Path::new("/srv/site"));
        assert_eq!(resolved, PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn relative_path_resolves_against_root_when_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("content")).unwrap();
        std::fs::write(dir.path().join("content/a.md"), "x").unwrap();

        let resolved = resolve_path(Path::new("content/a.md"), dir.path());
        assert_eq!(resolved, dir.path().join("content/a.md"));
    }

    #[test]
    fn relative_path_falls_back_to_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_path(Path::new("nowhere/b.md"), dir.path());
        assert_eq!(resolved, PathBuf::from("nowhere/b.md"));
    }
}
