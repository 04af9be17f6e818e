//! Resolve a user-supplied HAR name to a file path.

use std::path::{Path, PathBuf};

const HAR_EXTENSION: &str = "har";

/// Resolve `input` to a HAR file path.
///
/// An existing path wins. Otherwise, with a `har_dir`, tries `har_dir/input`
/// and then `har_dir/input.har`. When nothing exists the input is returned
/// unchanged so the loader reports it as not found.
pub fn resolve_har_path(input: &str, har_dir: Option<&Path>) -> PathBuf {
    let direct = PathBuf::from(input);
    if direct.is_file() {
        return direct;
    }

    if let Some(dir) = har_dir {
        let joined = dir.join(input);
        if joined.is_file() {
            return joined;
        }
        let with_ext = dir.join(format!("{input}.{HAR_EXTENSION}"));
        if with_ext.is_file() {
            return with_ext;
        }
    }

    direct
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_path_is_used_as_is() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let input = f.path().to_str().unwrap();
        assert_eq!(resolve_har_path(input, None), f.path());
    }

    #[test]
    fn bare_name_resolves_with_extension_under_har_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("session.har");
        std::fs::write(&target, "{}").unwrap();
        assert_eq!(resolve_har_path("session", Some(dir.path())), target);
    }

    #[test]
    fn name_with_extension_resolves_under_har_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("capture.har");
        std::fs::write(&target, "{}").unwrap();
        assert_eq!(resolve_har_path("capture.har", Some(dir.path())), target);
    }

    #[test]
    fn unresolved_name_is_returned_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_har_path("nope", Some(dir.path())),
            PathBuf::from("nope")
        );
    }
}
