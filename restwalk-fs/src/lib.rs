//! Filesystem helpers for writing planner output, built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Create (or truncate) `path` for writing, creating missing parent directories.
///
/// # Errors
///
/// Returns [`io::ErrorKind::InvalidInput`] when `path` has no file name, and
/// any error from creating the directories or the file.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path} should include a file name"),
        )
    })?;
    open_parent_dir(path)?.create(file_name)
}

/// Open the directory holding `path`, creating it first when missing.
fn open_parent_dir(path: &Utf8Path) -> io::Result<fs_utf8::Dir> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    fs_utf8::Dir::create_ambient_dir_all(parent, ambient_authority())?;
    fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use std::io::Write;
    use tempfile::TempDir;

    #[fixture]
    fn workspace() -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 tempdir");
        (tmp, root)
    }

    #[rstest]
    fn create_utf8_file_creates_missing_parents(workspace: (TempDir, Utf8PathBuf)) {
        let (_tmp, root) = workspace;
        let target = root.join("maps/hong-kong/view.json");

        let mut file = create_utf8_file(&target).expect("file should be created");
        file.write_all(b"{}").expect("write");
        drop(file);

        let written = std::fs::read_to_string(target.as_std_path()).expect("read back");
        assert_eq!(written, "{}");
    }

    #[rstest]
    fn create_utf8_file_truncates_existing_content(workspace: (TempDir, Utf8PathBuf)) {
        let (_tmp, root) = workspace;
        let target = root.join("view.json");
        std::fs::write(target.as_std_path(), "stale content").expect("seed file");

        let mut file = create_utf8_file(&target).expect("file should open");
        file.write_all(b"[]").expect("write");
        drop(file);

        let written = std::fs::read_to_string(target.as_std_path()).expect("read back");
        assert_eq!(written, "[]");
    }

    #[rstest]
    fn open_parent_dir_falls_back_to_current_dir_for_bare_names() {
        let dir = open_parent_dir(Utf8Path::new("view.json")).expect("current dir should open");
        assert!(dir.exists("."));
    }

    #[rstest]
    #[case::root("/")]
    #[case::parent_reference("maps/..")]
    fn create_utf8_file_rejects_paths_without_file_name(#[case] path: &str) {
        let err = create_utf8_file(Utf8Path::new(path)).expect_err("no file name to create");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
