use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::SiteError;

/// Read a UTF-8 file and return its content
pub fn read_file(path: &Path) -> Result<String, SiteError> {
    fs::read_to_string(path).map_err(|source| SiteError::io(path, source))
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SiteError::io(parent, source))?;
    }
    fs::write(path, content).map_err(|source| SiteError::io(path, source))
}

/// Scan for markdown files under `root`, sorted by path
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, SiteError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    let entries = fs::read_dir(dir).map_err(|source| SiteError::io(dir, source))?;

    for entry in entries {
        let entry = entry.map_err(|source| SiteError::io(dir, source))?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Empty `dir`, creating it if it does not exist.
pub fn reset_dir(dir: &Path) -> Result<(), SiteError> {
    if dir.exists() {
        debug!("Cleaning directory: {}", dir.display());
        for entry in fs::read_dir(dir).map_err(|source| SiteError::io(dir, source))? {
            let path = entry.map_err(|source| SiteError::io(dir, source))?.path();
            let removed = if path.is_dir() && !path.is_symlink() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };
            removed.map_err(|source| SiteError::io(&path, source))?;
        }
        Ok(())
    } else {
        debug!("Creating directory: {}", dir.display());
        fs::create_dir_all(dir).map_err(|source| SiteError::io(dir, source))
    }
}

/// Replace the contents of `dest` with a recursive copy of `src`.
///
/// Returns the number of files copied. `dest` is emptied before anything is
/// copied, so files from earlier builds never survive. When `dest` lies
/// inside `src` it is left out of the copy.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    validate_dir(src)?;
    reset_dir(dest)?;

    let skip = dest
        .canonicalize()
        .map_err(|source| SiteError::io(dest, source))?;
    let mut count = 0;
    copy_dir_recursive(src, dest, &skip, &mut count)?;
    Ok(count)
}

fn copy_dir_recursive(
    src_dir: &Path,
    dest_dir: &Path,
    skip: &Path,
    count: &mut usize,
) -> Result<(), SiteError> {
    for entry in fs::read_dir(src_dir).map_err(|source| SiteError::io(src_dir, source))? {
        let src_path = entry.map_err(|source| SiteError::io(src_dir, source))?.path();
        let Some(file_name) = src_path.file_name() else {
            continue;
        };
        let dest_path = dest_dir.join(file_name);

        if src_path.is_dir() {
            if src_path.canonicalize().is_ok_and(|path| path == skip) {
                debug!("Skipping output directory {}", src_path.display());
                continue;
            }
            fs::create_dir_all(&dest_path).map_err(|source| SiteError::io(&dest_path, source))?;
            copy_dir_recursive(&src_path, &dest_path, skip, count)?;
        } else {
            debug!("Copying {} -> {}", src_path.display(), dest_path.display());
            fs::copy(&src_path, &dest_path).map_err(|source| SiteError::io(&src_path, source))?;
            *count += 1;
        }
    }

    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<(), SiteError> {
    if !path.is_dir() {
        return Err(SiteError::MissingDir(path.to_path_buf()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn test_scan_nested_markdown_files() {
        let dir = create_test_dir();
        create_test_file(&dir, "index.md", "# Home");
        create_test_file(&dir, "blog/post.md", "# Post");
        create_test_file(&dir, "blog/image.png", "not markdown");

        let files = scan_markdown_files(dir.path()).unwrap();

        assert_eq!(
            files,
            vec![dir.path().join("blog/post.md"), dir.path().join("index.md")]
        );
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = create_test_dir();
        let missing = dir.path().join("nope");

        let err = scan_markdown_files(&missing).unwrap_err();
        assert!(matches!(err, SiteError::MissingDir(path) if path == missing));
    }

    #[test]
    fn test_copy_static_replaces_dest() {
        let src = create_test_dir();
        create_test_file(&src, "index.css", "body {}");
        create_test_file(&src, "images/logo.png", "png");
        let dest = create_test_dir();
        create_test_file(&dest, "stale.html", "old");
        create_test_file(&dest, "old/nested.txt", "old");

        let copied = copy_static(src.path(), dest.path()).unwrap();

        assert_eq!(copied, 2);
        assert!(!dest.path().join("stale.html").exists());
        assert!(!dest.path().join("old").exists());
        assert_eq!(
            fs::read_to_string(dest.path().join("images/logo.png")).unwrap(),
            "png"
        );
        assert_eq!(
            fs::read_to_string(dest.path().join("index.css")).unwrap(),
            "body {}"
        );
    }

    #[test]
    fn test_copy_static_creates_missing_dest() {
        let src = create_test_dir();
        create_test_file(&src, "a.txt", "a");
        let out = create_test_dir();
        let dest = out.path().join("public/site");

        copy_static(src.path(), &dest).unwrap();

        assert!(dest.join("a.txt").is_file());
    }

    #[test]
    fn test_copy_static_into_own_subdir() {
        let src = create_test_dir();
        create_test_file(&src, "index.css", "body {}");
        create_test_file(&src, "images/logo.png", "png");
        let dest = src.path().join("public");

        let copied = copy_static(src.path(), &dest).unwrap();

        assert_eq!(copied, 2);
        assert!(dest.join("index.css").is_file());
        assert!(dest.join("images/logo.png").is_file());
        assert!(!dest.join("public").exists());
    }

    #[test]
    fn test_copy_static_into_own_subdir_twice() {
        let src = create_test_dir();
        create_test_file(&src, "a.txt", "a");
        let dest = src.path().join("public");

        copy_static(src.path(), &dest).unwrap();
        let copied = copy_static(src.path(), &dest).unwrap();

        assert_eq!(copied, 1);
        assert!(!dest.join("public").exists());
    }

    #[test]
    fn test_copy_static_missing_src() {
        let dir = create_test_dir();
        let err = copy_static(&dir.path().join("static"), &dir.path().join("public")).unwrap_err();
        assert!(matches!(err, SiteError::MissingDir(_)));
        assert!(!dir.path().join("public").exists());
    }

    #[test]
    fn test_write_file_creates_parents() {
        let dir = create_test_dir();
        let path = dir.path().join("a/b/c.html");

        write_file(&path, "<p>x</p>").unwrap();

        assert_eq!(read_file(&path).unwrap(), "<p>x</p>");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = create_test_dir();
        let err = read_file(&dir.path().join("missing.md")).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
        assert!(err.to_string().contains("missing.md"));
    }
}
