//! Persisting rendered files.

use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use log::{info, warn};

use stencil::{Meta, model::File};

/// What happened to each rendered file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Writes rendered files below an output directory.
#[derive(Debug)]
pub struct FileWriter {
    root: PathBuf,
    overwrite: bool,
}

impl FileWriter {
    pub fn new(root: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            root: root.into(),
            overwrite,
        }
    }

    /// Write every file, creating directories as needed.
    ///
    /// A file that already exists is left untouched unless the writer was
    /// created with `overwrite`.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error; files written before it stay on disk.
    /// A file name that is absolute or climbs out of the output directory
    /// fails with [`io::ErrorKind::InvalidInput`] before anything is
    /// written for it.
    pub fn write_all<'a, I>(&self, files: I) -> io::Result<WriteSummary>
    where
        I: IntoIterator<Item = &'a Meta<File, String>>,
    {
        let mut summary = WriteSummary::default();
        for meta in files {
            let path = self.root.join(relative_path(meta.path())?);
            if path.exists() && !self.overwrite {
                warn!(path:% = path.display(); "File exists, skipping (use --overwrite to replace)");
                summary.skipped.push(path);
                continue;
            }

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, meta.result())?;
            info!(path:% = path.display(), bytes = meta.result().len(); "Wrote file");
            summary.written.push(path);
        }
        Ok(summary)
    }
}

/// A file name as a path below the output directory.
fn relative_path(name: &str) -> io::Result<&Path> {
    let path = Path::new(name);
    let escapes = path
        .components()
        .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));
    if escapes || path.as_os_str().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("file name `{name}` must be a relative path inside the output directory"),
        ));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn meta(name: &str, text: &str) -> Meta<File, String> {
        Meta::new(File::of(name), text.to_string())
    }

    #[test]
    fn test_writes_nested_paths() {
        let dir = tempdir().unwrap();
        let writer = FileWriter::new(dir.path(), false);

        let summary = writer.write_all(&[meta("com/acme/A.java", "class A {}\n")]).unwrap();

        let path = dir.path().join("com/acme/A.java");
        assert_eq!(summary.written, vec![path.clone()]);
        assert_eq!(fs::read_to_string(path).unwrap(), "class A {}\n");
    }

    #[test]
    fn test_file_names_cannot_leave_output_dir() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        let writer = FileWriter::new(&out, true);

        for name in ["../escaped/A.java", "com/../../A.java", "/tmp/A.java", ""] {
            let err = writer.write_all(&[meta(name, "class A {}\n")]).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{name}");
        }
        assert!(!dir.path().join("escaped").exists());
        assert!(!out.exists());

        let summary = writer.write_all(&[meta("./com/A.java", "class A {}\n")]).unwrap();
        assert_eq!(summary.written.len(), 1);
    }

    #[test]
    fn test_existing_files_skipped_without_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("A.java");
        fs::write(&path, "original").unwrap();

        let files = [meta("A.java", "replacement")];

        let summary = FileWriter::new(dir.path(), false).write_all(&files).unwrap();
        assert_eq!(summary.skipped, vec![path.clone()]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");

        let summary = FileWriter::new(dir.path(), true).write_all(&files).unwrap();
        assert_eq!(summary.written, vec![path.clone()]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "replacement");
    }
}
