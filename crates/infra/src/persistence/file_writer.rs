// crates/infra/src/persistence/file_writer.rs
use std::{
    fs,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Write each line followed by `\n`. The file is closed when this returns,
    /// on success and on error alike.
    pub fn write_lines<P: AsRef<Path>>(path: P, lines: &[String]) -> std::io::Result<()> {
        let mut w = Self::create(path)?;
        write_terminated(&mut w, lines)?;
        w.flush()
    }

    /// Atomically write `lines` to `path` via a temp file and rename.
    /// The temp file is removed if any step fails.
    pub fn atomic_write_lines<P: AsRef<Path>>(path: P, lines: &[String]) -> std::io::Result<()> {
        let path = path.as_ref();
        let tmp = temp_path_for(path)?;

        let result = (|| {
            let mut w = Self::create(&tmp)?;
            write_terminated(&mut w, lines)?;
            w.flush()?;
            let _ = w.get_ref().sync_all();
            drop(w);
            fs::rename(&tmp, path)
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp);
            return result;
        }

        // Attempt to sync parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if let Ok(dir) = File::open(parent) {
                    let _ = dir.sync_all();
                }
            }
        }

        Ok(())
    }
}

fn write_terminated<W: Write>(w: &mut W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

// PID + current time nanos keeps the name unique without a retry loop.
fn temp_path_for(path: &Path) -> std::io::Result<PathBuf> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        Some(_) => PathBuf::from("."),
        None => return Err(std::io::Error::other("path has no parent")),
    };
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    Ok(parent.join(format!(".{}.{}.tmp", std::process::id(), nanos)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn writes_one_line_per_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        FileWriter::write_lines(&path, &owned(&["a", "b"])).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
    }

    #[test]
    fn atomic_write_replaces_and_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old\n").unwrap();
        FileWriter::atomic_write_lines(&path, &owned(&["new"])).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn atomic_write_into_missing_dir_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        assert!(FileWriter::atomic_write_lines(&path, &owned(&["x"])).is_err());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
