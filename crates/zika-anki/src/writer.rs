use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;

/// Open `path` for a full rewrite, discarding whatever file is already there
pub fn create_output(path: &Path) -> io::Result<BufWriter<File>> {
    if path.exists() {
        tracing::info!("Removing stale output file: {}", path.display());
        fs::remove_file(path)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_stale_output_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.txt");
        fs::write(&path, "old 1\nold 2\nold 3\n").unwrap();

        let mut out = create_output(&path).unwrap();
        writeln!(out, "new").unwrap();
        out.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_directory_is_not_removed() {
        let dir = tempfile::tempdir().unwrap();
        assert!(create_output(dir.path()).is_err());
        assert!(dir.path().is_dir());
    }
}
