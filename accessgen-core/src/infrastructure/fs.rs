use crate::infrastructure::error::InfrastructureError;
use std::path::Path;

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Produce a file atomically through a temporary sibling.
///
/// `fill` receives the temporary path and must leave the final content there.
/// The temporary file is then renamed over `path`, so readers see either the
/// previous file or the complete new one.
pub fn atomic_write_with<P, F>(path: P, fill: F) -> Result<(), InfrastructureError>
where
    P: AsRef<Path>,
    F: FnOnce(&Path) -> Result<(), InfrastructureError>,
{
    let path = path.as_ref();
    let parent = parent_dir(path);
    if !parent.exists() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_file = tempfile::Builder::new()
        .prefix(".accessgen-")
        .suffix(".tmp")
        .tempfile_in(parent)?;

    fill(temp_file.path())?;

    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    fn atomic_write(path: &Path, content: &str) -> Result<(), InfrastructureError> {
        atomic_write_with(path, |tmp| {
            fs::write(tmp, content)?;
            Ok(())
        })
    }

    #[test]
    fn test_atomic_write_creates_file() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("test.txt");
        let content = "Hello, World!";

        atomic_write(&file_path, content)?;

        assert!(file_path.exists());
        let read_content = fs::read_to_string(file_path)?;
        assert_eq!(read_content, content);
        Ok(())
    }

    #[test]
    fn test_atomic_write_overwrites_existing() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("test.txt");

        atomic_write(&file_path, "Initial")?;
        atomic_write(&file_path, "Updated")?;

        let read_content = fs::read_to_string(file_path)?;
        assert_eq!(read_content, "Updated");
        Ok(())
    }

    #[test]
    fn test_failed_fill_leaves_target_untouched() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("keep.txt");
        atomic_write(&file_path, "original")?;

        let result = atomic_write_with(&file_path, |_| {
            Err(InfrastructureError::ConfigError("boom".into()))
        });
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&file_path)?, "original");

        let leftovers = fs::read_dir(dir.path())?
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
        Ok(())
    }

    #[test]
    fn test_creates_missing_parent_directories() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("nested/deeper/out.csv");
        atomic_write(&file_path, "a,b\n")?;
        assert!(file_path.exists());
        Ok(())
    }
}
