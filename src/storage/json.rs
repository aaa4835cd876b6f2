use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read a JSON document, returning the type's default when the file does not
/// exist yet. Missing files are how every store starts out.
pub fn read_or_default<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Write a JSON document through a temp file + rename so a crash mid-write
/// never leaves a truncated store behind.
pub fn write_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let contents = serde_json::to_string_pretty(value).context("Failed to serialize document")?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_as_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let value: Vec<String> = read_or_default(&path).unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut map = BTreeMap::new();
        map.insert("key".to_string(), 42u32);

        write_atomic(&path, &map).unwrap();
        let restored: BTreeMap<String, u32> = read_or_default(&path).unwrap();
        assert_eq!(restored, map);

        // No temp file left behind
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();

        let result: Result<Vec<String>> = read_or_default(&path);
        assert!(result.is_err());
    }
}
