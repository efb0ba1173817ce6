//! File I/O utilities with atomic writes
//!
//! Writes go to a temp file in the same directory which is then renamed over
//! the target, so a crash leaves either the old or the new file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::RecordStoreError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, RecordStoreError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| RecordStoreError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| RecordStoreError::corrupt(path.display().to_string(), e.to_string()))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), RecordStoreError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path.as_ref(), |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| RecordStoreError::Io(format!("Failed to serialize data: {}", e)))
    })
}

/// Read every row of a CSV file, returning no rows if the file doesn't exist
pub fn read_csv<T, P>(path: P) -> Result<Vec<T>, RecordStoreError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| RecordStoreError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| RecordStoreError::corrupt(path.display().to_string(), e.to_string()))
}

/// Write rows to a CSV file atomically, header included
pub fn write_csv_atomic<T, P>(path: P, rows: &[T]) -> Result<(), RecordStoreError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path.as_ref(), |writer| {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in rows {
            csv_writer
                .serialize(row)
                .map_err(|e| RecordStoreError::Io(format!("Failed to serialize row: {}", e)))?;
        }
        csv_writer
            .flush()
            .map_err(|e| RecordStoreError::Io(format!("Failed to flush rows: {}", e)))
    })
}

fn write_atomic<F>(path: &Path, write: F) -> Result<(), RecordStoreError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), RecordStoreError>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            RecordStoreError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| RecordStoreError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    write(&mut writer)?;

    writer
        .flush()
        .map_err(|e| RecordStoreError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| RecordStoreError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        RecordStoreError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: TestData = read_json(&path).unwrap();
        assert_eq!(data, TestData::default());

        let rows: Vec<TestData> = read_csv(temp_dir.path().join("missing.csv")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_write_and_read_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).unwrap();
        assert!(path.exists());
        assert!(!temp_dir.path().join("nested").join("test.json.tmp").exists());

        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_write_and_read_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");

        let rows = vec![
            TestData {
                name: "a".into(),
                value: 1,
            },
            TestData {
                name: "b, with comma".into(),
                value: 2,
            },
        ];

        write_csv_atomic(&path, &rows).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("name,value"));

        let loaded: Vec<TestData> = read_csv(&path).unwrap();
        assert_eq!(loaded, rows);
    }

    #[test]
    fn test_corrupt_json_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<TestData, _>(&path).unwrap_err();
        assert!(matches!(err, RecordStoreError::Corrupt { .. }));
    }
}
