//! File I/O utilities
//!
//! Readers for the ledger seed formats and an atomic JSON writer used for the
//! settings file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::KakeiboError;

fn open_required(path: &Path) -> Result<BufReader<File>, KakeiboError> {
    if !path.exists() {
        return Err(KakeiboError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| KakeiboError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

/// Read JSON from a file, returning an error if the file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, KakeiboError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = open_required(path)?;
    serde_json::from_reader(reader)
        .map_err(|e| KakeiboError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read YAML from a file, returning an error if the file doesn't exist
pub fn read_yaml_required<T, P>(path: P) -> Result<T, KakeiboError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let reader = open_required(path)?;
    serde_yaml::from_reader(reader)
        .map_err(|e| KakeiboError::Yaml(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), KakeiboError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            KakeiboError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| KakeiboError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| KakeiboError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| KakeiboError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| KakeiboError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        KakeiboError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        value: i64,
    }

    #[test]
    fn test_write_then_read_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sub").join("sample.json");

        let sample = Sample {
            name: "食費".into(),
            value: 360_000,
        };
        write_json_atomic(&path, &sample).unwrap();

        let read: Sample = read_json_required(&path).unwrap();
        assert_eq!(read, sample);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_read_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sample.yaml");
        std::fs::write(&path, "name: rent\nvalue: 100000\n").unwrap();

        let read: Sample = read_yaml_required(&path).unwrap();
        assert_eq!(read.value, 100_000);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result: Result<Sample, _> = read_json_required(temp_dir.path().join("nope.json"));
        assert!(matches!(result, Err(KakeiboError::Storage(_))));
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result: Result<Sample, _> = read_json_required(&path);
        assert!(matches!(result, Err(KakeiboError::Json(_))));
    }
}
