//! # File I/O Module
//!
//! Reading settings and motor tables, and writing export files.
//!
//! - **Atomic saves**: write to `.tmp`, fsync, rename, so an interrupted
//!   write never leaves a half-written export behind
//! - **No retries**: failures are returned as [`CalcError::FileError`]
//!   with the underlying cause
//!
//! ## Example
//!
//! ```rust,no_run
//! use ring_core::calculations::compute;
//! use ring_core::file_io::{load_settings, save_export};
//! use ring_core::inputs::RawInputs;
//! use ring_core::report::format_result;
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("ring.json"))?;
//! let result = compute(&RawInputs::default(), settings.motor_table(), &settings.design)?;
//! save_export(&format_result(&result).export, Path::new("ring_variables.txt"))?;
//! # Ok::<(), ring_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use crate::errors::{CalcError, CalcResult};
use crate::motors::MotorDatabase;
use crate::report::ExportBlock;
use crate::settings::Settings;

/// Temp file path used while writing `path`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `contents` to `path` with atomic write semantics.
///
/// The save process:
/// 1. Write to a temporary file next to the target (`<name>.tmp`)
/// 2. Sync to disk (fsync)
/// 3. Rename over the target (atomic on most filesystems)
pub fn write_text_atomic(path: &Path, contents: &str) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents.as_bytes()).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Save a CAD variable block as UTF-8 text.
///
/// # Example
///
/// ```rust,no_run
/// use ring_core::file_io::save_export;
/// use ring_core::report::ExportBlock;
/// use std::path::Path;
///
/// # let block = ExportBlock::default();
/// save_export(&block, Path::new("ring_variables.txt"))?;
/// # Ok::<(), ring_core::errors::CalcError>(())
/// ```
pub fn save_export(block: &ExportBlock, path: &Path) -> CalcResult<()> {
    write_text_atomic(path, &block.to_string())?;
    info!(path = %path.display(), lines = block.lines.len(), "export block saved");
    Ok(())
}

fn read_to_string(path: &Path) -> CalcResult<String> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    Ok(contents)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let contents = read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

/// Load a settings file.
///
/// # Returns
///
/// * `Ok(Settings)` - missing fields take their defaults
/// * `Err(CalcError::SerializationError)` - invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_settings(path: &Path) -> CalcResult<Settings> {
    let settings: Settings = load_json(path)?;
    info!(path = %path.display(), custom_motors = settings.motors.is_some(), "settings loaded");
    Ok(settings)
}

/// Load a standalone motor table file.
pub fn load_motor_database(path: &Path) -> CalcResult<MotorDatabase> {
    let db: MotorDatabase = load_json(path)?;
    info!(path = %path.display(), entries = db.len(), "motor table loaded");
    Ok(db)
}

/// Serialize any value as pretty JSON to `path`.
pub fn save_json<T: serde::Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_text_atomic(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motors::MotorTable;
    use crate::settings::DesignConstants;
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("ringconfig_test_{}", name))
    }

    #[test]
    fn test_tmp_path_generation() {
        let tmp = tmp_path_for(Path::new("/path/to/ring.txt"));
        assert_eq!(tmp, Path::new("/path/to/ring.txt.tmp"));
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic.txt");
        write_text_atomic(&path, "#ring_OD = 2041 mm").unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "#ring_OD = 2041 mm");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let path = temp_path("no_such_dir").join("nested").join("ring.txt");
        let err = write_text_atomic(&path, "x").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_settings_roundtrip() {
        let path = temp_path("settings.json");
        let settings = Settings {
            design: DesignConstants {
                motor_offset_factor: 0.35,
                ..DesignConstants::default()
            },
            motors: Some(MotorDatabase::from_pairs([("28", 290.0)])),
        };
        save_json(&settings, &path).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.motor_table().max_thrust_n("28"), Some(290.0));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_motor_database() {
        let path = temp_path("motors.json");
        fs::write(&path, r#"{ "entries": { "26": { "max_thrust_n": 275.0 } } }"#).unwrap();

        let db = load_motor_database(&path).unwrap();
        assert_eq!(db.max_thrust_n("26"), Some(275.0));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let path = temp_path("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let err = load_motor_database(&temp_path("does_not_exist.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
