//! File I/O utilities for pipe-delimited record files
//!
//! Each record is one line with fields joined by `|`. Writes can go through
//! a temp file and rename so that a crash never leaves a truncated file.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Field separator used by all data files
pub const FIELD_SEPARATOR: char = '|';

/// Records read from a data file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedRecords {
    /// Well-formed records, in file order
    pub records: Vec<Vec<String>>,
    /// Non-blank lines dropped for having the wrong field count
    pub skipped: usize,
}

/// Read records with exactly `expected_fields` fields
///
/// A missing file yields no records. Lines are trimmed before splitting;
/// blank lines are ignored and lines with any other field count are skipped.
pub fn read_records<P: AsRef<Path>>(
    path: P,
    expected_fields: usize,
) -> Result<LoadedRecords, ExpenseError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(LoadedRecords::default());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(parse_records(&contents, expected_fields))
}

/// Split text into records with exactly `expected_fields` fields
pub fn parse_records(contents: &str, expected_fields: usize) -> LoadedRecords {
    let mut loaded = LoadedRecords::default();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<String> = line.split(FIELD_SEPARATOR).map(str::to_string).collect();
        if fields.len() == expected_fields {
            loaded.records.push(fields);
        } else {
            loaded.skipped += 1;
        }
    }

    loaded
}

/// Render records as file contents, one line per record
pub fn render_records<R, F>(records: R) -> String
where
    R: IntoIterator<Item = Vec<F>>,
    F: AsRef<str>,
{
    let mut output = String::new();
    for record in records {
        let line: Vec<&str> = record.iter().map(|field| field.as_ref()).collect();
        output.push_str(&line.join("|"));
        output.push('\n');
    }
    output
}

/// Write text to a file, atomically if requested
pub fn write_text<P: AsRef<Path>>(path: P, contents: &str, atomic: bool) -> Result<(), ExpenseError> {
    if atomic {
        write_text_atomic(path, contents)
    } else {
        write_text_in_place(path, contents)
    }
}

/// Overwrite a file in place
pub fn write_text_in_place<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ExpenseError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    fs::write(path, contents)
        .map_err(|e| ExpenseError::Storage(format!("Failed to write {}: {}", path.display(), e)))
}

/// Write a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ExpenseError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| ExpenseError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn ensure_parent(path: &Path) -> Result<(), ExpenseError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = read_records(temp_dir.path().join("missing.txt"), 4).unwrap();
        assert!(loaded.records.is_empty());
        assert_eq!(loaded.skipped, 0);
    }

    #[test]
    fn test_parse_skips_wrong_field_counts() {
        let contents = "a|1.0|b|t\nbroken line\n\nc|2.0|d|t|extra\n  e|3.0|f|t  \n";
        let loaded = parse_records(contents, 4);

        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.records[1], vec!["e", "3.0", "f", "t"]);
        assert_eq!(loaded.skipped, 2);
    }

    #[test]
    fn test_render_records() {
        let text = render_records(vec![vec!["Food", "10.0"], vec!["Rent", "0.0"]]);
        assert_eq!(text, "Food|10.0\nRent|0.0\n");
        assert_eq!(render_records(Vec::<Vec<String>>::new()), "");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        write_text_atomic(&path, "a|1.0|b|t\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a|1.0|b|t\n");
        assert!(!temp_dir.path().join("expenses.txt.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("budgets.txt");

        write_text(&path, "Food|0.0\n", false).unwrap();
        assert!(path.exists());

        write_text(&path, "Food|5.0\n", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Food|5.0\n");
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.txt");

        let text = render_records(vec![vec!["Food", "12.5"]]);
        write_text(&path, &text, true).unwrap();

        let loaded = read_records(&path, 2).unwrap();
        assert_eq!(loaded.records, vec![vec!["Food".to_string(), "12.5".to_string()]]);
    }
}
