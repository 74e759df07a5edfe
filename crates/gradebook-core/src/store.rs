//! Flat-file record store.
//!
//! One record per line, `name,score_text,grade`, no header and no quoting.
//! Every call reopens the backing file and reads or writes it in full.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::model::Record;

/// Reads and writes [`Record`]s to a comma-separated text file.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Bind a store to `path`, creating an empty file if none exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self { path: path.into() };
        store.ensure_exists()?;
        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every well-formed record in file order.
    ///
    /// Lines with fewer than two fields are skipped; a line with exactly two
    /// fields gets an empty grade; fields past the third are ignored.
    pub fn load(&self) -> Result<Vec<Record>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.ensure_exists()?;
                String::new()
            }
            Err(e) => return Err(StoreError::io("read", &self.path, e)),
        };

        let records = parse_records(&content);
        tracing::debug!(
            "loaded {} record(s) from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    /// Replace the file contents with exactly `records`.
    ///
    /// Nothing is written if any field contains a comma or a line break.
    pub fn save(&self, records: &[Record]) -> Result<(), StoreError> {
        check_representable(records)?;
        fs::write(&self.path, format_records(records))
            .map_err(|e| StoreError::io("write", &self.path, e))?;
        tracing::debug!(
            "saved {} record(s) to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Truncate the file to zero bytes. The file itself is kept.
    pub fn clear(&self) -> Result<(), StoreError> {
        fs::write(&self.path, b"").map_err(|e| StoreError::io("clear", &self.path, e))?;
        tracing::debug!("cleared {}", self.path.display());
        Ok(())
    }

    /// Load, push `record` on the end, and save.
    pub fn append(&self, record: Record) -> Result<(), StoreError> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)
    }

    fn ensure_exists(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StoreError::io("create", parent, e))?;
            }
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io("create", &self.path, e))?;
        Ok(())
    }
}

/// Name of the character in `text` that would break the line format, if any.
pub fn unrepresentable_char(text: &str) -> Option<&'static str> {
    text.chars().find_map(|c| match c {
        ',' => Some("comma"),
        '\n' | '\r' => Some("line break"),
        _ => None,
    })
}

/// Reject any record whose fields cannot round-trip through the file.
pub fn check_representable(records: &[Record]) -> Result<(), StoreError> {
    for (index, r) in records.iter().enumerate() {
        let fields = [("name", &r.name), ("score", &r.score_text), ("grade", &r.grade)];
        for (field, text) in fields {
            if let Some(found) = unrepresentable_char(text) {
                return Err(StoreError::UnrepresentableField {
                    index,
                    field,
                    found,
                });
            }
        }
    }
    Ok(())
}

/// Parse file contents into records.
pub fn parse_records(content: &str) -> Vec<Record> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Record> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.split(',');
    let name = fields.next()?;
    let Some(score_text) = fields.next() else {
        if !line.is_empty() {
            tracing::warn!("dropping malformed record line: {line:?}");
        }
        return None;
    };
    let grade = fields.next().unwrap_or("");
    Some(Record::new(name, score_text, grade))
}

/// Format records as file contents, one line each.
pub fn format_records(records: &[Record]) -> String {
    let mut out = String::new();
    for r in records {
        out.push_str(&r.name);
        out.push(',');
        out.push_str(&r.score_text);
        out.push(',');
        out.push_str(&r.grade);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path().join("students.csv")).unwrap();
        (dir, store)
    }

    #[test]
    fn open_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("students.csv");
        let store = RecordStore::open(&path).unwrap();
        assert!(path.exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_recreates_deleted_file() {
        let (_dir, store) = temp_store();
        fs::remove_file(store.path()).unwrap();
        assert!(store.load().unwrap().is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let (_dir, store) = temp_store();
        let records = vec![
            Record::new("Jane Doe", "91.50", "A"),
            Record::new("Bo", "bad", ""),
            Record::new("Jane Doe", "60", "D"),
            Record::new("", "", ""),
        ];
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn save_replaces_previous_contents() {
        let (_dir, store) = temp_store();
        store
            .save(&[Record::new("Amy", "95", "A"), Record::new("Bo", "50", "F")])
            .unwrap();
        store.save(&[Record::new("Cy", "75", "C")]).unwrap();
        assert_eq!(store.load().unwrap(), vec![Record::new("Cy", "75", "C")]);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "Cy,75,C\n");
    }

    #[test]
    fn load_pads_two_field_lines_and_drops_one_field_lines() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "Amy,95\nlonely\n\nBo,80,B,extra\r\n").unwrap();
        assert_eq!(
            store.load().unwrap(),
            vec![Record::ungraded("Amy", "95"), Record::new("Bo", "80", "B")]
        );
    }

    #[test]
    fn clear_truncates_but_keeps_file() {
        let (_dir, store) = temp_store();
        store.save(&[Record::new("Amy", "95", "A")]).unwrap();
        store.clear().unwrap();
        assert!(store.path().exists());
        assert_eq!(fs::metadata(store.path()).unwrap().len(), 0);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn append_keeps_insertion_order() {
        let (_dir, store) = temp_store();
        store.append(Record::ungraded("Amy", "95")).unwrap();
        store.append(Record::ungraded("Bo", "bad")).unwrap();
        assert_eq!(
            store.load().unwrap(),
            vec![Record::ungraded("Amy", "95"), Record::ungraded("Bo", "bad")]
        );
    }

    #[test]
    fn save_refuses_line_breaks_and_keeps_old_contents() {
        let (_dir, store) = temp_store();
        store.save(&[Record::new("Amy", "95", "A")]).unwrap();

        let err = store
            .save(&[Record::new("Amy\nBo", "90", ""), Record::new("Cy", "80", "B")])
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnrepresentableField {
                index: 0,
                field: "name",
                found: "line break"
            }
        ));

        let err = store
            .save(&[Record::new("Amy", "90", ""), Record::new("Cy", "80", "B\r")])
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnrepresentableField {
                index: 1,
                field: "grade",
                ..
            }
        ));

        assert_eq!(store.load().unwrap(), vec![Record::new("Amy", "95", "A")]);
    }

    #[test]
    fn save_refuses_commas() {
        let (_dir, store) = temp_store();
        let err = store.save(&[Record::new("Doe, Jane", "90", "")]).unwrap_err();
        assert!(err.to_string().contains("comma"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn unrepresentable_char_names_the_problem() {
        assert_eq!(unrepresentable_char("Jane Doe"), None);
        assert_eq!(unrepresentable_char("a,b"), Some("comma"));
        assert_eq!(unrepresentable_char("a\r\nb"), Some("line break"));
    }

    #[test]
    fn load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore {
            path: dir.path().to_path_buf(),
        };
        assert!(matches!(store.load(), Err(StoreError::Io { .. })));
    }
}
