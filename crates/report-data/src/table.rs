// File: crates/report-data/src/table.rs
// Summary: Tabular view over a dataset and CSV export.

use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// A dataset seen as a header row plus string cells.
pub trait Table {
    fn headers(&self) -> Vec<&'static str>;
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Write `table` as CSV (header first) to `writer`.
pub fn write_csv<T: Table + ?Sized, W: Write>(table: &T, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(table.headers())?;
    for row in table.rows() {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `table` as CSV to `path`, creating parent directories.
pub fn write_csv_file<T: Table + ?Sized>(table: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(path)?;
    write_csv(table, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Two;

    impl Table for Two {
        fn headers(&self) -> Vec<&'static str> { vec!["name", "note"] }
        fn rows(&self) -> Vec<Vec<String>> {
            vec![vec!["a".into(), "x, y".into()], vec!["b".into(), "z".into()]]
        }
    }

    #[test]
    fn csv_quotes_commas() {
        let mut out = Vec::new();
        write_csv(&Two, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "name,note\na,\"x, y\"\nb,z\n");
    }

    #[test]
    fn csv_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/two.csv");
        write_csv_file(&Two, &path).unwrap();
        assert!(std::fs::read_to_string(path).unwrap().starts_with("name,note"));
    }
}
