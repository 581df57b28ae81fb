//! CSV reading and writing via Polars.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvReadOptions, CsvWriter, DataFrame, PolarsError, SerReader, SerWriter};
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};

/// Read a CSV file with a header row, keeping every column as text.
///
/// Reading everything as strings keeps leading zeros in codes and leaves
/// pass-through columns byte-for-byte intact. Empty cells become nulls.
///
/// # Errors
///
/// - [`IngestError::FileNotFound`] when `path` is not an existing file.
/// - [`IngestError::EmptyCsv`] when the file has no header or no data rows.
/// - [`IngestError::MissingColumn`] when a `required_columns` entry is absent.
/// - [`IngestError::CsvParse`] for any other read failure.
pub fn read_csv_table(path: &Path, required_columns: &[&str]) -> Result<DataFrame> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    if !metadata.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| read_error(path, e))?
        .finish()
        .map_err(|e| read_error(path, e))?;

    if df.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    for column in required_columns {
        if df.column(column).is_err() {
            return Err(IngestError::MissingColumn {
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read CSV"
    );
    Ok(df)
}

fn read_error(path: &Path, err: PolarsError) -> IngestError {
    match err {
        PolarsError::NoData(_) => IngestError::EmptyCsv {
            path: path.to_path_buf(),
        },
        other => IngestError::CsvParse {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}

/// Write `df` as CSV with a header row. Nulls are written as empty fields.
///
/// The table is written to a sibling `<name>.tmp` file that is renamed over
/// `path` once complete, so a failed write leaves any existing file intact.
pub fn write_csv_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    let temp_path = temp_path_for(path);
    let mut file = File::create(&temp_path).map_err(|source| IngestError::FileWrite {
        path: temp_path.clone(),
        source,
    })?;

    let written = CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|e| IngestError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        });
    let written = written.and_then(|()| {
        file.sync_all().map_err(|source| IngestError::FileWrite {
            path: temp_path.clone(),
            source,
        })
    });
    drop(file);

    let renamed = written.and_then(|()| {
        fs::rename(&temp_path, path).map_err(|source| IngestError::AtomicWrite {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source,
        })
    });
    if let Err(err) = renamed {
        if let Err(cleanup) = fs::remove_file(&temp_path) {
            warn!(path = %temp_path.display(), error = %cleanup, "failed to remove temp file");
        }
        return Err(err);
    }

    debug!(path = %path.display(), rows = df.height(), "wrote CSV");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_keeps_leading_zeros() {
        let file = create_temp_csv("street,city,state,zip\n1 Oak Rd,Boston,MA,02110\n");
        let df = read_csv_table(file.path(), &["zip"]).unwrap();

        let zip = df.column("zip").unwrap().str().unwrap();
        assert_eq!(zip.get(0), Some("02110"));
    }

    #[test]
    fn test_read_empty_cells_are_null() {
        let file = create_temp_csv("street,city,state,zip\n1 Oak Rd,,MA,\n");
        let df = read_csv_table(file.path(), &[]).unwrap();

        assert_eq!(df.column("city").unwrap().null_count(), 1);
        assert_eq!(df.column("zip").unwrap().null_count(), 1);
    }

    #[test]
    fn test_read_header_only_is_empty() {
        let file = create_temp_csv("street,city,state,zip\n");
        let err = read_csv_table(file.path(), &[]).unwrap_err();
        assert!(matches!(err, IngestError::EmptyCsv { .. }));
    }

    #[test]
    fn test_temp_path_is_a_sibling() {
        assert_eq!(
            temp_path_for(Path::new("/data/out.csv")),
            PathBuf::from("/data/out.csv.tmp")
        );
        assert_eq!(temp_path_for(Path::new("out")), PathBuf::from("out.tmp"));
    }

    #[test]
    fn test_read_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_csv_table(dir.path(), &[]).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
