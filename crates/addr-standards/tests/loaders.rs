//! Dictionary file loading.

use std::io::Write;

use addr_standards::{DictionaryFormat, FrequencyDictionary, StandardsError};
use tempfile::NamedTempFile;

fn dictionary_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{contents}").expect("write dictionary");
    file
}

#[test]
fn load_reads_term_count_lines() {
    let file = dictionary_file("springfield 4200\nshelbyville 120\n");

    let dictionary =
        FrequencyDictionary::load(file.path(), &DictionaryFormat::default()).expect("load");

    assert_eq!(dictionary.len(), 2);
    assert_eq!(dictionary.count("shelbyville"), Some(120));
    assert_eq!(dictionary.source(), file.path().display().to_string());
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.txt");

    let err = FrequencyDictionary::load(&path, &DictionaryFormat::default()).unwrap_err();

    assert!(matches!(err, StandardsError::Io { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn load_without_entries_is_rejected() {
    let file = dictionary_file("no counts here\n\n");

    let err = FrequencyDictionary::load(file.path(), &DictionaryFormat::default()).unwrap_err();

    assert!(matches!(err, StandardsError::EmptyDictionary { .. }));
}
