use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{load_table, InputError, ResponseTable};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("wtc_prepost_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    let file = File::create(path).unwrap();
    let mut enc = GzEncoder::new(file, Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

fn table(columns: &[&str], rows: &[&[&str]]) -> ResponseTable {
    ResponseTable {
        columns: columns.iter().map(|s| s.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect(),
    }
}

#[test]
fn test_load_plain_csv() {
    let dir = make_temp_dir();
    let path = dir.join("pre.csv");
    write_file(
        &path,
        "Respondent ID,英語で話す自信,緊張の程度\nR1,多分できる,緊張しない\nR2,絶対できない,すごく緊張する\n",
    );
    let t = load_table(&path).unwrap();
    assert_eq!(t.columns.len(), 3);
    assert_eq!(t.n_rows(), 2);
    assert_eq!(t.rows[0][1], "多分できる");
}

#[test]
fn test_load_gzipped_csv() {
    let dir = make_temp_dir();
    let path = dir.join("pre.csv.gz");
    write_gz(&path, "id,自信\n1,多分できる\n");
    let t = load_table(&path).unwrap();
    assert_eq!(t.n_rows(), 1);
    assert_eq!(t.rows[0][1], "多分できる");
}

#[test]
fn test_missing_file_is_missing_input() {
    let dir = make_temp_dir();
    let err = load_table(&dir.join("nope.csv")).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_empty_file_is_parse_error() {
    let dir = make_temp_dir();
    let path = dir.join("empty.csv");
    write_file(&path, "");
    let err = load_table(&path).unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
}

#[test]
fn test_blank_header_is_invalid_input() {
    let dir = make_temp_dir();
    let path = dir.join("blank.csv");
    write_file(&path, ",,\n1,2,3\n");
    let err = load_table(&path).unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
}

#[test]
fn test_blank_rows_skipped_and_short_rows_padded() {
    let dir = make_temp_dir();
    let path = dir.join("pre.csv");
    write_file(&path, "a,b,c\n1,2,3\n,,\n4,5\n");
    let t = load_table(&path).unwrap();
    assert_eq!(t.n_rows(), 2);
    assert_eq!(t.rows[1], vec!["4", "5", ""]);
}

#[test]
fn test_columns_containing_is_case_sensitive_containment() {
    let t = table(&["英語で話す自信", "自信度", "緊張", "other"], &[]);
    assert_eq!(t.columns_containing("自信"), vec![0, 1]);
    assert_eq!(t.columns_containing("やる気"), Vec::<usize>::new());
}

#[test]
fn test_respondent_labels() {
    let t = table(
        &["Respondent ID", "自信"],
        &[&["R7", "多分できる"], &["", "絶対できない"]],
    );
    assert_eq!(t.respondent_label(0), "R7");
    // blank identifier falls back to the 1-based row number
    assert_eq!(t.respondent_label(1), "2");

    let no_id = table(&["自信"], &[&["多分できる"]]);
    assert_eq!(no_id.respondent_label(0), "1");
}
