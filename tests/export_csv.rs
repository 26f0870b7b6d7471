// tests/export_csv.rs
//
// CSV encoding and the dated export file.

use chrono::NaiveDate;
use serde_json::json;

use lead_finder::error::ExportError;
use lead_finder::export::{export_csv, export_filename, to_csv_string};
use lead_finder::store::Record;
use lead_finder::table::derive_columns;

fn rec(v: serde_json::Value) -> Record {
    v.as_object().expect("object literal").clone()
}

#[test]
fn header_row_and_field_order_follow_columns() {
    let records = vec![
        rec(json!({"name": "Jo", "email": "a@b.com", "city": "Oslo"})),
        rec(json!({"name": "Sam", "email": "s@b.com", "city": "Bergen"})),
    ];
    let columns = derive_columns(&records);
    let csv = to_csv_string(&records, &columns);

    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("name,email,city"));
    assert_eq!(lines.next(), Some("Jo,a@b.com,Oslo"));
    assert_eq!(lines.next(), Some("Sam,s@b.com,Bergen"));
    assert_eq!(lines.next(), None);
}

#[test]
fn fields_are_quoted_and_escaped() {
    let records = vec![rec(json!({
        "org": "Acme, Inc.",
        "motto": "\"go\" fast",
        "notes": "line1\nline2",
    }))];
    let columns = derive_columns(&records);
    let csv = to_csv_string(&records, &columns);

    let body = csv.splitn(2, '\n').nth(1).unwrap();
    assert_eq!(body, "\"Acme, Inc.\",\"\"\"go\"\" fast\",\"line1\nline2\"\n");
}

#[test]
fn null_and_missing_fields_print_empty() {
    let records = vec![
        rec(json!({"name": "Jo", "email": null})),
        rec(json!({"name": "Sam"})),
    ];
    let columns = vec![String::from("name"), String::from("email")];
    let csv = to_csv_string(&records, &columns);

    let mut lines = csv.lines().skip(1);
    assert_eq!(lines.next(), Some("Jo,"));
    assert_eq!(lines.next(), Some("Sam,"));
}

#[test]
fn numbers_and_non_scalars_encode_naturally() {
    let records = vec![rec(json!({"n": 3.5, "flag": true, "tags": ["a", "b"]}))];
    let columns = derive_columns(&records);
    let csv = to_csv_string(&records, &columns);

    let body = csv.lines().nth(1).unwrap();
    assert_eq!(body, "3.5,true,\"[\"\"a\"\",\"\"b\"\"]\"");
}

#[test]
fn encoding_is_idempotent() {
    let records = vec![
        rec(json!({"name": "Jo", "email": "a@b.com"})),
        rec(json!({"name": "Sam", "email": "s@b.com"})),
    ];
    let columns = derive_columns(&records);
    assert_eq!(to_csv_string(&records, &columns), to_csv_string(&records, &columns));
}

#[test]
fn filename_embeds_the_date() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    assert_eq!(export_filename(date), "data_export_20240115.csv");
}

#[test]
fn empty_set_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let result = export_csv(&[], &[String::from("name")], dir.path());

    assert!(matches!(result, Err(ExportError::NoData)));
    // No download side effect.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn export_writes_dated_file_with_full_set() {
    let records = vec![
        rec(json!({"name": "Jo", "email": "a@b.com"})),
        rec(json!({"name": "Sam", "email": "s@b.com"})),
    ];
    let columns = derive_columns(&records);

    let dir = tempfile::tempdir().unwrap();
    let path = export_csv(&records, &columns, dir.path()).unwrap();

    let name = path.file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("data_export_"));
    assert!(name.ends_with(".csv"));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, to_csv_string(&records, &columns));
}
