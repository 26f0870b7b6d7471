// src/export.rs
//
// CSV export of the cached record set. Encoding is pure (bytes in a
// String); writing the dated file is the only side effect. Export always
// uses the full, unsorted record set, independent of the on-screen sort.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;

use crate::config::consts::EXPORT_PREFIX;
use crate::error::ExportError;
use crate::store::Record;

/* ---------------- Encoding ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer, quoting where required and
/// doubling embedded quotes.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Text form of one field. Strings pass through untouched, null and
/// missing print empty, anything non-scalar prints as compact JSON.
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => s!(),
        Some(Value::String(s)) => s!(s),
        Some(other) => other.to_string(),
    }
}

/// Encode the record set as CSV, with `columns` as both the header row and
/// the field order of every data row.
pub fn to_csv_string(records: &[Record], columns: &[String]) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let _ = write_row(&mut buf, columns);
    for record in records {
        let row: Vec<String> =
            columns.iter().map(|col| field_text(record.get(col))).collect();
        let _ = write_row(&mut buf, &row);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- File side effect ---------------- */

/// `data_export_YYYYMMDD.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("{EXPORT_PREFIX}_{}.csv", date.format("%Y%m%d"))
}

/// Encode and write the dated export file into `out_dir`.
/// An empty record set is an error up front; no file is touched.
pub fn export_csv(
    records: &[Record],
    columns: &[String],
    out_dir: &Path,
) -> Result<PathBuf, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoData);
    }

    let path = out_dir.join(export_filename(chrono::Local::now().date_naive()));
    let contents = to_csv_string(records, columns);

    fs::create_dir_all(out_dir)
        .and_then(|_| fs::write(&path, contents))
        .map_err(|source| ExportError::Write { path: path.clone(), source })?;

    logf!("Export: OK → {}", path.display());
    Ok(path)
}
