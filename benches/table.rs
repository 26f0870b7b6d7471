// benches/table.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

use lead_finder::store::Record;
use lead_finder::table::{self, SortDirection, SortState};

fn sample_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            json!({
                "name": format!("Person {}", i % 997),
                "email": format!("person{}@example.com", i),
                "mobile": format!("+47{:09}", i),
                "organization": format!("Org {}", i % 31),
                "website": "www.example.com",
                "seniority": (i % 40),
            })
            .as_object()
            .unwrap()
            .clone()
        })
        .collect()
}

fn bench_table(c: &mut Criterion) {
    let records = sample_records(5_000);
    let sort = SortState { key: Some("name".into()), direction: SortDirection::Asc };

    c.bench_function("sort_5k_by_name", |b| {
        b.iter(|| {
            let rows = table::sort_records(black_box(&records), black_box(&sort));
            black_box(rows.len())
        })
    });

    c.bench_function("classify_row", |b| {
        let row = &records[0];
        b.iter(|| {
            for (_, v) in row.iter() {
                black_box(table::classify(Some(v)));
            }
        })
    });

    c.bench_function("csv_encode_5k", |b| {
        let columns = table::derive_columns(&records);
        b.iter(|| {
            let csv = lead_finder::export::to_csv_string(black_box(&records), &columns);
            black_box(csv.len())
        })
    });
}

criterion_group!(benches, bench_table);
criterion_main!(benches);
