use criterion::{Criterion, black_box, criterion_group, criterion_main};
use refine::filter::{filter_cols, filter_rows};
use refine::rules::Rule;
use refine::value::{Cell, Table};

fn make_table(rows: usize) -> Table {
    Table::from_rows(
        (0..rows)
            .map(|i| {
                vec![
                    Cell::Text(format!("id{}", i)),
                    Cell::Text("keep".to_string()),
                    Cell::Text(if i % 10 == 0 { "drop" } else { "keep" }.to_string()),
                ]
            })
            .collect(),
    )
}

fn rules(json: &str) -> Vec<Rule> {
    serde_json::from_str(json).unwrap()
}

fn bench_filter_rows(c: &mut Criterion) {
    let small = make_table(100);
    let medium = make_table(10_000);
    let large = make_table(100_000);
    let rule_list = rules(
        r#"[
            {"col": 2, "val": "drop"},
            {"index": ">=99999999"},
            {"allOf": [{"col": 1, "val": "keep"}, {"col": 2, "val": "drop"}]}
        ]"#,
    );

    c.bench_function("filter_rows_100", |b| {
        b.iter(|| black_box(filter_rows(&small, &rule_list)))
    });

    c.bench_function("filter_rows_10k", |b| {
        b.iter(|| black_box(filter_rows(&medium, &rule_list)))
    });

    c.bench_function("filter_rows_100k", |b| {
        b.iter(|| black_box(filter_rows(&large, &rule_list)))
    });
}

fn bench_filter_cols(c: &mut Criterion) {
    let small = make_table(100);
    let medium = make_table(10_000);
    let large = make_table(100_000);
    let rule_list = rules(r#"[{"row": "any", "val": "drop"}, {"index": 1}]"#);

    c.bench_function("filter_cols_100", |b| {
        b.iter(|| black_box(filter_cols(&small, &rule_list)))
    });

    c.bench_function("filter_cols_10k", |b| {
        b.iter(|| black_box(filter_cols(&medium, &rule_list)))
    });

    c.bench_function("filter_cols_100k", |b| {
        b.iter(|| black_box(filter_cols(&large, &rule_list)))
    });
}

criterion_group!(benches, bench_filter_rows, bench_filter_cols);
criterion_main!(benches);
