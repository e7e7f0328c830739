use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use docindex::builder::{IndexBuilder, apply_history};
use docindex::config::IndexConfig;
use docindex::record::DocumentRecord;
use docindex_docs::MemoryStore;
use docindex_git::Commit;
use std::hint::black_box;

const DOCUMENTS: usize = 50;
const COMMITS: usize = 20;

fn sample_store() -> MemoryStore {
    let modified = Utc.with_ymd_and_hms(2024, 1, 5, 6, 4, 5).unwrap();
    (0..DOCUMENTS).fold(MemoryStore::new("src/html"), |store, i| {
        let title = format!("Page {i} : Section {} : {}", i % 5, if i % 7 == 0 { "yet" } else { "" });
        store.with_file(
            &format!("{:02}-page.html", i),
            &format!("<html><head><title>{title}</title></head><body></body></html>"),
            modified,
        )
    })
}

fn sample_commits() -> Vec<Commit> {
    (0..COMMITS)
        .map(|i| Commit {
            sha: format!("{:040x}", i),
            message: format!("Commit {i}"),
            author: "Bench Author".to_string(),
            author_email: "bench@example.com".to_string(),
            timestamp: Utc::now(),
            files: (0..5)
                .map(|j| format!("src/html/{:02}-page.html", (i * 3 + j) % DOCUMENTS))
                .collect(),
        })
        .collect()
}

fn builder_benchmarks(c: &mut Criterion) {
    let store = sample_store();
    let builder = IndexBuilder::new(IndexConfig::new("src/html", "."));
    let records: Vec<DocumentRecord> = builder.scan(&store).expect("scan");
    let commits = sample_commits();

    let mut group = c.benchmark_group("builder");
    group.bench_function("scan", |b| b.iter(|| builder.scan(black_box(&store))));
    group.bench_function("apply_history", |b| {
        b.iter(|| {
            let mut records = records.clone();
            apply_history(&mut records, black_box(&commits), "html");
            records
        })
    });
    group.finish();
}

criterion_group!(benches, builder_benchmarks);
criterion_main!(benches);
