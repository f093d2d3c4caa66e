use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scripture_engine::FuzzyRanker;
use serde_json::{json, Value};

fn create_version_records(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "title": format!("Tractate {}", i),
                "versionTitle": format!("Edition {} - English", i % 10),
                "languageFamilyName": if i % 2 == 0 { "english" } else { "hebrew" },
                "language": if i % 2 == 0 { "en" } else { "he" },
            })
        })
        .collect()
}

fn bench_best_matches(c: &mut Criterion) {
    let ranker = FuzzyRanker::new();

    let records_10 = create_version_records(10);
    let records_100 = create_version_records(100);
    let records_1000 = create_version_records(1000);

    let fields = ["title", "versionTitle", "language"];
    let values = [Some("Tractate 5"), Some("Edition 5 - English"), Some("en")];

    c.bench_function("best_matches_10", |b| {
        b.iter(|| black_box(ranker.best_matches(&records_10, &fields, &values)));
    });

    c.bench_function("best_matches_100", |b| {
        b.iter(|| black_box(ranker.best_matches(&records_100, &fields, &values)));
    });

    c.bench_function("best_matches_1000", |b| {
        b.iter(|| black_box(ranker.best_matches(&records_1000, &fields, &values)));
    });
}

criterion_group!(benches, bench_best_matches);
criterion_main!(benches);
