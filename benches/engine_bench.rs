//! Performance benchmarks for the journal state engine.
//!
//! Run with: cargo bench
//!
//! These benchmarks establish baseline performance metrics for:
//! - Recomputing place counters at various collection sizes
//! - Saving an entry through a session, place resolution included

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use travelog::journal_core::{recompute, Entry, EntryPatch, EntryStatus, EntryType, Place};
use travelog::seed::Snapshot;
use travelog::session::Session;

fn collections(place_count: usize, entry_count: usize) -> (Vec<Place>, Vec<Entry>) {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let places = (0..place_count)
        .map(|i| Place {
            id: format!("p{}", i),
            name: format!("Place {}", i),
            country_code: "XX".to_string(),
            admin_area: format!("Region {}", i),
            locality: format!("Place {}", i),
            lat: 0.0,
            lon: 0.0,
            thumbnail_url: None,
            entry_count: 0,
            draft_count: 0,
        })
        .collect();
    let statuses = [
        EntryStatus::Published,
        EntryStatus::Draft,
        EntryStatus::Trashed,
    ];
    let entries = (0..entry_count)
        .map(|i| Entry {
            id: format!("e{}", i),
            place_id: Some(format!("p{}", i % place_count)),
            location: None,
            country: None,
            entry_type: EntryType::Blog,
            title: format!("Entry {}", i),
            body: "text".to_string(),
            media_urls: Vec::new(),
            status: statuses[i % statuses.len()],
            created_at: created,
            updated_at: created,
            deleted_at: None,
        })
        .collect();
    (places, entries)
}

/// Benchmark counter recomputation with various collection sizes.
fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");

    let sizes = vec![("100", 10, 100), ("10k", 200, 10_000), ("100k", 1_000, 100_000)];

    for (name, place_count, entry_count) in sizes {
        let (places, entries) = collections(place_count, entry_count);

        group.throughput(Throughput::Elements(entry_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(places, entries),
            |b, (places, entries)| {
                b.iter(|| black_box(recompute(black_box(places), black_box(entries))));
            },
        );
    }

    group.finish();
}

/// Benchmark a full save that resolves an existing place by location text.
fn bench_save(c: &mut Criterion) {
    let (places, entries) = collections(200, 10_000);
    let session = Session::new(Snapshot { places, entries }, chrono::Duration::days(30));
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    c.bench_function("save_new_entry_10k", |b| {
        b.iter_batched(
            || session.clone(),
            |mut session| {
                let saved = session.save_entry(
                    None,
                    EntryPatch {
                        title: Some("Bench".to_string()),
                        body: Some("x".to_string()),
                        location: Some("Place 7".to_string()),
                        country: Some("Region 7".to_string()),
                        status: Some(EntryStatus::Published),
                        ..Default::default()
                    },
                    now,
                );
                black_box(saved)
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_recompute, bench_save);
criterion_main!(benches);
