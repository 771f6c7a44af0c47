//! Benchmarks for note name decoding and substring resolution.
//!
//! Run with: cargo bench --bench codec_benchmarks

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nook::cli::handlers::{find_note, find_topic};
use nook::domain::{decode, encode};
use nook::store::DirStore;
use std::fs;
use tempfile::TempDir;

const TITLES: &[&str] = &[
    "weekly sync",
    "project kickoff",
    "retro",
    "design review",
    "one on one",
];

/// Generates `count` encoded note names spread across consecutive days.
fn note_names(count: usize) -> Vec<String> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            let date = start + chrono::Duration::days(i as i64);
            encode(TITLES[i % TITLES.len()], Some(date)).unwrap()
        })
        .collect()
}

/// Builds a notes tree with `topics` topics of `notes` notes each.
fn notes_tree(topics: usize, notes: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let names = note_names(notes);
    for t in 0..topics {
        let topic = dir.path().join(format!("topic-{:04}", t));
        fs::create_dir(&topic).unwrap();
        for name in &names {
            fs::write(topic.join(name), "").unwrap();
        }
    }
    dir
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for size in [100, 1_000, 10_000] {
        let names = note_names(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &names, |b, names| {
            b.iter(|| names.iter().map(|n| decode(n)).count())
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for size in [100, 1_000] {
        let dir = notes_tree(20, size);
        let store = DirStore::new(dir.path());
        group.bench_with_input(BenchmarkId::new("find_topic", size), &store, |b, store| {
            b.iter(|| find_topic(store, "0019").unwrap())
        });
        group.bench_with_input(BenchmarkId::new("find_note", size), &store, |b, store| {
            b.iter(|| find_note(store, "topic-0019", "one on one").unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_resolve);
criterion_main!(benches);
