//! Criterion benchmarks for lookahead-storage.
//!
//! - lookup of a 50-word list
//! - reinforcement update of an existing word
//! - codec encode/decode of a 50-word list

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lookahead_core::PredictionList;
use lookahead_storage::{codec, PredictionStore};

fn seeded_store(dir: &tempfile::TempDir) -> PredictionStore {
    let store = PredictionStore::open(&dir.path().join("bench.userdb"));
    for i in 0..50 {
        store.update("你好", &format!("word{i}"), false);
    }
    store
}

fn bench_lookup(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir);
    c.bench_function("lookup_50_words", |b| {
        b.iter(|| black_box(store.lookup(black_box("你好"))))
    });
}

fn bench_update(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(&dir);
    c.bench_function("update_existing_word", |b| {
        b.iter(|| store.update(black_box("你好"), black_box("word25"), false))
    });
}

fn bench_codec(c: &mut Criterion) {
    let mut list = PredictionList::new();
    for i in 0..50 {
        list.reinforce(&format!("word{i}"));
    }
    let bytes = codec::encode(&list);
    c.bench_function("encode_50_words", |b| b.iter(|| codec::encode(black_box(&list))));
    c.bench_function("decode_50_words", |b| b.iter(|| codec::decode(black_box(&bytes))));
}

criterion_group!(benches, bench_lookup, bench_update, bench_codec);
criterion_main!(benches);
