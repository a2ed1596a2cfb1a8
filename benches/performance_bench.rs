//! Calculation throughput: single builds and parallel batches over the
//! sample reference data.
//!
//! Run with: `cargo bench`

use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mhrb::data::load_dir;
use mhrb::data::types::WeaponCategory;
use mhrb::parallel::{evaluate_batch, WorkerPool};
use mhrb::state::{Build, CalcRequest, CalcState, SKILL_CONDITIONS};
use mhrb::{calculate_build_performance, GameDatabase};

fn sample_db() -> GameDatabase {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    match load_dir(&dir) {
        Ok(db) => (*db).clone(),
        Err(err) => panic!("sample data should load: {err}"),
    }
}

fn loaded_state(db: &GameDatabase) -> CalcState {
    CalcState::new()
        .with_skill(db, "attack_boost", 7)
        .and_then(|s| s.with_skill(db, "critical_eye", 7))
        .and_then(|s| s.with_skill(db, "critical_boost", 3))
        .and_then(|s| s.with_skill(db, "weakness_exploit", 3))
        .and_then(|s| s.with_skill(db, "handicraft", 3))
        .and_then(|s| s.with_state(SKILL_CONDITIONS, "weakness_exploit", 2))
        .unwrap_or_default()
}

fn bench_performance(c: &mut Criterion) {
    let db = sample_db();
    let state = loaded_state(&db);
    let build = Build::new(WeaponCategory::Longsword, "mizuniya_1")
        .with_pick(0, "attack_boost_3")
        .with_pick(1, "affinity_surge");

    let mut group = c.benchmark_group("performance");
    group.bench_function("single_build_no_skills", |b| {
        b.iter(|| calculate_build_performance(black_box(&db), black_box(&build), &CalcState::new()))
    });
    group.bench_function("single_build_loaded", |b| {
        b.iter(|| calculate_build_performance(black_box(&db), black_box(&build), black_box(&state)))
    });

    let requests: Vec<CalcRequest> = (0..1_000)
        .map(|_| CalcRequest::new(build.clone(), state.clone()))
        .collect();
    group.throughput(Throughput::Elements(requests.len() as u64));
    for workers in [1, 0] {
        let pool = WorkerPool::with_workers(workers);
        group.bench_function(format!("batch_1000_workers_{workers}"), |b| {
            b.iter(|| evaluate_batch(&db, black_box(&requests), &pool))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_performance);
criterion_main!(benches);
