use criterion::{Criterion, criterion_group, criterion_main};
use logtree::{Facility, Level, Logger, fmt};
use std::hint::black_box;
use std::sync::Barrier;
use std::thread;
use tempfile::TempDir;

fn bench_file_emit(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let root = Logger::root("bench");
    root.set_facility(Facility::File, Some(&tmp.path().join("bench.log")))
        .expect("file facility");
    let child = root.child("WORKER").child("IO");

    c.bench_function("Logger::log (file, depth 3)", |b| {
        b.iter(|| child.log(Level::Info, black_box("benchmark log message")));
    });

    c.bench_function("Message (file, 4 tokens)", |b| {
        b.iter(|| {
            child
                .info()
                .append("id=")
                .append(black_box(42))
                .append(" len=")
                .append(black_box(1024))
                .finish();
        });
    });
}

fn bench_filtered(c: &mut Criterion) {
    let root = Logger::root("bench");
    let child = root.child("QUIET");

    c.bench_function("Logger::log (filtered debug)", |b| {
        b.iter(|| child.log(Level::Debug, black_box("never emitted")));
    });
}

fn bench_contended_stream(c: &mut Criterion) {
    const THREADS: usize = 4;
    const LINES: usize = 64;

    let root = Logger::builder()
        .sink(|_, message, _| {
            black_box(message);
        })
        .build();

    c.bench_function("Message (4 threads, one stream)", |b| {
        b.iter(|| {
            let start = Barrier::new(THREADS);
            thread::scope(|s| {
                for t in 0..THREADS {
                    let root = &root;
                    let start = &start;
                    s.spawn(move || {
                        start.wait();
                        for i in 0..LINES {
                            root.warning().append(t).append(':').append(i).finish();
                        }
                    });
                }
            });
        });
    });
}

fn bench_stamp(c: &mut Criterion) {
    c.bench_function("fmt::stamp", |b| {
        b.iter(|| {
            fmt::stamp(
                black_box("2025-01-15T14:30:00.123456"),
                Level::Warning,
                black_box("[A] [B] message"),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_file_emit,
    bench_filtered,
    bench_contended_stream,
    bench_stamp,
);
criterion_main!(benches);
