use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trackline_core::{fade, parse_timeline_json, TimeCursor};
use trackline_test_fixtures::timelines;

fn bench_fade(c: &mut Criterion) {
    c.bench_function("fade_sample_1k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                acc += fade(black_box(i as f64 * 0.05), 50.0, 20.0, 0.8);
            }
            acc
        })
    });
}

fn bench_timecode(c: &mut Criterion) {
    let exprs = ["1:30", "+30s", "-200ms", "1h 2m 3s", "+1:00:00.5"];
    c.bench_function("timecode_resolve_chain", |b| {
        b.iter(|| {
            let mut cursor = TimeCursor::new();
            for e in exprs {
                cursor = cursor.resolve(black_box(e)).expect("valid expression");
            }
            cursor.seconds()
        })
    });
}

fn bench_load(c: &mut Criterion) {
    let json = timelines::json("showcase").expect("showcase fixture");
    c.bench_function("load_showcase_timeline", |b| {
        b.iter(|| parse_timeline_json(black_box(&json)).expect("parse"))
    });
}

criterion_group!(benches, bench_fade, bench_timecode, bench_load);
criterion_main!(benches);
