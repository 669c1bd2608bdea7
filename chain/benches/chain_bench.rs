// Chain construction benchmarks for carchain.
//
// Covers pseudo-hash generation on its own, a full seven-record chain build,
// and rendering the built chain to an in-memory buffer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use carchain::report::write_chain;
use carchain::timestamp::FixedClock;
use carchain::{ChainBuilder, Dataset, Palette, PseudoHasher};
use chrono::NaiveDate;

fn fixed_clock() -> FixedClock {
    let at = NaiveDate::from_ymd_opt(2026, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid date");
    FixedClock(at)
}

fn bench_next_hash(c: &mut Criterion) {
    let mut hasher = PseudoHasher::from_seed(42);
    c.bench_function("hash/next_pseudo_hash", |b| {
        b.iter(|| hasher.next_hash());
    });
}

fn bench_build_chain(c: &mut Criterion) {
    let dataset = Dataset::builtin();
    c.bench_function("chain/build_builtin", |b| {
        b.iter(|| {
            let mut builder = ChainBuilder::with_parts(PseudoHasher::from_seed(7), fixed_clock());
            builder.build(black_box(&dataset))
        });
    });
}

fn bench_render_chain(c: &mut Criterion) {
    let chain = ChainBuilder::with_parts(PseudoHasher::from_seed(7), fixed_clock())
        .build(&Dataset::builtin())
        .expect("build");
    c.bench_function("report/write_chain_plain", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(16 * 1024);
            write_chain(&mut out, black_box(&chain), Palette::plain()).expect("write");
            out
        });
    });
}

criterion_group!(
    benches,
    bench_next_hash,
    bench_build_chain,
    bench_render_chain
);
criterion_main!(benches);
