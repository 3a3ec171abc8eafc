//! String function benchmarks, with the host libc as baseline where it has
//! an equivalent.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use kruft_bench::{c_string, delimited};
use kruft_core::string::{
    SavePtr, StrChain, strcspn, strlcpy, strlen, strscpy, strspn, strtok_r,
};

const SIZES: &[usize] = &[16, 64, 256, 1024, 4096];

fn bench_strlen(c: &mut Criterion) {
    let mut group = c.benchmark_group("strlen");

    for &size in SIZES {
        let s = c_string(size, b'A');
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("kruft", size), &s, |b, s| {
            b.iter(|| black_box(strlen(black_box(s))));
        });
        group.bench_with_input(BenchmarkId::new("host_libc", size), &s, |b, s| {
            // SAFETY: `s` is NUL-terminated and outlives the call.
            b.iter(|| black_box(unsafe { libc::strlen(black_box(s).as_ptr().cast()) }));
        });
    }
    group.finish();
}

/// Both copy families, fitting and truncating (destination half the source).
fn bench_bounded_copies(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_copy");

    for &size in SIZES {
        let src = c_string(size, b'x');
        let mut fit = vec![0u8; size + 1];
        let mut half = vec![0u8; size / 2];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("strscpy_fit", size), &src, |b, src| {
            b.iter(|| black_box(strscpy(&mut fit, black_box(src))));
        });
        group.bench_with_input(BenchmarkId::new("strscpy_truncate", size), &src, |b, src| {
            b.iter(|| black_box(strscpy(&mut half, black_box(src))));
        });
        group.bench_with_input(BenchmarkId::new("strlcpy_fit", size), &src, |b, src| {
            b.iter(|| black_box(strlcpy(&mut fit, black_box(src))));
        });
        group.bench_with_input(BenchmarkId::new("strlcpy_truncate", size), &src, |b, src| {
            b.iter(|| black_box(strlcpy(&mut half, black_box(src))));
        });
    }
    group.finish();
}

fn bench_chain(c: &mut Criterion) {
    let parts: Vec<Vec<u8>> = (0..16).map(|i| c_string(8 + i, b'a' + i as u8)).collect();
    let mut buf = vec![0u8; 512];

    c.bench_function("stpecpy_chain_16", |b| {
        b.iter(|| {
            let mut chain = StrChain::new(&mut buf);
            for part in &parts {
                chain.push(black_box(part));
            }
            black_box(chain.finish())
        });
    });
}

fn bench_spans(c: &mut Criterion) {
    let mut group = c.benchmark_group("span");
    let accept = b"abcdefghijklmnopqrstuvwxyz\0";
    let reject = b",;\0";

    for &size in SIZES {
        let s = c_string(size, b'q');
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("strspn", size), &s, |b, s| {
            b.iter(|| black_box(strspn(black_box(s), accept)));
        });
        group.bench_with_input(BenchmarkId::new("strspn_host_libc", size), &s, |b, s| {
            // SAFETY: both arguments are NUL-terminated.
            b.iter(|| unsafe { black_box(libc::strspn(s.as_ptr().cast(), accept.as_ptr().cast())) });
        });
        group.bench_with_input(BenchmarkId::new("strcspn", size), &s, |b, s| {
            b.iter(|| black_box(strcspn(black_box(s), reject)));
        });
    }
    group.finish();
}

fn bench_strtok(c: &mut Criterion) {
    let mut group = c.benchmark_group("strtok_r");

    for fields in [4usize, 64, 512] {
        let subject = delimited(fields, b',');
        group.throughput(Throughput::Elements(fields as u64));

        group.bench_with_input(BenchmarkId::new("kruft", fields), &subject, |b, subject| {
            b.iter(|| {
                let mut buf = subject.clone();
                let mut save = SavePtr::new();
                let mut count = 0usize;
                while strtok_r(&mut buf, b",\0", &mut save).is_some() {
                    count += 1;
                }
                black_box(count)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_strlen,
    bench_bounded_copies,
    bench_chain,
    bench_spans,
    bench_strtok
);
criterion_main!(benches);
