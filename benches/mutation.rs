//! Criterion benchmarks for URL accessors and structural edits.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use url_helper::Url;

const CASES: [(&str, &str); 4] = [
    ("minimal", "http://a.co"),
    ("typical", "https://example.com/search?q=rust&page=2"),
    (
        "with_fragment",
        "https://example.com/docs/guide?lang=en&v=1.2#installation",
    ),
    (
        "long_query",
        "https://example.com/api?a=1&b=2&c=3&d=4&e=5&f=6&g=7&h=8&i=9&j=10#end",
    ),
];

/// Benchmark: typed query decoding
fn bench_query_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_decode");

    for (name, text) in CASES {
        let url = Url::new(text);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("all", name), &url, |b, url| {
            b.iter(|| black_box(url).all_query_parameters());
        });
        group.bench_with_input(BenchmarkId::new("single", name), &url, |b, url| {
            b.iter(|| black_box(url).query_parameter(black_box("page")));
        });
    }

    group.finish();
}

/// Benchmark: query edits that split and rejoin the text
fn bench_query_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_edit");

    for (name, text) in CASES {
        let url = Url::new(text);
        group.bench_with_input(BenchmarkId::new("add", name), &url, |b, url| {
            b.iter(|| black_box(url).add_query_parameter(black_box("sort"), black_box("asc")));
        });
        group.bench_with_input(BenchmarkId::new("remove", name), &url, |b, url| {
            b.iter(|| black_box(url).remove_query_parameter(black_box("page")));
        });
        group.bench_with_input(BenchmarkId::new("clear", name), &url, |b, url| {
            b.iter(|| black_box(url).clear_query());
        });
    }

    group.finish();
}

/// Benchmark: scheme and port resolution
fn bench_port(c: &mut Criterion) {
    let mut group = c.benchmark_group("port");

    for text in [
        "https://example.com/path",
        "https://example.com:8443/path",
        "MEMCACHED://cache:11211",
        "unknown://host",
    ] {
        let url = Url::new(text);
        group.bench_with_input(BenchmarkId::new("port_or_default", text), &url, |b, url| {
            b.iter(|| black_box(url).port_or_default());
        });
    }

    group.finish();
}

/// Benchmark: fragment and trailing-slash edits
fn bench_fragment(c: &mut Criterion) {
    let mut group = c.benchmark_group("fragment");
    let url = Url::new("https://example.com/docs/guide?lang=en#installation");

    group.bench_function("set", |b| {
        b.iter(|| black_box(&url).set_fragment(black_box(Some("usage"))));
    });
    group.bench_function("clear", |b| {
        b.iter(|| black_box(&url).clear_fragment());
    });
    group.bench_function("append_trailing_slash", |b| {
        b.iter(|| black_box(&url).append_trailing_slash());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_query_decode,
    bench_query_edit,
    bench_port,
    bench_fragment,
);
criterion_main!(benches);
