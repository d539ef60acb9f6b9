//! Benchmarks for payload encode/decode performance

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use paco::{CompressionAlgorithm, EncodingAlgorithm, PayloadCodec};

fn sample_body(entries: usize) -> String {
    let mut body = String::from("[");
    for i in 0..entries {
        if i > 0 {
            body.push(',');
        }
        body.push_str(&format!("{{\"sensor\":\"temp-{i}\",\"value\":{}}}", 20 + i % 10));
    }
    body.push(']');
    body
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    let body = sample_body(100);
    group.throughput(Throughput::Bytes(body.len() as u64));

    for (name, compression) in [
        ("zstd", CompressionAlgorithm::Zstd),
        ("gzip", CompressionAlgorithm::Gzip),
        ("snappy", CompressionAlgorithm::Snappy),
    ] {
        let codec = PayloadCodec::new(compression, EncodingAlgorithm::None);
        group.bench_function(name, |b| {
            b.iter(|| codec.encode(black_box(body.as_bytes())).unwrap())
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let body = sample_body(100);
    group.throughput(Throughput::Bytes(body.len() as u64));

    for (name, compression) in [
        ("zstd", CompressionAlgorithm::Zstd),
        ("gzip", CompressionAlgorithm::Gzip),
        ("snappy", CompressionAlgorithm::Snappy),
    ] {
        let codec = PayloadCodec::new(compression, EncodingAlgorithm::None);
        let encoded = codec.encode(body.as_bytes()).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| codec.decode(black_box(&encoded)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
