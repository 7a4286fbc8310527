use std::hint::black_box;
use bencher::{TestCase, TestFile};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use micro_rtsp::codec::header::HeaderDecoder;

static SMALL_HEADER: TestFile = TestFile::new("describe_small.txt", include_str!("../resources/header/describe_small.txt"));
static LARGE_HEADER: TestFile = TestFile::new("setup_large.txt", include_str!("../resources/header/setup_large.txt"));

fn create_test_cases() -> Vec<TestCase> {
    vec![TestCase::new("small_header_decoder", SMALL_HEADER), TestCase::new("large_header_decoder", LARGE_HEADER)]
}

fn benchmark_header_decoder(criterion: &mut Criterion) {
    let test_cases = create_test_cases();
    let mut group = criterion.benchmark_group("header_decoder");

    for case in test_cases {
        let wire = case.file().wire_bytes();
        group.throughput(Throughput::Bytes(wire.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &wire, |b, wire| {
            b.iter(|| {
                let header = HeaderDecoder::decode(&wire[..]).expect("input should be a valid rtsp header block");
                black_box(header);
            });
        });
    }

    group.finish();
}

criterion_group!(decoder, benchmark_header_decoder);
criterion_main!(decoder);
