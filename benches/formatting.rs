use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sformat::{args, format, parse, Argument, BitVector, Template, TimeUnit, TimeValue};

const REPORT: &str = "[%t] %-12s addr=%08x data=%b status=%s";

fn report_args() -> Vec<Argument> {
    args![
        TimeValue::new(1250, TimeUnit::Ns),
        "axi_master",
        0x4000_0010u32,
        BitVector::from_bit_str("1010_0101").unwrap(),
        true
    ]
}

fn benchmark_parse(c: &mut Criterion) {
    c.bench_function("parse_report_template", |b| {
        b.iter(|| parse(black_box(REPORT)))
    });
}

fn benchmark_format(c: &mut Criterion) {
    let args = report_args();

    c.bench_function("format_report_line", |b| {
        b.iter(|| format(black_box(REPORT), black_box(&args)))
    });
}

fn benchmark_template_reuse(c: &mut Criterion) {
    let template = Template::parse(REPORT).unwrap();
    let args = report_args();

    c.bench_function("render_parsed_template", |b| {
        b.iter(|| template.render(black_box(&args)))
    });
}

fn benchmark_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");

    group.bench_function("signed", |b| {
        let args = args![-123_456_789i64];
        b.iter(|| format(black_box("%d"), black_box(&args)))
    });
    group.bench_function("hex_padded", |b| {
        let args = args![0xdead_beefu32];
        b.iter(|| format(black_box("%016x"), black_box(&args)))
    });
    group.bench_function("binary_64", |b| {
        let args = args![u64::MAX];
        b.iter(|| format(black_box("%b"), black_box(&args)))
    });
    group.bench_function("time", |b| {
        let args = args![TimeValue::new(-40, TimeUnit::Ps)];
        b.iter(|| format(black_box("%t"), black_box(&args)))
    });

    group.finish();
}

fn benchmark_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_width");

    for width in [8, 64, 512].iter() {
        let template = std::format!("%{}s", width);
        let args = args!["x"];

        group.bench_with_input(BenchmarkId::from_parameter(width), &template, |b, template| {
            b.iter(|| format(black_box(template), black_box(&args)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_format,
    benchmark_template_reuse,
    benchmark_conversions,
    benchmark_width
);
criterion_main!(benches);
