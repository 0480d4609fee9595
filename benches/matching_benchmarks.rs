//! Benchmarks for definition parsing and string matching.
//!
//! Compares sequential and parallel batch checking when the `rayon` feature
//! is enabled.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dfa_check::prelude::*;

const EVEN_ONES: &str = "0,1\n-+,A,A,B\n,B,A,B\n";

// A ring of `n` states: symbol 0 stays, symbol 1 advances
fn ring_definition(n: usize) -> String {
    let names: Vec<char> = ('A'..='Z').take(n).collect();
    let mut text = String::from("0,1\n");
    for (i, &name) in names.iter().enumerate() {
        let marker = match i {
            0 => "-+",
            _ => "",
        };
        let next = names[(i + 1) % n];
        text.push_str(&format!("{marker},{name},{name},{next}\n"));
    }
    text
}

fn binary_strings(count: usize, len: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            (0..len)
                .map(|j| if (i * 31 + j * 7) % 3 == 0 { '1' } else { '0' })
                .collect()
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_definition");

    for states in [2, 8, 26] {
        let text = ring_definition(states);
        group.throughput(Throughput::Elements(states as u64));
        group.bench_with_input(BenchmarkId::from_parameter(states), &text, |b, text| {
            b.iter(|| parse_definition(black_box(text)).unwrap());
        });
    }

    group.finish();
}

fn bench_is_valid(c: &mut Criterion) {
    let dfa = parse_definition(EVEN_ONES).unwrap();
    let mut group = c.benchmark_group("is_valid");

    for len in [16, 256, 4096] {
        let input = binary_strings(1, len).remove(0);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            b.iter(|| is_valid(black_box(input), &dfa));
        });
    }

    group.finish();
}

fn bench_check_multiple(c: &mut Criterion) {
    let dfa = parse_definition(&ring_definition(26)).unwrap();
    let mut group = c.benchmark_group("check_multiple/sequential");

    for count in [100, 1_000, 10_000] {
        let inputs = binary_strings(count, 64);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &inputs, |b, inputs| {
            b.iter(|| check_multiple(black_box(inputs), &dfa));
        });
    }

    group.finish();
}

#[cfg(feature = "rayon")]
fn bench_check_multiple_parallel(c: &mut Criterion) {
    let dfa = parse_definition(&ring_definition(26)).unwrap();
    let mut group = c.benchmark_group("check_multiple/parallel");

    for count in [100, 1_000, 10_000] {
        let inputs = binary_strings(count, 64);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &inputs, |b, inputs| {
            b.iter(|| check_multiple_parallel(black_box(inputs), &dfa));
        });
    }

    group.finish();
}

#[cfg(not(feature = "rayon"))]
criterion_group!(benches, bench_parse, bench_is_valid, bench_check_multiple);

#[cfg(feature = "rayon")]
criterion_group!(
    benches,
    bench_parse,
    bench_is_valid,
    bench_check_multiple,
    bench_check_multiple_parallel,
);

criterion_main!(benches);
