//! Benchmarks for the analysis and search routines.
//!
//! Measures Kasiski examination and IC scan over the fixture ciphertext,
//! and XOR key search throughput across key widths.

use classicrypt::analysis::{ic_scan, kasiski_examination};
use classicrypt::cipher::{Cipher, VigenereCipher};
use classicrypt::config::{AnalysisConfig, SearchConfig};
use classicrypt::search::{every_byte, is_ascii_letter, XorKeySearch};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Vigenère ciphertext shared with the integration tests.
const CIPHERTEXT: &str = include_str!("../tests/fixtures/kasiski_ciphertext.txt");

/// Benchmarks a full Kasiski examination with default bounds.
fn bench_kasiski(c: &mut Criterion) {
    let config = AnalysisConfig::default();
    c.bench_function("kasiski_fixture", |b| {
        b.iter(|| kasiski_examination(black_box(CIPHERTEXT), &config).unwrap());
    });
}

/// Benchmarks the IC scan for key lengths 1..=15.
fn bench_ic_scan(c: &mut Criterion) {
    let config = AnalysisConfig::default();
    c.bench_function("ic_scan_fixture", |b| {
        b.iter(|| ic_scan(black_box(CIPHERTEXT), &config).unwrap());
    });
}

/// Benchmarks Vigenère encoding of the fixture.
fn bench_vigenere(c: &mut Criterion) {
    let cipher = VigenereCipher::new("magic").unwrap();
    let mut group = c.benchmark_group("vigenere");
    group.throughput(Throughput::Bytes(CIPHERTEXT.len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| cipher.encode(black_box(CIPHERTEXT)));
    });
    group.finish();
}

/// Benchmarks exhaustive XOR search across 1- and 2-byte key widths.
///
/// The 3-byte space is left out to keep the run short; its cost is
/// 256 times the 2-byte figure.
fn bench_xor_search(c: &mut Criterion) {
    let ciphertext: [u8; 2] = [18, 7];
    let mut group = c.benchmark_group("xor_search");

    for width in [1usize, 2] {
        let config = SearchConfig {
            key_width: Some(width),
        };
        group.throughput(Throughput::Elements(1u64 << (8 * width)));
        group.bench_with_input(BenchmarkId::from_parameter(width), &config, |b, config| {
            b.iter(|| {
                XorKeySearch::new(black_box(&ciphertext), config, every_byte(is_ascii_letter))
                    .unwrap()
                    .count()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_kasiski,
    bench_ic_scan,
    bench_vigenere,
    bench_xor_search,
);
criterion_main!(benches);
