#![allow(unused)]
extern crate unidelta;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use unidelta::prelude::*;

const DEPTHS: [u8; 3] = [1, 8, 32];

/// Builds a base with `Alpha` spread over many ranges and `depth` overlays that each add and
/// remove a handful of code points.
fn chain(depth: u8, cache: bool) -> UnicodeProperties {
    let alpha: CodePointSet = (0u32..4096)
        .filter(|cp| cp % 3 != 0)
        .filter_map(char::from_u32)
        .collect();

    let base = PropertyDataBase::builder(UnicodeVersion::new(1, 0, 0))
        .property("Alpha", alpha)
        .alias(AliasNamespace::Property, "Alphabetic", "Alpha")
        .property_of_strings(
            "RGI_Emoji_Flag_Sequence",
            ClassSetContents::property_of_strings(
                CodePointSet::empty(),
                ["\u{1F1E9}\u{1F1EA}"],
            ),
        )
        .build()
        .unwrap();

    let diffs = (1..=depth).map(|n| {
        let offset = 0x5000 + u32::from(n) * 16;
        let add: CodePointSet = (offset..offset + 8).filter_map(char::from_u32).collect();
        let sub = CodePointSet::from_chars([char::from(b'A' + n % 26)]);

        PropertyDiff::builder(UnicodeVersion::new(1 + n, 0, 0))
            .property("Alpha", add, sub)
            .alias(AliasNamespace::Script, format!("Qa{n:02}"), format!("Script{n}"))
            .build()
    });

    UnicodeProperties::builder(base)
        .diffs(diffs)
        .validation(ValidationConfig::disabled())
        .cache(cache)
        .build()
        .unwrap()
}

/// Benchmark property resolution through chains of increasing depth
fn bench_retrieve_property(c: &mut Criterion) {
    let mut group = c.benchmark_group("retrieve_property");
    for depth in DEPTHS {
        let properties = chain(depth, false);
        group.bench_with_input(BenchmarkId::new("uncached", depth), &properties, |b, p| {
            b.iter(|| black_box(p.resolve_property_set(black_box("Alpha"))));
        });

        let cached = chain(depth, true);
        group.bench_with_input(BenchmarkId::new("cached", depth), &cached, |b, p| {
            b.iter(|| black_box(p.resolve_property_set(black_box("Alpha"))));
        });
    }
    group.finish();
}

/// Benchmark alias resolution that has to walk down to the base
fn bench_lookup_alias(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_alias");
    for depth in DEPTHS {
        let properties = chain(depth, false);
        group.bench_with_input(BenchmarkId::new("loose", depth), &properties, |b, p| {
            b.iter(|| {
                black_box(p.resolve_alias(
                    AliasNamespace::Property,
                    black_box("is_alphabetic"),
                    MatchMode::Loose,
                ))
            });
        });
    }
    group.finish();
}

/// Benchmark the synthesized `RGI_Emoji` aggregate
fn bench_rgi_emoji(c: &mut Criterion) {
    let properties = chain(8, false);
    c.bench_function("rgi_emoji_aggregate", |b| {
        b.iter(|| black_box(properties.resolve_property_of_strings(black_box(RGI_EMOJI))));
    });
}

criterion_group!(benches, bench_retrieve_property, bench_lookup_alias, bench_rgi_emoji);
criterion_main!(benches);
