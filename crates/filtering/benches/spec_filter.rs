//! Benchmarks for specification filtering
//!
//! Run with: cargo bench --package filtering
//!
//! Filters a synthetic collection with an attribute specification, a
//! nested combination and a parsed expression.

use catalog::{Color, Item, Size};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use filtering::specs::{ColorSpecification, CombinationSpecification, SizeSpecification};
use filtering::{Filter, SpecFilter, parse_specification};

fn create_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| {
            Item::new(
                format!("item-{i}"),
                Color::ALL[i % Color::ALL.len()],
                Size::ALL[(i / Color::ALL.len()) % Size::ALL.len()],
            )
        })
        .collect()
}

fn bench_single_attribute(c: &mut Criterion) {
    let items = create_items(10_000);
    let spec = ColorSpecification::new(Color::Green);

    c.bench_function("filter_color_10k", |b| {
        b.iter(|| {
            let filtered = SpecFilter.filter(black_box(&items), &spec);
            black_box(filtered)
        })
    });
}

fn bench_combination(c: &mut Criterion) {
    let items = create_items(10_000);
    let spec = CombinationSpecification::<Item>::or(
        CombinationSpecification::<Item>::and(
            ColorSpecification::new(Color::White),
            SizeSpecification::new(Size::Huge),
        ),
        ColorSpecification::new(Color::Red),
    );

    c.bench_function("filter_combination_10k", |b| {
        b.iter(|| {
            let filtered = SpecFilter.filter(black_box(&items), &spec);
            black_box(filtered)
        })
    });
}

fn bench_parsed(c: &mut Criterion) {
    let items = create_items(10_000);
    let spec = parse_specification("(color=white AND size=huge) OR color=red")
        .expect("Failed to parse benchmark expression");

    c.bench_function("filter_parsed_10k", |b| {
        b.iter(|| {
            let filtered = SpecFilter.filter(black_box(&items), spec.as_ref());
            black_box(filtered)
        })
    });
}

criterion_group!(benches, bench_single_attribute, bench_combination, bench_parsed);
criterion_main!(benches);
