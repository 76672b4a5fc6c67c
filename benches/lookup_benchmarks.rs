//! Benchmarks for name lookup and phone search.
//!
//! - Name lookup in books of different sizes
//! - Phone search at the end of a long phone list

use address_book::{AddressBook, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn build_book(size: usize) -> AddressBook {
    (0..size)
        .map(|i| {
            let mut record = Record::new(format!("Contact {}", i));
            record.add_phone(&format!("{:010}", i));
            record
        })
        .collect()
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    for size in [10, 1_000, 100_000] {
        let book = build_book(size);
        let target = format!("Contact {}", size / 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &target, |b, name| {
            b.iter(|| black_box(book.find(name)))
        });
    }
    group.finish();
}

fn bench_find_phone(c: &mut Criterion) {
    let mut record = Record::new("Busy");
    for i in 0..1_000 {
        record.add_phone(&format!("{:010}", i));
    }
    c.bench_function("find_phone_last_of_1000", |b| {
        b.iter(|| black_box(record.find_phone("0000000999")))
    });
}

criterion_group!(benches, bench_find, bench_find_phone);
criterion_main!(benches);
