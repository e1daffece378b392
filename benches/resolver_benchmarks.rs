//! Performance benchmarks for name resolution and search.
//!
//! These benchmarks measure the hot paths over books of growing size:
//! - Greedy-prefix resolution of a multi-word name
//! - Substring search over every contact field
//! - Unknown-command suggestions

use assistant_bot::resolver::{greedy_prefix, PayloadRule};
use assistant_bot::{AddressBook, Command, CommandMatcher, Contact};
use assistant_bot::domain::Phone;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book of `size` contacts named `First{i} Last{i}`, each with a
/// distinct phone number.
fn build_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut contact = Contact::new(format!("First{} Last{}", i, i));
        let phone = Phone::new(format!("050{:07}", i)).expect("generated phone is valid");
        contact.add_phone(phone).expect("fresh contact");
        book.add(contact).expect("names and phones are distinct");
    }
    book
}

fn tokens(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

/// Benchmark resolving the last contact's two-word name.
fn bench_greedy_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_prefix");

    for size in [10, 100, 1000] {
        let book = build_book(size);
        let last = size - 1;
        let args = tokens(&format!(
            "First{} Last{} Meeting with client about the contract #urgent",
            last, last
        ));

        group.bench_with_input(BenchmarkId::from_parameter(size), &args, |b, args| {
            b.iter(|| greedy_prefix(black_box(args), &book, PayloadRule::Required));
        });
    }

    group.finish();
}

/// Benchmark a search that has to visit every contact.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [10, 100, 1000] {
        let book = build_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.search(black_box("last9")));
        });
    }

    group.finish();
}

/// Benchmark suggestions for a typo against the full command table.
fn bench_suggestions(c: &mut Criterion) {
    let matcher = CommandMatcher::new(&Command::words(), 5, 60);
    c.bench_function("suggest_typo", |b| {
        b.iter(|| matcher.suggest(black_box("chngephone")));
    });
}

criterion_group!(benches, bench_greedy_prefix, bench_search, bench_suggestions);
criterion_main!(benches);
