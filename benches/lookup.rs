use std::collections::HashSet;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::IteratorRandom;
use rand::thread_rng;
use word_bloom::{ClassicalBloomFilter, Filter, WordGenerator};

pub fn lookup_values(c: &mut Criterion) {
    let mut seen = HashSet::new();
    let words: Vec<String> = WordGenerator::from_entropy(5, 12)
        .filter(|w| seen.insert(w.clone()))
        .take(10usize.pow(5))
        .collect();
    let bf = ClassicalBloomFilter::create(&words, 0.01).unwrap();

    let mut rng = thread_rng();
    let mut generator = WordGenerator::from_entropy(5, 12);

    let mut bgroup = c.benchmark_group("lookup-values");
    bgroup.bench_function("lookup-random-words", |b| b.iter(|| bf.contains(&generator.generate())));

    bgroup.bench_function("lookup-inserted-words", |b| {
        b.iter(|| bf.contains(words.iter().choose(&mut rng).unwrap()))
    });
    bgroup.finish();
}

criterion_group!(benches, lookup_values);
criterion_main!(benches);
