use anagram::AnagramMatcher;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_match_words(c: &mut Criterion) {
    let matcher = AnagramMatcher::new("listen");
    let mut group = c.benchmark_group("match_words");

    let pool = ["inlets", "silent", "google", "enlists", "tinsel", "banana"];
    for size in [16, 256, 4096].iter() {
        let candidates: Vec<&str> = (0..*size).map(|i| pool[i % pool.len()]).collect();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function(format!("candidates_{size}"), |b| {
            b.iter(|| matcher.match_words(black_box(&candidates).iter().copied()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_match_words);
criterion_main!(benches);
