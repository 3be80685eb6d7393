use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slist::*;

// cargo bench
pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("push_back 10k", |b| {
        b.iter(|| {
            let mut list = SList::new();
            for i in 0..10_000u32 {
                list.push_back(black_box(i));
            }
            list
        })
    });

    let list: SList<u32> = (0..1_000).collect();
    c.bench_function("find last of 1k", |b| {
        b.iter(|| list.find(black_box(&999)).unwrap())
    });

    c.bench_function("insert_after + erase in 1k", |b| {
        let mut list = list.clone();
        b.iter(|| {
            list.insert_after(black_box(&500), 5_000).unwrap();
            list.erase(black_box(&5_000)).unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
