use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sha3::Sha3_256;

use merkle_commit::{verify, MerkleTree};

type Tree = MerkleTree<Sha3_256>;

fn records(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("sender {i} -> receiver {i}"))
        .collect()
}

fn bench_merkle(c: &mut Criterion) {
    let records = records(1024);

    c.bench_function("build_1024", |b| {
        b.iter(|| Tree::build(black_box(&records)))
    });

    let tree = Tree::build(&records);
    c.bench_function("prove_1024", |b| {
        b.iter(|| tree.prove(black_box(511)).unwrap())
    });

    let root = tree.root().unwrap();
    let leaf = tree.leaf(511).unwrap();
    let proof = tree.prove(511).unwrap();
    c.bench_function("verify_1024", |b| {
        b.iter(|| verify::<Sha3_256>(black_box(&leaf), &proof, &root))
    });
}

criterion_group!(benches, bench_merkle);
criterion_main!(benches);
