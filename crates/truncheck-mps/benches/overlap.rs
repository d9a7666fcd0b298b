//! Benchmark for the overlap contraction kernel
//!
//! The environment accumulated at each bond has size chi^2, so overlap cost
//! scales with chi^3; this bench tracks that scaling for typical sweep
//! bond dimensions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex64;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use truncheck_mps::{fidelity, tensor3_zeros, MpsState, Tensor3};

/// Create a random MPS with the given number of qubits and bond dimension
fn random_mps(n_sites: usize, bond_dim: usize, seed: u64) -> MpsState<Complex64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut tensors: Vec<Tensor3<Complex64>> = Vec::with_capacity(n_sites);

    let mut left = 1usize;
    for i in 0..n_sites {
        // Bonds grow from the edges and cap at bond_dim
        let right = if i + 1 == n_sites {
            1
        } else {
            bond_dim
                .min(2usize.pow((i + 1) as u32))
                .min(2usize.pow((n_sites - i - 1) as u32))
        };
        let mut t = tensor3_zeros(left, 2, right);
        for l in 0..left {
            for s in 0..2 {
                for r in 0..right {
                    t[[l, s, r]] =
                        Complex64::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
                }
            }
        }
        tensors.push(t);
        left = right;
    }

    MpsState::from_raw(tensors, bond_dim).unwrap()
}

fn bench_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap");
    for &chi in &[4usize, 16, 64] {
        let a = random_mps(12, chi, 1);
        let b = random_mps(12, chi, 2);
        group.bench_with_input(BenchmarkId::from_parameter(chi), &chi, |bench, _| {
            bench.iter(|| fidelity(black_box(&a), black_box(&b)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_overlap);
criterion_main!(benches);
