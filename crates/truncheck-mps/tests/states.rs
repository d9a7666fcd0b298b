use num_complex::Complex64;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use truncheck_mps::{fidelity, overlap, MpsState, SavedState};

/// Random normalized single-qubit amplitude vector
fn random_qubit(rng: &mut ChaCha8Rng) -> Vec<Complex64> {
    let raw: Vec<Complex64> = (0..2)
        .map(|_| Complex64::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
        .collect();
    let norm: f64 = raw.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
    raw.into_iter().map(|z| z / norm).collect()
}

fn random_product_state(sites: usize, seed: u64) -> MpsState<Complex64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let locals: Vec<Vec<Complex64>> = (0..sites).map(|_| random_qubit(&mut rng)).collect();
    MpsState::product_state(&locals, 1).unwrap()
}

#[test]
fn fidelity_self_identity_random_states() {
    for seed in 0..5 {
        let state = random_product_state(6, seed);
        let f = fidelity(&state, &state).unwrap();
        assert!((f - 1.0).abs() < 1e-9, "seed {seed}: fidelity = {f}");
    }
}

#[test]
fn fidelity_symmetry_random_states() {
    let a = random_product_state(5, 11);
    let b = random_product_state(5, 12);
    let fab = fidelity(&a, &b).unwrap();
    let fba = fidelity(&b, &a).unwrap();
    assert!((fab - fba).abs() < 1e-12);
}

#[test]
fn fidelity_bounded_random_states() {
    for seed in 0..10 {
        let a = random_product_state(4, 2 * seed);
        let b = random_product_state(4, 2 * seed + 1);
        let f = fidelity(&a, &b).unwrap();
        assert!((0.0..=1.0 + 1e-12).contains(&f), "seed {seed}: fidelity = {f}");
    }
}

#[test]
fn overlap_hermitian_random_states() {
    let a = random_product_state(5, 21);
    let b = random_product_state(5, 22);
    let ab = overlap(&a, &b).unwrap();
    let ba = overlap(&b, &a).unwrap();
    assert!((ab - ba.conj()).norm() < 1e-12);
}

#[test]
fn saved_state_json_round_trip() {
    let state = random_product_state(4, 33);
    let saved = SavedState::from_state(&state);
    let json = serde_json::to_string(&saved).unwrap();
    let restored: SavedState = serde_json::from_str(&json).unwrap();
    let restored = restored.into_state().unwrap();

    assert_eq!(restored.site_count(), state.site_count());
    assert_eq!(restored.bond_limit(), state.bond_limit());
    let f = fidelity(&state, &restored).unwrap();
    assert!((f - 1.0).abs() < 1e-9);
}
