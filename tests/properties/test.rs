use rand::Rng;

use sparse_field::SparseVector;

use crate::properties::{DIMENSION, random_vector, REPETITIONS, rng};

fn is_well_formed(vector: &SparseVector<i64>) -> bool {
    let indices = vector.iter().map(|pair| pair.index()).collect::<Vec<_>>();

    indices.windows(2).all(|w| w[0] < w[1])
        && indices.iter().all(|&i| 1 <= i && i <= vector.dim())
        && vector.iter().all(|pair| pair.value() != vector.zero())
        && indices.len() == vector.els()
}

#[test]
fn sparsity_and_ordering() {
    let mut rng = rng();
    for _ in 0..REPETITIONS {
        let mut v = random_vector(&mut rng);
        assert!(is_well_formed(&v));

        let w = random_vector(&mut rng);
        v.sum(&w).unwrap();
        assert!(is_well_formed(&v));

        v.scalar_prod(&rng.gen_range(-2..=2));
        assert!(is_well_formed(&v));

        v.sym();
        assert!(is_well_formed(&v));
    }
}

#[test]
fn get_set_round_trip() {
    let mut rng = rng();
    for _ in 0..REPETITIONS {
        let mut v = random_vector(&mut rng);
        let i = rng.gen_range(1..=DIMENSION);
        let others = v.iter()
            .filter(|pair| pair.index() != i)
            .map(|pair| (pair.index(), *pair.value()))
            .collect::<Vec<_>>();

        let x = rng.gen_range(1..=9);
        v.set(i, x);
        assert_eq!(v.get(i), &x);

        v.set(i, 0);
        assert_eq!(v.get(i), &0);
        assert!(v.iter().all(|pair| pair.index() != i));

        // Other indices are not affected
        let remaining = v.iter().map(|pair| (pair.index(), *pair.value())).collect::<Vec<_>>();
        assert_eq!(remaining, others);
    }
}

#[test]
fn sum_is_commutative() {
    let mut rng = rng();
    for _ in 0..REPETITIONS {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);

        let mut left = a.clone();
        left.sum(&b).unwrap();
        let mut right = b.clone();
        right.sum(&a).unwrap();

        assert_eq!(left, right);
        for i in 1..=DIMENSION {
            assert_eq!(*left.get(i), a.get(i) + b.get(i));
        }
    }
}

#[test]
fn sum_with_negation_is_zero() {
    let mut rng = rng();
    for _ in 0..REPETITIONS {
        let v = random_vector(&mut rng);
        let mut negated = v.clone();
        negated.sym();

        let mut total = v.clone();
        total.sum(&negated).unwrap();
        assert!(total.is_empty());
        assert_eq!(total, SparseVector::zeros(DIMENSION));
    }
}

#[test]
fn dot_product_of_ones() {
    let mut rng = rng();
    for _ in 0..REPETITIONS {
        let mut v = SparseVector::zeros(DIMENSION);
        for _ in 0..rng.gen_range(0..DIMENSION) {
            v.set(rng.gen_range(1..=DIMENSION), 1_f64);
        }

        assert_eq!(v.dot_prod(&v), Ok(v.els() as f64));
    }
}

#[test]
fn dot_product_matches_dense() {
    let mut rng = rng();
    for _ in 0..REPETITIONS {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);

        let dense = (1..=DIMENSION).map(|i| a.get(i) * b.get(i)).sum::<i64>();
        assert_eq!(a.dot_prod(&b), Ok(dense));
        assert_eq!(b.dot_prod(&a), Ok(dense));
    }
}

#[test]
fn negation_is_an_involution() {
    let mut rng = rng();
    for _ in 0..REPETITIONS {
        let v = random_vector(&mut rng);
        let mut w = v.clone();
        w.sym();
        if !v.is_empty() {
            assert_ne!(w, v);
        }
        w.sym();
        assert_eq!(w, v);
    }
}

#[test]
fn clones_are_independent() {
    let mut rng = rng();
    for _ in 0..REPETITIONS {
        let v = random_vector(&mut rng);
        let snapshot = v.iter().map(|pair| (pair.index(), *pair.value())).collect::<Vec<_>>();

        let mut w = v.clone();
        assert_eq!(w, v);
        w.sum(&random_vector(&mut rng)).unwrap();
        w.scalar_prod(&3);
        w.sym();
        w.set(rng.gen_range(1..=DIMENSION), 7);
        w.set(rng.gen_range(1..=DIMENSION), 0);

        let after = v.iter().map(|pair| (pair.index(), *pair.value())).collect::<Vec<_>>();
        assert_eq!(after, snapshot);
    }
}

#[test]
fn equality_ignores_insertion_order() {
    let mut rng = rng();
    for _ in 0..REPETITIONS {
        let v = random_vector(&mut rng);
        let reversed = SparseVector::from_pairs(
            DIMENSION,
            0,
            v.iter().map(|pair| (pair.index(), *pair.value())).collect::<Vec<_>>().into_iter().rev(),
        );
        assert_eq!(reversed, v);
    }
}
