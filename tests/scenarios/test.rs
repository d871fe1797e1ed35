use sparse_field::{SparseVector, VectorError};

fn pairs(vector: &SparseVector<f64>) -> Vec<(usize, f64)> {
    vector.iter().map(|pair| (pair.index(), *pair.value())).collect()
}

#[test]
fn set_then_negate_clone() {
    let mut v = SparseVector::new(5, 0.0);
    v.set(2, 3.0);
    v.set(4, -1.5);
    assert_eq!(v.els(), 2);
    assert_eq!(v.get(2), &3.0);
    assert_eq!(v.get(3), &0.0);

    let mut w = v.clone();
    w.sym();
    assert_eq!(pairs(&w), vec![(2, -3.0), (4, 1.5)]);
    assert_eq!(pairs(&v), vec![(2, 3.0), (4, -1.5)]);
}

#[test]
fn sum_of_two_vectors() {
    let mut a = SparseVector::from_pairs(5, 0.0, vec![(1, 2.0)]);
    let b = SparseVector::from_pairs(5, 0.0, vec![(1, 3.0), (3, 1.0)]);
    a.sum(&b).unwrap();
    assert_eq!(pairs(&a), vec![(1, 5.0), (3, 1.0)]);
    assert_eq!(a.to_string(), "[5, 1]");
}

#[test]
fn dot_product() {
    let a = SparseVector::from_pairs(5, 0.0, vec![(2, 2.0), (3, 4.0)]);
    let b = SparseVector::from_pairs(5, 0.0, vec![(2, 5.0)]);
    assert_eq!(a.dot_prod(&b), Ok(10.0));
}

#[test]
fn mismatched_dimensions() {
    let mut a = SparseVector::from_pairs(5, 0.0, vec![(2, 2.0)]);
    let b = SparseVector::from_pairs(4, 0.0, vec![(2, 5.0)]);

    let expected = VectorError::DimensionMismatch { expected: 5, found: 4 };
    assert_eq!(a.dot_prod(&b), Err(expected));
    assert_eq!(a.sum(&b), Err(expected));
    assert_eq!(pairs(&a), vec![(2, 2.0)]);
}

#[test]
fn out_of_range_indices_are_ignored() {
    let mut v = SparseVector::new(3, 0.0);
    v.set(0, 1.0);
    v.set(4, 1.0);
    assert_eq!(v.els(), 0);
    assert_eq!(v.get(4), &0.0);
    assert_eq!(v.to_string(), "[]");
}
