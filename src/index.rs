//! Row-major indexing between qubit values and flat amplitude positions.
//!
//! Qubit 0 is the most significant digit of the flat index.

/// Flat state-vector index of the basis state with the given site values.
///
/// # Example
/// ```
/// use qft_dataset::index::mixed_radix_index;
/// // |1,0,1⟩ on three qubits → 1×4 + 0×2 + 1 = 5
/// assert_eq!(mixed_radix_index(&[1, 0, 1], &[2, 2, 2]), 5);
/// ```
pub fn mixed_radix_index(indices: &[usize], dims: &[usize]) -> usize {
    debug_assert_eq!(indices.len(), dims.len(), "indices and dims must have the same length");
    indices
        .iter()
        .zip(dims.iter())
        .fold(0usize, |acc, (&idx, &dim)| acc * dim + idx)
}

/// Decompose a flat index into site values.
///
/// # Example
/// ```
/// use qft_dataset::index::linear_to_indices;
/// assert_eq!(linear_to_indices(5, &[2, 2, 2]), vec![1, 0, 1]);
/// ```
pub fn linear_to_indices(mut index: usize, dims: &[usize]) -> Vec<usize> {
    let n = dims.len();
    let mut multi = vec![0usize; n];
    for i in (0..n).rev() {
        multi[i] = index % dims[i];
        index /= dims[i];
    }
    multi
}

/// Iterate over all computational basis states as `(flat_index, site_values)`.
pub fn iter_basis(dims: &[usize]) -> impl Iterator<Item = (usize, Vec<usize>)> + '_ {
    let total: usize = dims.iter().product();
    (0..total).map(move |i| (i, linear_to_indices(i, dims)))
}
