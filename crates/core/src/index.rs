/// Indices in `0..n` absent from `excluded`, ascending.
///
/// Equivalent to the set difference `all − excluded` over sorted index
/// sets, but computed with a mask so `excluded` may arrive in any order
/// and may contain duplicates.
///
/// # Panics
///
/// Panics if any excluded index is `>= n`.
pub fn complement(n: usize, excluded: &[usize]) -> Vec<usize> {
    let mut mask = vec![false; n];
    for &idx in excluded {
        assert!(idx < n, "index out of bounds in complement");
        mask[idx] = true;
    }
    (0..n).filter(|&i| !mask[i]).collect()
}
