//! Analytic eigendecomposition of 3×3 symmetric matrices.
//!
//! Cardano's formula for the eigenvalues and a cross-product construction
//! for the eigenvectors, computed in f64 for numerical stability. Covers
//! the two shapes this workspace needs, the smallest axis of a covariance
//! matrix (plane normal) and the largest (line direction), without
//! pulling in a general iterative eigensolver.

use crate::Cloud;

/// Eigenpairs of a 3×3 symmetric matrix, eigenvalues ascending.
#[derive(Debug, Clone, Copy)]
pub struct SymEigen3 {
    /// Eigenvalues sorted ascending: `eigenvalues[0]` is the smallest.
    pub eigenvalues: [f32; 3],
    /// Unit eigenvectors, `eigenvectors[i]` paired with `eigenvalues[i]`.
    pub eigenvectors: [[f32; 3]; 3],
}

/// Centroid and upper-triangle covariance of the points at `indices`.
///
/// Returns `(centroid, [c00, c01, c02, c11, c12, c22])`, unnormalized by
/// the point count. Callers pass the result straight to [`sym_eigen3`];
/// scaling does not change eigenvectors.
///
/// # Panics
///
/// Panics if `indices` is empty or contains an out-of-bounds index.
pub fn centroid_and_covariance(cloud: &Cloud, indices: &[usize]) -> ([f32; 3], [f32; 6]) {
    assert!(!indices.is_empty(), "covariance of an empty index set");

    let inv_n = 1.0 / indices.len() as f32;
    let mut cx = 0.0f32;
    let mut cy = 0.0f32;
    let mut cz = 0.0f32;
    for &idx in indices {
        cx += cloud.x[idx];
        cy += cloud.y[idx];
        cz += cloud.z[idx];
    }
    cx *= inv_n;
    cy *= inv_n;
    cz *= inv_n;

    let mut cov = [0.0f32; 6];
    for &idx in indices {
        let dx = cloud.x[idx] - cx;
        let dy = cloud.y[idx] - cy;
        let dz = cloud.z[idx] - cz;
        cov[0] += dx * dx;
        cov[1] += dx * dy;
        cov[2] += dx * dz;
        cov[3] += dy * dy;
        cov[4] += dy * dz;
        cov[5] += dz * dz;
    }

    ([cx, cy, cz], cov)
}

/// Eigendecomposition of the symmetric matrix
///
/// ```text
/// | c00  c01  c02 |
/// | c01  c11  c12 |
/// | c02  c12  c22 |
/// ```
///
/// given as its upper triangle `[c00, c01, c02, c11, c12, c22]`.
pub fn sym_eigen3(cov: [f32; 6]) -> SymEigen3 {
    let a00 = cov[0] as f64;
    let a01 = cov[1] as f64;
    let a02 = cov[2] as f64;
    let a11 = cov[3] as f64;
    let a12 = cov[4] as f64;
    let a22 = cov[5] as f64;

    let q = (a00 + a11 + a22) / 3.0;
    let p1 = a01 * a01 + a02 * a02 + a12 * a12;

    let eigenvalues: [f64; 3] = if p1 < 1e-30 {
        // Already diagonal
        let mut evs = [a00, a11, a22];
        evs.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        evs
    } else {
        let p2 = (a00 - q) * (a00 - q) + (a11 - q) * (a11 - q) + (a22 - q) * (a22 - q) + 2.0 * p1;
        let p = (p2 / 6.0).sqrt();
        let inv_p = 1.0 / p;

        let b00 = (a00 - q) * inv_p;
        let b01 = a01 * inv_p;
        let b02 = a02 * inv_p;
        let b11 = (a11 - q) * inv_p;
        let b12 = a12 * inv_p;
        let b22 = (a22 - q) * inv_p;

        let half_det = (b00 * b11 * b22 + 2.0 * b01 * b02 * b12
            - b00 * b12 * b12
            - b11 * b02 * b02
            - b22 * b01 * b01)
            / 2.0;

        let phi = half_det.clamp(-1.0, 1.0).acos() / 3.0;

        let e_hi = q + 2.0 * p * phi.cos();
        let e_lo = q + 2.0 * p * (phi + 2.0 * std::f64::consts::FRAC_PI_3).cos();
        let e_mid = 3.0 * q - e_hi - e_lo;
        [e_lo, e_mid, e_hi]
    };

    let mat = [a00, a01, a02, a11, a12, a22];
    SymEigen3 {
        eigenvalues: [
            eigenvalues[0] as f32,
            eigenvalues[1] as f32,
            eigenvalues[2] as f32,
        ],
        eigenvectors: [
            eigenvector_for(mat, eigenvalues[0]),
            eigenvector_for(mat, eigenvalues[1]),
            eigenvector_for(mat, eigenvalues[2]),
        ],
    }
}

/// Unit eigenvector of a 3×3 symmetric matrix at a given eigenvalue.
///
/// `A − λI` has rank ≤ 2, so the cross product of any two independent
/// rows spans its null space. All three row pairs are tried and the
/// longest product wins, keeping clear of degenerate pairs.
fn eigenvector_for(mat: [f64; 6], lambda: f64) -> [f32; 3] {
    let rows = [
        [mat[0] - lambda, mat[1], mat[2]],
        [mat[1], mat[3] - lambda, mat[4]],
        [mat[2], mat[4], mat[5] - lambda],
    ];

    let mut best = [0.0f64; 3];
    let mut best_norm_sq = 0.0f64;
    for (a, b) in [(0, 1), (0, 2), (1, 2)] {
        let v = cross(rows[a], rows[b]);
        let norm_sq = v[0] * v[0] + v[1] * v[1] + v[2] * v[2];
        if norm_sq > best_norm_sq {
            best = v;
            best_norm_sq = norm_sq;
        }
    }

    if best_norm_sq < 1e-30 {
        // Repeated eigenvalue; any axis in the eigenspace is valid.
        return [0.0, 0.0, 1.0];
    }

    let inv = 1.0 / best_norm_sq.sqrt();
    [
        (best[0] * inv) as f32,
        (best[1] * inv) as f32,
        (best[2] * inv) as f32,
    ]
}

#[inline]
fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}
