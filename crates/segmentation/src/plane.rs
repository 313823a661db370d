use groundseg_core::{centroid_and_covariance, sym_eigen3, Cloud};

/// A fitted plane `n·p + d = 0` with a unit normal, plus the PCA
/// curvature of the points it was estimated from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneFit {
    pub normal: [f32; 3],
    pub d: f32,
    /// Surface-variation measure λ_min / (λ0 + λ1 + λ2). Recorded for
    /// diagnostics, not used to gate refinement.
    pub curvature: f32,
}

impl PlaneFit {
    /// Estimates the plane through the points at `indices`: PCA over
    /// their positions, smallest-eigenvalue eigenvector as the normal,
    /// centroid as a point on the plane.
    ///
    /// # Panics
    ///
    /// Panics if `indices` is empty.
    pub fn from_indices(cloud: &Cloud, indices: &[usize]) -> Self {
        let (centroid, cov) = centroid_and_covariance(cloud, indices);
        let eig = sym_eigen3(cov);

        let normal = eig.eigenvectors[0];
        let d = -(normal[0] * centroid[0] + normal[1] * centroid[1] + normal[2] * centroid[2]);

        let eig_sum = eig.eigenvalues[0] + eig.eigenvalues[1] + eig.eigenvalues[2];
        let curvature = if eig_sum > 1e-12 {
            (eig.eigenvalues[0] / eig_sum).max(0.0)
        } else {
            0.0
        };

        Self {
            normal,
            d,
            curvature,
        }
    }

    /// Signed distance from a point to the plane.
    #[inline]
    pub fn signed_distance(&self, point: &[f32; 3]) -> f32 {
        self.normal[0] * point[0] + self.normal[1] * point[1] + self.normal[2] * point[2] + self.d
    }

    /// Orients the normal to face the viewpoint, judged at a point on
    /// the surface: if the normal points away from the viewpoint, the
    /// whole coefficient vector is negated.
    pub fn flip_towards_viewpoint(&mut self, surface_point: [f32; 3], viewpoint: [f32; 3]) {
        let vx = viewpoint[0] - surface_point[0];
        let vy = viewpoint[1] - surface_point[1];
        let vz = viewpoint[2] - surface_point[2];
        let dot = self.normal[0] * vx + self.normal[1] * vy + self.normal[2] * vz;
        if dot < 0.0 {
            self.normal = [-self.normal[0], -self.normal[1], -self.normal[2]];
            self.d = -self.d;
        }
    }
}
