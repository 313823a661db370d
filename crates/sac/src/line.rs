use groundseg_core::{centroid_and_covariance, sym_eigen3, Cloud};

/// A 3D line as an origin point and a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineModel {
    pub origin: [f32; 3],
    pub direction: [f32; 3],
}

impl LineModel {
    /// Line through two points. Returns `None` when the points are too
    /// close together to define a direction.
    pub fn from_points(p0: [f32; 3], p1: [f32; 3]) -> Option<Self> {
        let dx = p1[0] - p0[0];
        let dy = p1[1] - p0[1];
        let dz = p1[2] - p0[2];
        let len = (dx * dx + dy * dy + dz * dz).sqrt();
        if len < 1e-6 {
            return None;
        }
        Some(Self {
            origin: p0,
            direction: [dx / len, dy / len, dz / len],
        })
    }

    /// Orthogonal distance from a point to the line.
    ///
    /// With a unit direction this is the norm of `(p − origin) × direction`.
    #[inline]
    pub fn distance_to_point(&self, point: &[f32; 3]) -> f32 {
        let vx = point[0] - self.origin[0];
        let vy = point[1] - self.origin[1];
        let vz = point[2] - self.origin[2];

        let cx = vy * self.direction[2] - vz * self.direction[1];
        let cy = vz * self.direction[0] - vx * self.direction[2];
        let cz = vx * self.direction[1] - vy * self.direction[0];

        (cx * cx + cy * cy + cz * cz).sqrt()
    }

    /// Least-squares line through the points at `indices`: the centroid
    /// and the principal axis of the covariance matrix. Returns `None`
    /// for fewer than two points or a degenerate (coincident) set.
    pub fn fit_least_squares(cloud: &Cloud, indices: &[usize]) -> Option<Self> {
        if indices.len() < 2 {
            return None;
        }

        let (centroid, cov) = centroid_and_covariance(cloud, indices);
        let eig = sym_eigen3(cov);

        // Largest-eigenvalue eigenvector is the direction of maximum
        // spread. A vanishing largest eigenvalue means every point sits
        // at the centroid.
        if eig.eigenvalues[2] < 1e-12 {
            return None;
        }

        Some(Self {
            origin: centroid,
            direction: eig.eigenvectors[2],
        })
    }
}
