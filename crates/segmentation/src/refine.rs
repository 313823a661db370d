use crate::PlaneFit;
use groundseg_core::{complement, Cloud};

/// Points at or above the plane by at least this much stay non-ground;
/// anything below (including exactly on the surface) is absorbed.
const ABOVE_PLANE_EPSILON: f32 = 1e-6;

/// Grows `ground_inliers` with every other point lying below the plane
/// fitted to the current inliers.
///
/// The plane is estimated by PCA over the inlier positions and its normal
/// oriented towards `viewpoint`, so "below" means the far side from the
/// sensor. One pass: absorbed points do not re-enter the fit.
///
/// A point with signed distance exactly zero is ground.
///
/// No-op returning `None` when `ground_inliers` is empty (a plane from
/// zero points is undefined); otherwise returns the fitted plane.
pub fn planar_refine(
    cloud: &Cloud,
    ground_inliers: &mut Vec<usize>,
    viewpoint: [f32; 3],
) -> Option<PlaneFit> {
    if ground_inliers.is_empty() {
        return None;
    }

    let remaining = complement(cloud.len(), ground_inliers);

    let mut plane = PlaneFit::from_indices(cloud, ground_inliers);
    plane.flip_towards_viewpoint(cloud.point(ground_inliers[0]), viewpoint);

    for idx in remaining {
        if plane.signed_distance(&cloud.point(idx)) >= ABOVE_PLANE_EPSILON {
            continue;
        }
        ground_inliers.push(idx);
    }

    Some(plane)
}
