use groundseg_core::Cloud;
use rayon::prelude::*;

/// Below this point count the parallel path costs more than it saves.
const PARALLEL_THRESHOLD: usize = 10_000;

/// Indices of points plausibly on the ground, ascending.
///
/// A point qualifies when its height is within `height_threshold` of the
/// ground, or when `z² < slope_threshold · (x² + y²)`: the slope test
/// admits points on a gently inclined ground plane as a function of their
/// horizontal distance, tolerating small sensor pitch/roll. A
/// `slope_threshold` of 0 disables the slope test.
///
/// Both thresholds are expressed in the cloud's own frame. An empty
/// result is valid and means nothing is ground.
pub fn ground_candidates(cloud: &Cloud, height_threshold: f32, slope_threshold: f32) -> Vec<usize> {
    let is_candidate = |i: &usize| {
        let i = *i;
        let (x, y, z) = (cloud.x[i], cloud.y[i], cloud.z[i]);
        z.abs() < height_threshold || z * z < slope_threshold * (x * x + y * y)
    };

    if cloud.len() >= PARALLEL_THRESHOLD {
        // Per-point predicate only; parallel collect keeps index order.
        (0..cloud.len())
            .into_par_iter()
            .filter(is_candidate)
            .collect()
    } else {
        (0..cloud.len()).filter(is_candidate).collect()
    }
}
