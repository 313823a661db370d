use crate::{LineModel, RobustEstimator};
use groundseg_core::Cloud;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Target probability of having drawn at least one outlier-free sample,
/// driving the adaptive iteration bound.
const SUCCESS_PROBABILITY: f64 = 0.99;

/// RANSAC line search over a candidate index set.
///
/// Two distance thresholds are deliberately independent: `fit_distance`
/// scores samples during the search (tight, outlier-resistant) and
/// `select_distance` draws the final inlier set around the refined model
/// (looser, inclusive). See [`Ransac::fit_seeded`] for the full flow.
#[derive(Debug, Clone)]
pub struct Ransac {
    /// Inlier distance used to score candidate models during the search.
    pub fit_distance: f32,
    /// Inlier distance used for the final selection around the refined
    /// model. Typically looser than `fit_distance`.
    pub select_distance: f32,
    /// Minimum candidate count to attempt a fit, and minimum inlier count
    /// for a model to qualify.
    pub min_points_per_model: usize,
    /// Upper bound on sampling iterations.
    pub max_iterations: usize,
    seed: Option<u64>,
}

impl Ransac {
    pub fn new(
        fit_distance: f32,
        select_distance: f32,
        min_points_per_model: usize,
        max_iterations: usize,
    ) -> Self {
        Self {
            fit_distance,
            select_distance,
            min_points_per_model,
            max_iterations,
            seed: None,
        }
    }

    /// Fixes the random seed so repeated fits over the same input yield
    /// identical inlier sets.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs the consensus search with an explicit seed.
    ///
    /// 1. Pre-generate the 2-point sample sequence for determinism.
    /// 2. Score each sample's line by its inlier count within
    ///    `fit_distance`, keeping the first best.
    /// 3. Stop early once the iteration count exceeds the adaptive bound
    ///    `ln(1 − 0.99) / ln(1 − w²)` for the current best inlier ratio
    ///    `w`.
    /// 4. Refit the best model by least squares over its inliers, then
    ///    select the final inlier set within `select_distance`.
    ///
    /// Returns `None` when the candidate set is smaller than
    /// `min_points_per_model`, or when either the searched or the final
    /// inlier set fails to reach that minimum.
    pub fn fit_seeded(&self, cloud: &Cloud, candidates: &[usize], seed: u64) -> Option<Vec<usize>> {
        let n = candidates.len();
        if n < self.min_points_per_model {
            return None;
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let samples: Vec<(usize, usize)> = (0..self.max_iterations)
            .filter_map(|_| sample_two_distinct(n, &mut rng))
            .collect();

        let mut best_line: Option<LineModel> = None;
        let mut best_inlier_count: usize = 0;

        for (iter, &(i0, i1)) in samples.iter().enumerate() {
            let line = match LineModel::from_points(
                cloud.point(candidates[i0]),
                cloud.point(candidates[i1]),
            ) {
                Some(l) => l,
                None => continue,
            };

            let inlier_count = count_inliers(cloud, candidates, &line, self.fit_distance);

            if inlier_count > best_inlier_count {
                best_inlier_count = inlier_count;
                best_line = Some(line);

                // Adaptive early termination
                let w = best_inlier_count as f64 / n as f64;
                let denom = (1.0 - w * w).ln();
                if denom < 0.0 {
                    let needed = (1.0 - SUCCESS_PROBABILITY).ln() / denom;
                    if (iter as f64) > needed {
                        break;
                    }
                }
            }
        }

        let best_line = best_line?;
        if best_inlier_count < self.min_points_per_model {
            return None;
        }

        let search_inliers = select_within(cloud, candidates, &best_line, self.fit_distance);

        // Least-squares refinement over the searched inliers; the sampled
        // line stands in if the refit degenerates.
        let refined =
            LineModel::fit_least_squares(cloud, &search_inliers).unwrap_or(best_line);

        let final_inliers = select_within(cloud, candidates, &refined, self.select_distance);
        if final_inliers.len() < self.min_points_per_model {
            return None;
        }

        Some(final_inliers)
    }
}

impl RobustEstimator for Ransac {
    /// Uses the configured seed, or draws a fresh one per invocation.
    fn fit(&self, cloud: &Cloud, candidates: &[usize]) -> Option<Vec<usize>> {
        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
        self.fit_seeded(cloud, candidates, seed)
    }
}

#[inline]
fn count_inliers(cloud: &Cloud, candidates: &[usize], line: &LineModel, threshold: f32) -> usize {
    candidates
        .iter()
        .filter(|&&idx| line.distance_to_point(&cloud.point(idx)) <= threshold)
        .count()
}

fn select_within(
    cloud: &Cloud,
    candidates: &[usize],
    line: &LineModel,
    threshold: f32,
) -> Vec<usize> {
    candidates
        .iter()
        .copied()
        .filter(|&idx| line.distance_to_point(&cloud.point(idx)) <= threshold)
        .collect()
}

/// Samples 2 distinct indices in [0, n).
fn sample_two_distinct(n: usize, rng: &mut StdRng) -> Option<(usize, usize)> {
    if n < 2 {
        return None;
    }
    let i0 = rng.gen_range(0..n);
    let mut i1 = rng.gen_range(0..n);
    let mut attempts = 0;
    while i1 == i0 {
        if attempts > 100 {
            return None;
        }
        i1 = rng.gen_range(0..n);
        attempts += 1;
    }
    Some((i0, i1))
}
