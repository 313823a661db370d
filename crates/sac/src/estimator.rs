use groundseg_core::Cloud;

/// A robust model-fitting strategy over a candidate index set.
///
/// The single operation keeps the surrounding pipeline agnostic to the
/// consensus method: RANSAC ships in this crate, and alternative robust
/// estimators (MSAC, LMedS, ...) can be substituted without touching the
/// candidate selection or refinement stages.
pub trait RobustEstimator {
    /// Attempts to fit a model to the points at `candidates` and returns
    /// the final inlier index set, or `None` when no qualifying model
    /// exists. Returned indices are a subset of `candidates` and point
    /// into `cloud`.
    fn fit(&self, cloud: &Cloud, candidates: &[usize]) -> Option<Vec<usize>>;
}
