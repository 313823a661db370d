#![forbid(unsafe_code)]

//! Ground-plane segmentation for 3D point clouds from scanning range
//! sensors.
//!
//! One invocation takes one cloud and splits its points into ground and
//! non-ground sets: a height/slope pre-filter proposes candidates, a
//! RANSAC line search finds the dominant ground structure (failing open
//! to the whole candidate set), and an optional planar refinement pass
//! absorbs points below the fitted ground plane. The non-ground points
//! come back as a new cloud with every per-point channel preserved.
//!
//! The facade re-exports the member crates:
//!
//! - `groundseg-core`: the [`Cloud`] container and shared math
//! - `groundseg-sac`: the [`RobustEstimator`] trait and [`Ransac`]
//! - `groundseg-segmentation`: the [`GroundRemoval`] pipeline

pub use groundseg_core::{complement, Channel, Cloud};
pub use groundseg_sac::{LineModel, Ransac, RobustEstimator};
pub use groundseg_segmentation::{
    ground_candidates, planar_refine, GroundRemoval, GroundRemovalConfig, GroundRemovalError,
    IdentityTransform, Partition, PlaneFit, TransformError, TransformProvider,
    FALLBACK_VIEWPOINT,
};
