//! Configuration for the ground-removal pipeline.

/// Configuration for [`crate::GroundRemoval`].
///
/// Passed in whole at construction and replaceable between invocations;
/// an in-flight invocation never observes a change.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundRemovalConfig {
    /// Maximum height above the ground for the candidate pre-filter, in
    /// the robot frame (meters). Transformed into the cloud frame per
    /// invocation.
    pub height_threshold: f32,

    /// Slope allowance for the candidate pre-filter (dimensionless
    /// ratio). 0 disables the slope test.
    pub slope_threshold: f32,

    /// Inlier distance for scoring line models during the consensus
    /// search (meters).
    pub fit_distance: f32,

    /// Inlier distance for the final selection around the refined line
    /// (meters). Looser than `fit_distance` so the inclusion pass can
    /// pick up points the outlier-resistant search pass held back.
    pub select_distance: f32,

    /// Minimum candidate count to attempt a fit, and minimum inlier
    /// count for a line model to qualify.
    pub min_points_per_model: usize,

    /// Upper bound on consensus-search iterations.
    pub max_iterations: usize,

    /// Grow the ground set with points below the fitted plane.
    pub planar_refine: bool,

    /// Frame in which `height_threshold` is expressed.
    pub robot_frame: String,

    /// Frame of the sensor's optical origin; its origin transformed into
    /// the cloud frame is the viewpoint.
    pub sensor_mount_frame: String,

    /// Name of the required per-point scan-index channel.
    pub scan_index_channel: String,
}

impl Default for GroundRemovalConfig {
    fn default() -> Self {
        Self {
            height_threshold: 0.1,
            slope_threshold: 0.0,
            fit_distance: 0.015,
            select_distance: 0.03,
            min_points_per_model: 6,
            max_iterations: 200,
            planar_refine: true,
            robot_frame: "base_footprint".to_string(),
            sensor_mount_frame: "laser_tilt_mount_link".to_string(),
            scan_index_channel: "index".to_string(),
        }
    }
}
