use crate::{
    ground_candidates, planar_refine, GroundRemovalConfig, GroundRemovalError, TransformProvider,
};
use groundseg_core::{complement, Cloud};
use groundseg_sac::{Ransac, RobustEstimator};
use log::{debug, error, warn};
use std::time::Instant;

/// Viewpoint used when the sensor-mount transform cannot be resolved:
/// a typical mount position in the cloud frame.
pub const FALLBACK_VIEWPOINT: [f32; 3] = [0.05, 0.0, 0.942768];

/// The ground / non-ground split of one cloud's index universe.
///
/// `ground` and `non_ground` are disjoint, both ascending, and together
/// cover every point index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub ground: Vec<usize>,
    pub non_ground: Vec<usize>,
}

/// Single-frame ground-plane removal.
///
/// Each invocation runs one cloud through candidate selection, a robust
/// line fit, optional planar refinement, and partitioning. Nothing is
/// retained between clouds, and a failure on one cloud cannot affect the
/// next.
#[derive(Debug, Clone)]
pub struct GroundRemoval<P> {
    config: GroundRemovalConfig,
    transforms: P,
    seed: Option<u64>,
}

impl<P: TransformProvider> GroundRemoval<P> {
    pub fn new(config: GroundRemovalConfig, transforms: P) -> Self {
        Self {
            config,
            transforms,
            seed: None,
        }
    }

    /// Fixes the consensus-search seed so repeated runs over the same
    /// cloud produce identical partitions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &GroundRemovalConfig {
        &self.config
    }

    /// Replaces the configuration for subsequent invocations.
    pub fn set_config(&mut self, config: GroundRemovalConfig) {
        self.config = config;
    }

    /// Removes the ground plane from one cloud.
    ///
    /// Returns the non-ground partition with every channel's values
    /// copied at the surviving positions, in the input's frame and at
    /// the input's timestamp. An empty input is returned unchanged.
    pub fn process(&self, cloud: &Cloud) -> Result<Cloud, GroundRemovalError> {
        if cloud.is_empty() {
            debug!("received an empty cloud, re-emitting unchanged");
            return Ok(cloud.clone());
        }

        let partition = self.segment(cloud)?;
        Ok(cloud.select(&partition.non_ground))
    }

    /// Index-level variant of [`GroundRemoval::process`]: classifies
    /// every point without building the output cloud.
    pub fn segment(&self, cloud: &Cloud) -> Result<Partition, GroundRemovalError> {
        let ransac = Ransac::new(
            self.config.fit_distance,
            self.config.select_distance,
            self.config.min_points_per_model,
            self.config.max_iterations,
        );
        let ransac = match self.seed {
            Some(seed) => ransac.with_seed(seed),
            None => ransac,
        };
        self.segment_with(cloud, &ransac)
    }

    /// Runs the pipeline with a caller-supplied consensus estimator in
    /// place of the built-in RANSAC line search.
    pub fn segment_with(
        &self,
        cloud: &Cloud,
        estimator: &dyn RobustEstimator,
    ) -> Result<Partition, GroundRemovalError> {
        if cloud.is_empty() {
            return Ok(Partition {
                ground: Vec::new(),
                non_ground: Vec::new(),
            });
        }

        if !cloud.has_channel(&self.config.scan_index_channel) {
            error!(
                "channel '{}' missing in input cloud",
                self.config.scan_index_channel
            );
            return Err(GroundRemovalError::MissingChannel {
                channel: self.config.scan_index_channel.clone(),
            });
        }

        let started = Instant::now();

        let viewpoint = self.cloud_viewpoint(cloud);
        let height_threshold = self.height_threshold_in_cloud_frame(cloud);

        let candidates =
            ground_candidates(cloud, height_threshold, self.config.slope_threshold);
        debug!("number of possible ground indices: {}", candidates.len());

        // A cloud with no qualifying line model keeps every candidate as
        // ground: over-removing candidate ground points beats letting
        // ground through as obstacles.
        let mut ground = match estimator.fit(cloud, &candidates) {
            Some(inliers) => inliers,
            None => {
                debug!("couldn't fit a line model to the scan, keeping all candidates");
                candidates
            }
        };
        debug!("ground inliers before refinement: {}", ground.len());

        if self.config.planar_refine {
            planar_refine(cloud, &mut ground, viewpoint);
        }
        debug!("ground inliers after refinement: {}", ground.len());

        ground.sort_unstable();
        let non_ground = complement(cloud.len(), &ground);

        debug!(
            "ground: {}, remaining: {} ({:?})",
            ground.len(),
            non_ground.len(),
            started.elapsed()
        );

        Ok(Partition { ground, non_ground })
    }

    /// The sensor's optical origin in the cloud frame, falling back to
    /// [`FALLBACK_VIEWPOINT`] when the mount transform is unavailable.
    fn cloud_viewpoint(&self, cloud: &Cloud) -> [f32; 3] {
        match self.transforms.transform_point(
            [0.0, 0.0, 0.0],
            &self.config.sensor_mount_frame,
            &cloud.frame_id,
            cloud.stamp,
        ) {
            Ok(p) => p,
            Err(err) => {
                warn!("{err}, using fallback viewpoint");
                FALLBACK_VIEWPOINT
            }
        }
    }

    /// The height threshold expressed in the cloud frame. When the
    /// robot-frame transform is unavailable the configured value passes
    /// through untransformed.
    fn height_threshold_in_cloud_frame(&self, cloud: &Cloud) -> f32 {
        match self.transforms.transform_scalar(
            self.config.height_threshold,
            &self.config.robot_frame,
            &cloud.frame_id,
            cloud.stamp,
        ) {
            Ok(v) => v,
            Err(err) => {
                warn!("{err}, using untransformed height threshold");
                self.config.height_threshold
            }
        }
    }
}
