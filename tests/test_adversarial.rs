//! Adversarial edge-case integration tests.
//!
//! These tests probe degenerate, boundary, and pathological inputs across
//! the full crate stack to verify no panics, no infinite loops, and
//! consistent error handling.

use groundseg::{
    ground_candidates, planar_refine, Cloud, GroundRemoval, GroundRemovalConfig,
    GroundRemovalError, IdentityTransform, Partition, Ransac,
};

fn segmenter() -> GroundRemoval<IdentityTransform> {
    GroundRemoval::new(GroundRemovalConfig::default(), IdentityTransform).with_seed(42)
}

fn with_index_channel(mut cloud: Cloud) -> Cloud {
    let n = cloud.len();
    cloud.push_channel("index", (0..n).map(|i| i as f32).collect());
    cloud
}

fn assert_partition_covers(partition: &Partition, n: usize) {
    let mut combined = partition.ground.clone();
    combined.extend_from_slice(&partition.non_ground);
    combined.sort_unstable();
    assert_eq!(combined, (0..n).collect::<Vec<_>>());
}

// ────────────────── Cloud core ──────────────────

#[test]
fn empty_cloud_operations() {
    let cloud = Cloud::new();
    assert!(cloud.is_empty());
    assert_eq!(cloud.len(), 0);
    assert!(cloud.iter_points().next().is_none());
    assert_eq!(cloud.channel("index"), None);

    let selected = cloud.select(&[]);
    assert!(selected.is_empty());

    let inv = cloud.select_inverse(&[]);
    assert!(inv.is_empty());
}

#[test]
fn single_point_select_roundtrip() {
    let cloud = Cloud::from_xyz(vec![42.0], vec![-1.0], vec![0.0]);
    assert_eq!(cloud.point(0), [42.0, -1.0, 0.0]);

    let selected = cloud.select(&[0]);
    assert_eq!(selected.len(), 1);

    let inv = cloud.select_inverse(&[0]);
    assert!(inv.is_empty());
}

// ────────────────── Candidate selection ──────────────────

#[test]
fn nan_heights_are_never_candidates() {
    let cloud = Cloud::from_xyz(
        vec![1.0, 1.0, 1.0],
        vec![0.0, 0.0, 0.0],
        vec![f32::NAN, 0.0, f32::NAN],
    );
    // NaN fails both the height and the slope comparison.
    assert_eq!(ground_candidates(&cloud, 0.1, 0.5), vec![1]);
}

#[test]
fn infinite_height_is_not_a_candidate() {
    let cloud = Cloud::from_xyz(vec![0.0], vec![0.0], vec![f32::INFINITY]);
    assert!(ground_candidates(&cloud, 0.1, 0.0).is_empty());
}

#[test]
fn negative_height_threshold_selects_nothing() {
    let cloud = Cloud::from_xyz(vec![0.0, 1.0], vec![0.0; 2], vec![0.0, 0.05]);
    assert!(ground_candidates(&cloud, -1.0, 0.0).is_empty());
}

// ────────────────── Line fitting ──────────────────

#[test]
fn ransac_zero_max_iterations_fails_cleanly() {
    let cloud = Cloud::from_xyz(
        (0..20).map(|i| i as f32).collect(),
        vec![0.0; 20],
        vec![0.0; 20],
    );
    let candidates: Vec<usize> = (0..20).collect();
    let ransac = Ransac::new(0.015, 0.03, 6, 0);
    assert!(ransac.fit_seeded(&cloud, &candidates, 42).is_none());
}

#[test]
fn ransac_zero_min_points_on_empty_candidates() {
    let cloud = Cloud::from_xyz(vec![0.0], vec![0.0], vec![0.0]);
    let ransac = Ransac::new(0.015, 0.03, 0, 200);
    // No samples can be drawn from an empty candidate set; the search
    // must give up rather than spin.
    assert!(ransac.fit_seeded(&cloud, &[], 42).is_none());
}

#[test]
fn ransac_with_nonfinite_candidate_does_not_panic() {
    let mut x: Vec<f32> = (0..30).map(|i| i as f32 * 0.1).collect();
    let mut y = vec![0.0f32; 30];
    let mut z = vec![0.0f32; 30];
    x.push(f32::INFINITY);
    y.push(f32::NAN);
    z.push(0.0);
    let cloud = Cloud::from_xyz(x, y, z);
    let candidates: Vec<usize> = (0..cloud.len()).collect();

    let inliers = Ransac::new(0.015, 0.03, 6, 200)
        .fit_seeded(&cloud, &candidates, 42)
        .expect("the finite line should still be found");
    // A non-finite point has no finite distance to any line.
    assert!(!inliers.contains(&30));
}

// ────────────────── Planar refinement ──────────────────

#[test]
fn refine_single_inlier_degenerate_covariance() {
    // One inlier gives a rank-zero covariance; refinement must still
    // produce a plane and grow the set without panicking.
    let cloud = Cloud::from_xyz(
        vec![0.0, 1.0, 1.0],
        vec![0.0, 1.0, 1.0],
        vec![0.0, -0.5, 0.5],
    );
    let mut ground = vec![0];
    let plane = planar_refine(&cloud, &mut ground, [0.0, 0.0, 5.0]).unwrap();
    assert!(plane.normal.iter().all(|v| v.is_finite()));
    assert!(ground.contains(&1));
    assert!(!ground.contains(&2));
}

#[test]
fn refine_all_identical_inliers() {
    let cloud = Cloud::from_xyz(vec![1.0; 8], vec![2.0; 8], vec![0.0; 8]);
    let mut ground: Vec<usize> = (0..8).collect();
    planar_refine(&cloud, &mut ground, [0.0, 0.0, 1.0]).unwrap();
    assert_eq!(ground.len(), 8);
}

// ────────────────── Pipeline ──────────────────

#[test]
fn single_point_cloud_partitions() {
    let cloud = with_index_channel(Cloud::from_xyz(vec![0.0], vec![0.0], vec![0.0]));
    let partition = segmenter().segment(&cloud).unwrap();
    // One candidate, failed fit, fail-open: the point is ground.
    assert_eq!(partition.ground, vec![0]);
    assert!(partition.non_ground.is_empty());

    let out = segmenter().process(&cloud).unwrap();
    assert!(out.is_empty());
    assert_eq!(out.channels.len(), 1);
    assert!(out.channels[0].values.is_empty());
}

#[test]
fn single_elevated_point_is_non_ground() {
    let cloud = with_index_channel(Cloud::from_xyz(vec![0.0], vec![0.0], vec![5.0]));
    let partition = segmenter().segment(&cloud).unwrap();
    assert!(partition.ground.is_empty());
    assert_eq!(partition.non_ground, vec![0]);
}

#[test]
fn all_points_ground_yields_empty_output() {
    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut z = Vec::new();
    for i in 0..10 {
        for j in 0..10 {
            x.push(i as f32 * 0.3);
            y.push(j as f32 * 0.3);
            z.push(0.0);
        }
    }
    let mut cloud = with_index_channel(Cloud::from_xyz(x, y, z));
    cloud.frame_id = "map".to_string();
    cloud.stamp = 9.0;

    let out = segmenter().process(&cloud).unwrap();
    assert!(out.is_empty());
    assert_eq!(out.frame_id, "map");
    assert_eq!(out.stamp, 9.0);
    let names: Vec<&str> = out.channels.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["index"]);
}

#[test]
fn nan_points_do_not_break_the_partition() {
    let mut x: Vec<f32> = (0..40).map(|i| (i % 8) as f32 * 0.3).collect();
    let mut y: Vec<f32> = (0..40).map(|i| (i / 8) as f32 * 0.3).collect();
    let mut z = vec![0.0f32; 40];
    x.push(f32::NAN);
    y.push(0.0);
    z.push(f32::NAN);
    let cloud = with_index_channel(Cloud::from_xyz(x, y, z));

    let partition = segmenter().segment(&cloud).unwrap();
    assert_partition_covers(&partition, cloud.len());
}

#[test]
fn infinite_points_do_not_break_the_partition() {
    let mut x: Vec<f32> = (0..40).map(|i| (i % 8) as f32 * 0.3).collect();
    let mut y: Vec<f32> = (0..40).map(|i| (i / 8) as f32 * 0.3).collect();
    let mut z = vec![0.0f32; 40];
    x.push(f32::INFINITY);
    y.push(f32::NEG_INFINITY);
    z.push(0.0);
    let cloud = with_index_channel(Cloud::from_xyz(x, y, z));

    let partition = segmenter().segment(&cloud).unwrap();
    assert_partition_covers(&partition, cloud.len());
}

#[test]
fn negative_threshold_makes_everything_non_ground() {
    let mut cfg = GroundRemovalConfig::default();
    cfg.height_threshold = -1.0;
    let removal = GroundRemoval::new(cfg, IdentityTransform).with_seed(42);

    let cloud = with_index_channel(Cloud::from_xyz(
        vec![0.0, 0.3, 0.6],
        vec![0.0; 3],
        vec![0.0; 3],
    ));
    let partition = removal.segment(&cloud).unwrap();
    assert!(partition.ground.is_empty());
    assert_eq!(partition.non_ground, vec![0, 1, 2]);
}

#[test]
fn failed_cloud_does_not_poison_the_next() {
    let removal = segmenter();

    // Missing channel: rejected.
    let bad = Cloud::from_xyz(vec![0.0], vec![0.0], vec![0.0]);
    assert!(matches!(
        removal.process(&bad),
        Err(GroundRemovalError::MissingChannel { .. })
    ));

    // The next cloud processes normally.
    let good = with_index_channel(Cloud::from_xyz(
        vec![0.0, 0.3, 2.0],
        vec![0.0; 3],
        vec![0.0, 0.0, 1.5],
    ));
    let partition = removal.segment(&good).unwrap();
    assert_partition_covers(&partition, 3);
    assert!(partition.non_ground.contains(&2));
}
