use groundseg_core::Cloud;
use groundseg_segmentation::{GroundRemoval, GroundRemovalConfig, IdentityTransform};

fn main() {
    // Synthetic scene: a flat floor plus a box-shaped obstacle.
    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut z = Vec::new();

    for i in 0..40 {
        for j in 0..40 {
            x.push(i as f32 * 0.1);
            y.push(j as f32 * 0.1);
            z.push(((i * 40 + j) % 7) as f32 * 0.004);
        }
    }
    for i in 0..60 {
        x.push(1.5 + (i % 6) as f32 * 0.05);
        y.push(2.0 + ((i / 6) % 5) as f32 * 0.05);
        z.push(0.3 + (i / 30) as f32 * 0.2);
    }

    let n = x.len();
    let mut cloud = Cloud::from_xyz(x, y, z);
    cloud.push_channel("index", (0..n).map(|i| i as f32).collect());
    cloud.frame_id = "odom".to_string();
    println!("Input cloud: {} points", cloud.len());

    let removal = GroundRemoval::new(GroundRemovalConfig::default(), IdentityTransform);

    let partition = removal.segment(&cloud).expect("segmentation failed");
    println!("Ground inliers: {}", partition.ground.len());
    println!("Non-ground points: {}", partition.non_ground.len());

    let obstacles = removal.process(&cloud).expect("segmentation failed");
    println!(
        "Output cloud: {} points, {} channels, frame '{}'",
        obstacles.len(),
        obstacles.channels.len(),
        obstacles.frame_id
    );
}
