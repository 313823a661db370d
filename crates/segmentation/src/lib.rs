#![forbid(unsafe_code)]

pub mod candidates;
pub mod config;
pub mod error;
pub mod ground_removal;
pub mod plane;
pub mod refine;
pub mod transform;

pub use candidates::ground_candidates;
pub use config::GroundRemovalConfig;
pub use error::GroundRemovalError;
pub use ground_removal::{GroundRemoval, Partition, FALLBACK_VIEWPOINT};
pub use plane::PlaneFit;
pub use refine::planar_refine;
pub use transform::{IdentityTransform, TransformError, TransformProvider};
