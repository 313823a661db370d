#![forbid(unsafe_code)]

pub mod estimator;
pub mod line;
pub mod ransac;

pub use estimator::RobustEstimator;
pub use line::LineModel;
pub use ransac::Ransac;
