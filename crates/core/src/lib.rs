#![forbid(unsafe_code)]

pub mod cloud;
pub mod eigen;
pub mod index;

pub use cloud::{Channel, Cloud};
pub use eigen::{centroid_and_covariance, sym_eigen3, SymEigen3};
pub use index::complement;
