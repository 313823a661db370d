use std::fmt;

/// A coordinate-frame transform could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformError {
    pub src_frame: String,
    pub dst_frame: String,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot transform from frame '{}' to frame '{}'",
            self.src_frame, self.dst_frame
        )
    }
}

impl std::error::Error for TransformError {}

/// Lookup service for transforms between named coordinate frames at a
/// timestamp. The hosting system supplies the implementation; the
/// pipeline only ever calls through this trait and substitutes documented
/// fallbacks when a lookup fails.
pub trait TransformProvider {
    /// Transforms a point from `src_frame` into `dst_frame` at `stamp`
    /// (seconds).
    fn transform_point(
        &self,
        point: [f32; 3],
        src_frame: &str,
        dst_frame: &str,
        stamp: f64,
    ) -> Result<[f32; 3], TransformError>;

    /// Transforms a scalar axis value between frames.
    ///
    /// The value rides the z axis of a point at the origin of
    /// `src_frame`; the transformed point's z is the result. This is the
    /// convention the height threshold relies on.
    fn transform_scalar(
        &self,
        value: f32,
        src_frame: &str,
        dst_frame: &str,
        stamp: f64,
    ) -> Result<f32, TransformError> {
        let p = self.transform_point([0.0, 0.0, value], src_frame, dst_frame, stamp)?;
        Ok(p[2])
    }
}

/// Provider for clouds already expressed in the target frame: every
/// transform is the identity. Useful in tests and standalone runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl TransformProvider for IdentityTransform {
    fn transform_point(
        &self,
        point: [f32; 3],
        _src_frame: &str,
        _dst_frame: &str,
        _stamp: f64,
    ) -> Result<[f32; 3], TransformError> {
        Ok(point)
    }
}
