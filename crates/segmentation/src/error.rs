use std::fmt;

/// Failure to process one input cloud. Never fatal to the hosting
/// process; each cloud is handled independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroundRemovalError {
    /// The required scan-index channel is absent from the input cloud.
    MissingChannel { channel: String },
}

impl fmt::Display for GroundRemovalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroundRemovalError::MissingChannel { channel } => {
                write!(f, "channel '{channel}' missing in input cloud")
            }
        }
    }
}

impl std::error::Error for GroundRemovalError {}
