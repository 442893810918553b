use std::fmt;
use std::error::Error;

/// Represents errors that can occur while updating the particle store.
///
/// None of these are recoverable at the point of detection: the run entry point
/// that hit one aborts and reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// An index or range reached past the end of the particle channels.
    IndexOutOfRange { index: usize, len: usize },
    /// The worker pool could not be created.
    WorkerStartFailure(String),
    /// A range handed to a kernel is not a multiple of its lane width.
    MisalignedPartition { length: usize, lane_width: usize },
    /// A configuration value is unusable (zero workers, unequal channels, bad env value).
    InvalidConfig(String),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BenchError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for {} particles", index, len)
            }
            BenchError::WorkerStartFailure(msg) => write!(f, "Failed to start workers: {}", msg),
            BenchError::MisalignedPartition { length, lane_width } => write!(
                f,
                "Partition length {} is not a multiple of the lane width {}",
                length, lane_width
            ),
            BenchError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl Error for BenchError {}
