/// State management module
///
/// This module holds all form state for the two upload workflows:
/// - File slots with previews (slot.rs)
/// - The synthetic upload progress counter (progress.rs)
/// - Single-image predictor form (predictor.rs)
/// - Four-image comparator form (comparator.rs)

pub mod comparator;
pub mod predictor;
pub mod progress;
pub mod slot;

/// A user-visible error message tagged with the sequence number of the
/// dismiss timer armed for it. A dismiss only clears the message while the
/// numbers still match, so a stale timer cannot wipe a newer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientError {
    pub message: String,
    pub seq: u64,
}
