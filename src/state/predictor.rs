/// Single-image predictor form state
use crate::api::{PredictionRequest, PredictionResult};
use crate::error::AppError;

use super::progress::UploadProgress;
use super::slot::{LoadedImage, UploadSlot};
use super::TransientError;

#[derive(Debug, Clone, Default)]
pub struct PredictorForm {
    pub slot: UploadSlot,
    pub result: Option<PredictionResult>,
    pub in_flight: bool,
    pub progress: UploadProgress,
    pub error: Option<TransientError>,
    error_seq: u64,
}

impl PredictorForm {
    pub fn can_submit(&self) -> bool {
        !self.slot.is_empty() && !self.in_flight
    }

    pub fn build_request(&self) -> Result<PredictionRequest, AppError> {
        PredictionRequest::new(self.slot.part())
    }

    /// A validated image arrived from the picker or a drop.
    pub fn accept(&mut self, loaded: LoadedImage) {
        self.slot.set(loaded);
    }

    pub fn begin_submit(&mut self) {
        self.in_flight = true;
        self.result = None;
        self.error = None;
        self.progress.start();
    }

    /// Show a transient message; returns the seq the dismiss timer must
    /// carry.
    pub fn show_error(&mut self, message: String) -> u64 {
        self.error_seq += 1;
        self.error = Some(TransientError {
            message,
            seq: self.error_seq,
        });
        self.error_seq
    }

    pub fn dismiss_error(&mut self, seq: u64) {
        if self.error.as_ref().is_some_and(|error| error.seq == seq) {
            self.error = None;
        }
    }
}
