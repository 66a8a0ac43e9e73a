/// Four-image comparator form state
///
/// Two pairs, each a muzzle (reference) plus a face (probe) image. The
/// slots map positionally onto the backend's `img1..img4` multipart
/// fields.
use crate::api::{ComparisonRequest, ComparisonResult};
use crate::config::Config;
use crate::error::AppError;

use super::progress::UploadProgress;
use super::slot::{LoadedImage, UploadSlot};
use super::TransientError;

/// The four upload positions, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKey {
    Muzzle1,
    Face1,
    Muzzle2,
    Face2,
}

impl SlotKey {
    pub const ALL: [SlotKey; 4] = [
        SlotKey::Muzzle1,
        SlotKey::Face1,
        SlotKey::Muzzle2,
        SlotKey::Face2,
    ];

    fn index(self) -> usize {
        match self {
            SlotKey::Muzzle1 => 0,
            SlotKey::Face1 => 1,
            SlotKey::Muzzle2 => 2,
            SlotKey::Face2 => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SlotKey::Muzzle1 | SlotKey::Muzzle2 => "Muzzle",
            SlotKey::Face1 | SlotKey::Face2 => "Face",
        }
    }

    /// Pair badge shown on the slot: P1 for the first pair, P2 for the
    /// second.
    pub fn badge(self) -> &'static str {
        match self {
            SlotKey::Muzzle1 | SlotKey::Face1 => "P1",
            SlotKey::Muzzle2 | SlotKey::Face2 => "P2",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComparatorForm {
    slots: [UploadSlot; 4],
    pub result: Option<ComparisonResult>,
    pub in_flight: bool,
    pub progress: UploadProgress,
    pub error: Option<TransientError>,
    error_seq: u64,
}

impl ComparatorForm {
    pub fn slot(&self, key: SlotKey) -> &UploadSlot {
        &self.slots[key.index()]
    }

    /// A validated image arrived for `key`. Replacing a slot invalidates
    /// any result computed from the old selection.
    pub fn accept(&mut self, key: SlotKey, loaded: LoadedImage) {
        self.slots[key.index()].set(loaded);
        self.result = None;
        self.error = None;
    }

    /// Where a dropped file should land: the first empty slot.
    pub fn first_empty_slot(&self) -> Option<SlotKey> {
        SlotKey::ALL
            .into_iter()
            .find(|key| self.slot(*key).is_empty())
    }

    pub fn has_any_image(&self) -> bool {
        self.slots.iter().any(|slot| !slot.is_empty())
    }

    pub fn can_submit(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty()) && !self.in_flight
    }

    /// Validate the submission preconditions and assemble the request.
    /// Configuration is checked before the slots; the first failing check
    /// wins.
    pub fn build_request(&self, config: &Config) -> Result<ComparisonRequest, AppError> {
        let parts = [
            self.slot(SlotKey::Muzzle1).part(),
            self.slot(SlotKey::Face1).part(),
            self.slot(SlotKey::Muzzle2).part(),
            self.slot(SlotKey::Face2).part(),
        ];
        ComparisonRequest::new(config, parts)
    }

    pub fn begin_submit(&mut self) {
        self.in_flight = true;
        self.result = None;
        self.error = None;
        self.progress.start();
    }

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

    /// Reset every slot, preview, result and error. Submission becomes
    /// unavailable again because all slots are empty.
    pub fn clear_all(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
        self.result = None;
        self.error = None;
    }
}
