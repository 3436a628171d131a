//! Error types for parking lot rearrangement.

use thiserror::Error;

use crate::arrangement::{Car, Slot};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkingError {
    /// The goal does not share the source's slots or cars.
    #[error("incompatible goal: {reason}")]
    IncompatibleGoal { reason: String },

    /// A mapping that cannot describe a lot with exactly one empty slot.
    #[error("invalid arrangement: {0}")]
    InvalidArrangement(String),

    /// A replayed move that does not fit the lot it is applied to.
    #[error("illegal move of {car} into {to}: {reason}")]
    IllegalMove { car: Car, to: Slot, reason: String },
}

impl ParkingError {
    pub(crate) fn incompatible(reason: impl Into<String>) -> Self {
        ParkingError::IncompatibleGoal {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ParkingError>;
