//! The module contains the error the engine can throw.
//!
//! Every error is a caller-input error: the engine never retries and never
//! returns a partially built ledger. Callers surface these to the user
//! interface layer for correction.
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid item: {0}")]
    InvalidItem(String),
    #[error("Invalid participant: {0}")]
    InvalidParticipant(String),
    #[error("Malformed receipt: {0}")]
    MalformedReceipt(String),
    #[error("Participant \"{0}\" not found in group!")]
    UnknownParticipant(String),
    #[error("A payment username is required to generate deep links")]
    MissingPaymentHandle,
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidItem(a), Self::InvalidItem(b)) => a == b,
            (Self::InvalidParticipant(a), Self::InvalidParticipant(b)) => a == b,
            (Self::MalformedReceipt(a), Self::MalformedReceipt(b)) => a == b,
            (Self::UnknownParticipant(a), Self::UnknownParticipant(b)) => a == b,
            (Self::MissingPaymentHandle, Self::MissingPaymentHandle) => true,
            _ => false,
        }
    }
}
