use crate::MessageId;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Input is not a whole number")]
    NotAnInteger,
    #[error("{value} is outside of {min}..={max}")]
    OutOfRange { value: u64, min: u8, max: u8 },
}

impl GameError {
    /// Catalog entry shown to the player for this error.
    pub const fn message_id(self) -> MessageId {
        match self {
            Self::NotAnInteger => MessageId::NotAnInteger,
            Self::OutOfRange { min, max, .. } => MessageId::OutOfRange { min, max },
        }
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
