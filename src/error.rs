use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("{reason}")]
    InvalidConfiguration { reason: &'static str },
    #[error("Invalid input. Please enter a number.")]
    InputParse,
    #[error("Please enter a number between {min} and {max}.")]
    OutOfRange { min: i64, max: i64 },
}
