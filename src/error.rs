#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum Error {
    #[error("Invalid operation")]
    InvalidOperation,
    #[error("Invalid door index: {0}")]
    InvalidDoorIndex(u32),
    #[error("Invalid arrangement: exactly one car is required")]
    InvalidArrangement,
    #[error("Invalid trial count: {0}")]
    InvalidTrialCount(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
