use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid year range: {min} is after {max}")]
    InvalidYearRange { min: i32, max: i32 },
}
