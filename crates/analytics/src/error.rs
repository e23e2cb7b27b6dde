use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Unknown revenue threshold '{0}'")]
    UnknownRevenueTier(String),
}
