#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid: {0}")]
    Invalid(&'static str),
    #[error("Malformed: {0}")]
    Malformed(&'static str),
    #[error("Unrecognized: {0}")]
    Unrecognized(&'static str),
}
