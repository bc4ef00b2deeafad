use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("unknown workout code: `{0}`")]
    UnknownCode(String),
    #[error("`{code}` expects {expected} readings, got {got}")]
    ReadingCount {
        code: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("duration must be positive, got {0} h")]
    NonPositiveDuration(f64),
}
