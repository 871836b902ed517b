use thiserror::Error;

pub type HgResult<T> = Result<T, HgError>;

#[derive(Error, Debug)]
pub enum HgError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
