use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unknown visualization context: {0}")]
    UnknownContext(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Io(_) => "IO_ERROR",
            Error::Json(_) => "JSON_ERROR",
            Error::InvalidData(_) => "INVALID_DATA",
            Error::UnknownContext(_) => "UNKNOWN_CONTEXT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(Error::InvalidData("x".into()).code(), "INVALID_DATA");
        assert_eq!(
            Error::UnknownContext("orbit".into()).code(),
            "UNKNOWN_CONTEXT"
        );
    }

    #[test]
    fn json_errors_convert() {
        let err: Error = serde_json::from_str::<Vec<f64>>("not json")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "JSON_ERROR");
    }
}
