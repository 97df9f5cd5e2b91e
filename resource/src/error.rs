#![allow(clippy::upper_case_acronyms)]
use libp2p_keygen::KeyError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

pub type KeyResourceResult<T> = Result<T, KeyResourceError>;

pub trait KeyResourceResultExt<T> {
    fn res_err(self, code: ErrorCode) -> KeyResourceResult<T>;
    fn res_err_ctx(self, code: ErrorCode, ctx: impl Into<String>) -> KeyResourceResult<T>;
}

impl<T, E: Display> KeyResourceResultExt<T> for Result<T, E> {
    fn res_err(self, code: ErrorCode) -> KeyResourceResult<T> {
        self.map_err(|e| KeyResourceError::new(code, e.to_string()))
    }
    fn res_err_ctx(self, code: ErrorCode, ctx: impl Into<String>) -> KeyResourceResult<T> {
        self.map_err(move |e| KeyResourceError::new(code, format!("{} ({})", ctx.into(), e)))
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    ERR_INVALID_INPUT,
    ERR_GENERATION,
    ERR_ENCODING,
    ERR_NOT_FOUND,
    ERR_ALREADY_EXISTS,
    ERR_IO,
    // the persisted state could not be understood
    ERR_STATE_INVALID,
}

impl ErrorCode {
    pub fn with_message(self, message: impl Into<String>) -> KeyResourceError {
        KeyResourceError::new(self, message)
    }

    /// One-line headline for the diagnostic shown to whoever configures the resource.
    pub fn summary(self) -> &'static str {
        use ErrorCode::*;
        match self {
            ERR_INVALID_INPUT => "Invalid key configuration",
            ERR_GENERATION => "Unable to generate key",
            ERR_ENCODING => "Unable to encode key",
            ERR_NOT_FOUND => "Key not found",
            ERR_ALREADY_EXISTS => "Key already exists",
            ERR_IO => "Unable to access key state",
            ERR_STATE_INVALID => "Invalid key state",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyResourceError {
    code: ErrorCode,
    message: String,
}

impl std::error::Error for KeyResourceError {}

impl KeyResourceError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
    pub fn code(&self) -> ErrorCode {
        self.code
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<KeyError> for KeyResourceError {
    fn from(err: KeyError) -> Self {
        let (code, message) = match err {
            KeyError::InvalidInput(m) => (ErrorCode::ERR_INVALID_INPUT, m),
            KeyError::Generation(m) => (ErrorCode::ERR_GENERATION, m),
            KeyError::Encoding(m) => (ErrorCode::ERR_ENCODING, m),
        };
        code.with_message(message)
    }
}

impl From<std::io::Error> for KeyResourceError {
    fn from(err: std::io::Error) -> Self {
        ErrorCode::ERR_IO.with_message(err.to_string())
    }
}

impl Display for KeyResourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[{:?}] {}: {}", self.code, self.code.summary(), self.message)
    }
}
