use derive_more::{Display, Error};

/// Everything that can go wrong while producing a key pair.
///
/// None of these is retried internally; a failed call never yields a partial key pair.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum KeyError {
    /// The request was rejected before any key material was generated.
    #[display(fmt = "invalid input: {}", _0)]
    InvalidInput(#[error(ignore)] String),
    /// The cryptographic primitive could not produce a key pair.
    #[display(fmt = "unable to generate key: {}", _0)]
    Generation(#[error(ignore)] String),
    /// Key material exists but could not be turned into bytes or an identifier.
    #[display(fmt = "unable to encode key: {}", _0)]
    Encoding(#[error(ignore)] String),
}

impl KeyError {
    pub(crate) fn encoding(what: &str, err: impl std::fmt::Display) -> Self {
        KeyError::Encoding(format!("{}: {}", what, err))
    }

    pub(crate) fn generation(err: impl std::fmt::Display) -> Self {
        KeyError::Generation(err.to_string())
    }
}
