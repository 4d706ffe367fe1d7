use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum SymbolError {
    // Symbol store
    #[error("Invalid input")]
    InvalidInput,
    #[error("Encoding failed: {0}")]
    EncodingFailed(EncodeFailure),
    #[error("Symbol used before encode")]
    UseBeforeEncode,
}

/// Reason an encoder could not produce a symbol.
#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum EncodeFailure {
    #[error("Data too long")]
    DataTooLong,
    #[error("Invalid character for encodation scheme")]
    InvalidChar,
    #[error("Invalid symbol size")]
    InvalidSize,
    #[error("Inconsistent symbol")]
    InconsistentSymbol,
}

impl From<EncodeFailure> for SymbolError {
    fn from(failure: EncodeFailure) -> Self {
        Self::EncodingFailed(failure)
    }
}

pub type SymbolResult<T> = Result<T, SymbolError>;
