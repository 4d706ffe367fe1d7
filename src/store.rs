use tracing::{debug, info, warn};

use crate::common::{
    error::{EncodeFailure, SymbolError, SymbolResult},
    metadata::SymbolSize,
    payload::Payload,
};
use crate::encoder::{Ecc200, SymbolEncoder};
use crate::symbol::Symbol;
use crate::view::{self, Grid};

/// Byte appended to every payload before encoding.
///
/// The appended byte is part of the encoded data and counts towards
/// `raw_encoded_length`.
pub const PAYLOAD_PAD: u8 = b' ';

// Symbol store
//------------------------------------------------------------------------------

/// Owns at most one encoded [`Symbol`] and mediates every change to it.
///
/// A store is either empty or holds a symbol produced by a single encode call.
/// Mutation takes `&mut self`; share a store between threads behind a lock.
#[derive(Debug, Clone, Default)]
pub struct SymbolStore<E = Ecc200> {
    encoder: E,
    symbol: Option<Symbol>,
}

impl SymbolStore {
    pub fn new() -> Self {
        Self::with_encoder(Ecc200::new())
    }
}

impl<E: SymbolEncoder> SymbolStore<E> {
    pub fn with_encoder(encoder: E) -> Self {
        Self { encoder, symbol: None }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Encodes `payload`, replacing the symbol held so far.
    ///
    /// Invalid input leaves the store as it was. Any other failure leaves the
    /// store empty.
    pub fn encode<P: Payload + ?Sized>(&mut self, payload: &P) -> SymbolResult<()> {
        let data = payload.to_bytes()?;
        if data.is_empty() {
            return Err(SymbolError::InvalidInput);
        }

        // Release the previous symbol before encoding the new one
        self.destroy();

        let padded = pad_payload(&data);
        let Some(hint) = SymbolSize::select(padded.len()) else {
            warn!(len = padded.len(), "Payload exceeds largest symbol");
            return Err(EncodeFailure::DataTooLong.into());
        };
        debug!(
            len = padded.len(),
            width = hint.width(),
            height = hint.height(),
            "Pre-selected symbol size"
        );

        match self.encoder.encode(hint, &padded) {
            Ok(symbol) => {
                info!(
                    width = symbol.width(),
                    height = symbol.height(),
                    raw_encoded_length = symbol.raw_encoded_length(),
                    symbol_capacity = symbol.symbol_capacity(),
                    ecc_bytes = symbol.ecc_bytes(),
                    "Symbol encoded"
                );
                self.symbol = Some(symbol);
                Ok(())
            }
            Err(failure) => {
                warn!(%failure, len = padded.len(), "Encoding failed");
                Err(failure.into())
            }
        }
    }

    /// Drops the held symbol. Calling it on an empty store does nothing.
    pub fn destroy(&mut self) {
        if let Some(symbol) = self.symbol.take() {
            debug!(width = symbol.width(), height = symbol.height(), "Symbol released");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.symbol.is_none()
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    pub fn try_symbol(&self) -> SymbolResult<&Symbol> {
        self.symbol.as_ref().ok_or(SymbolError::UseBeforeEncode)
    }

    pub fn width(&self) -> Option<usize> {
        self.symbol().map(Symbol::width)
    }

    pub fn height(&self) -> Option<usize> {
        self.symbol().map(Symbol::height)
    }

    /// Number of modules, `width * height`.
    pub fn len(&self) -> Option<usize> {
        self.symbol().map(Symbol::len)
    }

    pub fn raw_encoded_length(&self) -> Option<usize> {
        self.symbol().map(Symbol::raw_encoded_length)
    }

    pub fn symbol_capacity(&self) -> Option<usize> {
        self.symbol().map(Symbol::symbol_capacity)
    }

    pub fn ecc_bytes(&self) -> Option<usize> {
        self.symbol().map(Symbol::ecc_bytes)
    }

    pub fn codewords(&self) -> Option<&[u8]> {
        self.symbol().map(Symbol::codewords)
    }

    pub fn encoding(&self) -> Option<&str> {
        self.symbol().map(Symbol::encoding)
    }

    pub fn grid(&self) -> Option<Grid> {
        self.symbol().map(view::to_grid)
    }

    pub fn bit_string(&self) -> Option<String> {
        self.symbol().map(view::to_bit_string)
    }
}

fn pad_payload(data: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(data.len() + 1);
    padded.extend_from_slice(data);
    padded.push(PAYLOAD_PAD);
    padded
}
