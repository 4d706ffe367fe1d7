use std::fmt::{Display, Error, Formatter};

use crate::common::{error::SymbolResult, payload::Payload};
use crate::encoder::{Ecc200, SymbolEncoder};
use crate::store::SymbolStore;
use crate::symbol::Symbol;
use crate::view::Grid;

// Data Matrix handle
//------------------------------------------------------------------------------

/// An encoded Data Matrix symbol that can be re-encoded in place.
///
/// Accessors never fail: while no symbol is held, after a failed encode,
/// counts read as 0 and slices as empty.
#[derive(Debug, Clone)]
pub struct DataMatrix<E = Ecc200> {
    store: SymbolStore<E>,
}

impl DataMatrix {
    pub fn new<P: Payload + ?Sized>(payload: &P) -> SymbolResult<Self> {
        Self::with_encoder(Ecc200::new(), payload)
    }
}

impl<E: SymbolEncoder> DataMatrix<E> {
    pub fn with_encoder<P: Payload + ?Sized>(encoder: E, payload: &P) -> SymbolResult<Self> {
        let mut store = SymbolStore::with_encoder(encoder);
        store.encode(payload)?;
        Ok(Self { store })
    }

    /// Re-encodes with a new payload and returns the grid of the new symbol.
    pub fn encode<P: Payload + ?Sized>(&mut self, payload: &P) -> SymbolResult<Grid> {
        self.store.encode(payload)?;
        Ok(self.store.grid().unwrap_or_default())
    }

    pub fn store(&self) -> &SymbolStore<E> {
        &self.store
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        self.store.symbol()
    }

    /// Rows of modules, top row first.
    pub fn data(&self) -> Option<Grid> {
        self.store.grid()
    }

    pub fn to_grid(&self) -> Option<Grid> {
        self.data()
    }

    pub fn to_bit_string(&self) -> Option<String> {
        self.store.bit_string()
    }

    pub fn encoded_codewords(&self) -> &[u8] {
        self.store.codewords().unwrap_or_default()
    }

    pub fn encoding(&self) -> &str {
        self.store.encoding().unwrap_or_default()
    }

    pub fn width(&self) -> usize {
        self.store.width().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.store.height().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.store.len().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn raw_encoded_length(&self) -> usize {
        self.store.raw_encoded_length().unwrap_or(0)
    }

    pub fn symbol_capacity(&self) -> usize {
        self.store.symbol_capacity().unwrap_or(0)
    }

    pub fn ecc_bytes(&self) -> usize {
        self.store.ecc_bytes().unwrap_or(0)
    }
}

impl<E: SymbolEncoder> Display for DataMatrix<E> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self.store.symbol() {
            Some(symbol) => Display::fmt(symbol, f),
            None => Ok(()),
        }
    }
}
