use std::fmt::{Display, Error, Formatter};

use crate::common::error::EncodeFailure;
use crate::view;

// Symbol
//------------------------------------------------------------------------------

/// One encoded symbol: the placed modules, the codeword stream they were
/// placed from, and the metadata of the encode call that produced both.
///
/// Modules are stored row-major with row 0 being the bottom row of the symbol.
/// Use [`view::to_grid`] or [`view::to_bit_string`] for top-row-first views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    w: usize,
    h: usize,
    bits: Box<[bool]>,
    codewords: Box<[u8]>,
    encoding: String,
    raw_len: usize,
    capacity: usize,
    ecc_len: usize,
}

/// Raw output of an encoder, validated into a [`Symbol`] by [`Symbol::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolParts {
    pub width: usize,
    pub height: usize,
    pub bits: Vec<bool>,
    pub codewords: Vec<u8>,
    pub encoding: String,
    pub raw_encoded_length: usize,
    pub symbol_capacity: usize,
    pub ecc_bytes: usize,
}

impl Symbol {
    pub fn new(parts: SymbolParts) -> Result<Self, EncodeFailure> {
        let SymbolParts {
            width,
            height,
            bits,
            codewords,
            encoding,
            raw_encoded_length,
            symbol_capacity,
            ecc_bytes,
        } = parts;

        if width == 0 || height == 0 {
            return Err(EncodeFailure::InvalidSize);
        }
        if width.checked_mul(height) != Some(bits.len())
            || codewords.is_empty()
            || symbol_capacity < raw_encoded_length
        {
            return Err(EncodeFailure::InconsistentSymbol);
        }

        Ok(Self {
            w: width,
            h: height,
            bits: bits.into_boxed_slice(),
            codewords: codewords.into_boxed_slice(),
            encoding,
            raw_len: raw_encoded_length,
            capacity: symbol_capacity,
            ecc_len: ecc_bytes,
        })
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Number of modules, `width * height`.
    pub fn len(&self) -> usize {
        self.w * self.h
    }

    // Always false, a symbol has at least one module
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn codewords(&self) -> &[u8] {
        &self.codewords
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Codewords of the encoded payload before padding and error correction.
    pub fn raw_encoded_length(&self) -> usize {
        self.raw_len
    }

    /// Data codewords the symbol size can hold.
    pub fn symbol_capacity(&self) -> usize {
        self.capacity
    }

    pub fn ecc_bytes(&self) -> usize {
        self.ecc_len
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(&view::to_bit_string(self))
    }
}
