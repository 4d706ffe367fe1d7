use tracing::debug;

use crate::common::{
    bit_utils::bit_at,
    codec::{self, Scheme},
    ec::ecc,
    error::EncodeFailure,
    metadata::SymbolSize,
    placement::{Placement, Slot},
};
use crate::symbol::{Symbol, SymbolParts};

// Encoder contract
//------------------------------------------------------------------------------

/// Turns a byte payload into a placed symbol.
///
/// `hint` is the size pre-selected for the payload; an encoder may pick
/// another size when the encoded payload does not fit it.
pub trait SymbolEncoder {
    fn encode(&self, hint: SymbolSize, payload: &[u8]) -> Result<Symbol, EncodeFailure>;
}

impl<E: SymbolEncoder + ?Sized> SymbolEncoder for &E {
    fn encode(&self, hint: SymbolSize, payload: &[u8]) -> Result<Symbol, EncodeFailure> {
        (**self).encode(hint, payload)
    }
}

impl<E: SymbolEncoder + ?Sized> SymbolEncoder for Box<E> {
    fn encode(&self, hint: SymbolSize, payload: &[u8]) -> Result<Symbol, EncodeFailure> {
        (**self).encode(hint, payload)
    }
}

// ECC200 encoder
//------------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ecc200 {
    scheme: Option<Scheme>,
}

impl Ecc200 {
    pub fn new() -> Self {
        Self { scheme: None }
    }

    /// Encodes every payload with `scheme` instead of the shortest scheme.
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    pub fn auto_scheme(mut self) -> Self {
        self.scheme = None;
        self
    }

    pub fn forced_scheme(&self) -> Option<Scheme> {
        self.scheme
    }
}

impl SymbolEncoder for Ecc200 {
    fn encode(&self, hint: SymbolSize, payload: &[u8]) -> Result<Symbol, EncodeFailure> {
        let encoded = codec::encode(payload, self.scheme)?;
        let raw_len = encoded.codewords.len();

        let size = hint.fit_from(raw_len).ok_or(EncodeFailure::DataTooLong)?;
        if size != hint {
            debug!(
                hint = ?(hint.width(), hint.height()),
                size = ?(size.width(), size.height()),
                codewords = raw_len,
                "Size hint too small for encoded payload"
            );
        }

        let mut codewords = encoded.codewords;
        codec::pad(&mut codewords, size.data_capacity());
        let ecc_codewords = ecc(&codewords, size);
        codewords.extend(ecc_codewords);

        let bits = draw_modules(size, &codewords);

        Symbol::new(SymbolParts {
            width: size.width(),
            height: size.height(),
            bits,
            codewords,
            encoding: encoded.encoding,
            raw_encoded_length: raw_len,
            symbol_capacity: size.data_capacity(),
            ecc_bytes: size.ecc_len(),
        })
    }
}

// Module drawing
//------------------------------------------------------------------------------

// Draws the finder and clock patterns of every data region, then the mapping
// matrix. Row 0 of the result is the bottom row of the symbol.
fn draw_modules(size: SymbolSize, codewords: &[u8]) -> Vec<bool> {
    let (w, h) = (size.width(), size.height());
    let (rw, rh) = (size.region_width(), size.region_height());
    let mut bits = vec![false; w * h];

    // Solid bottom edge and alternating top edge of each region
    for y in (0..h).step_by(rh) {
        for x in 0..w {
            bits[y * w + x] = true;
        }
        for x in (0..w).step_by(2) {
            bits[(y + rh - 1) * w + x] = true;
        }
    }

    // Solid left edge and alternating right edge of each region
    for x in (0..w).step_by(rw) {
        for y in 0..h {
            bits[y * w + x] = true;
        }
        for y in (0..h).step_by(2) {
            bits[y * w + x + rw - 1] = true;
        }
    }

    let placement = Placement::new(size);
    let (nr, nc) = (placement.rows(), placement.cols());
    for y in 0..nr {
        for x in 0..nc {
            let dark = match placement.get(nr - y - 1, x) {
                Slot::Dark => true,
                Slot::Codeword { index, bit } => bit_at(codewords[index], bit as usize),
                Slot::Empty => false,
            };
            if dark {
                let row = 1 + y + 2 * (y / (rh - 2));
                let col = 1 + x + 2 * (x / (rw - 2));
                bits[row * w + col] = true;
            }
        }
    }

    bits
}

#[cfg(test)]
mod ecc200_tests {
    use test_case::test_case;

    use super::{Ecc200, SymbolEncoder};
    use crate::common::codec::Scheme;
    use crate::common::error::EncodeFailure;
    use crate::common::metadata::SymbolSize;
    use crate::view::{to_bit_string, to_grid};

    fn size(w: usize, h: usize) -> SymbolSize {
        SymbolSize::from_dimensions(w, h).unwrap()
    }

    #[test]
    fn test_iso_reference_codewords() {
        let symbol = Ecc200::new().encode(size(10, 10), b"123456").unwrap();
        assert_eq!(symbol.codewords(), &[142, 164, 186, 114, 25, 5, 88, 102]);
        assert_eq!(symbol.raw_encoded_length(), 3);
        assert_eq!(symbol.symbol_capacity(), 3);
        assert_eq!(symbol.ecc_bytes(), 5);
        assert_eq!(symbol.encoding(), "AAAAAA");
    }

    #[test]
    fn test_iso_reference_modules() {
        let symbol = Ecc200::new().encode(size(10, 10), b"123456").unwrap();
        assert_eq!(
            to_bit_string(&symbol),
            "1010101010,1100101101,1100000100,1100011101,1100001000,\
             1000001111,1110110000,1111011001,1001110100,1111111111,"
        );
    }

    #[test]
    fn test_hello_padded() {
        let symbol = Ecc200::new().encode(size(14, 14), b"HELLO ").unwrap();
        assert_eq!(
            symbol.codewords(),
            &[73, 70, 77, 77, 80, 33, 129, 56, 175, 201, 168, 158, 82, 116, 68, 40, 191, 107]
        );
        assert_eq!(
            to_bit_string(&symbol),
            "10101010101010,10110100101111,10000110101000,11100101001001,11000000110100,\
             11100101101101,10001101011000,10011000000011,10100100100000,11000110101001,\
             11011000010110,11111110101101,10011110010100,11111111111111,"
        );
    }

    #[test]
    fn test_hint_grows_when_too_small() {
        // Bytes above 127 take two ASCII codewords each
        let symbol = Ecc200::new().scheme(Scheme::Ascii).encode(size(10, 10), &[0xe9, 0xe9]).unwrap();
        assert_eq!((symbol.width(), symbol.height()), (12, 12));
        assert_eq!(symbol.raw_encoded_length(), 4);
    }

    #[test]
    fn test_hint_kept_when_roomy() {
        let symbol = Ecc200::new().encode(size(14, 14), b"1").unwrap();
        assert_eq!((symbol.width(), symbol.height()), (14, 14));
        assert_eq!(symbol.raw_encoded_length(), 1);
        assert_eq!(symbol.symbol_capacity(), 8);
    }

    #[test]
    fn test_data_too_long() {
        let data = vec![b'a'; 3200];
        let res = Ecc200::new().scheme(Scheme::Ascii).encode(size(10, 10), &data);
        assert_eq!(res, Err(EncodeFailure::DataTooLong));
    }

    #[test]
    fn test_forced_scheme_rejects_char() {
        let res = Ecc200::new().scheme(Scheme::X12).encode(size(10, 10), b"hello");
        assert_eq!(res, Err(EncodeFailure::InvalidChar));
    }

    #[test]
    fn test_builder() {
        let enc = Ecc200::new().scheme(Scheme::Text);
        assert_eq!(enc.forced_scheme(), Some(Scheme::Text));
        assert_eq!(enc.auto_scheme(), Ecc200::default());
    }

    #[test_case(10, 10)]
    #[test_case(12, 12)]
    #[test_case(18, 8)]
    #[test_case(32, 8)]
    #[test_case(26, 12)]
    #[test_case(36, 16)]
    #[test_case(48, 16)]
    #[test_case(32, 32)]
    #[test_case(52, 52)]
    #[test_case(64, 64)]
    #[test_case(144, 144)]
    fn test_finder_and_clock(w: usize, h: usize) {
        let s = size(w, h);
        let symbol = Ecc200::new().encode(s, b"A").unwrap();
        assert_eq!((symbol.width(), symbol.height()), (w, h));
        assert_eq!(symbol.codewords().len(), s.total_codewords());

        let grid = to_grid(&symbol);
        let (rw, rh) = (s.region_width(), s.region_height());
        for top in (0..h).step_by(rh) {
            let bottom = top + rh - 1;
            for x in 0..w {
                // Grid rows are top first: region bottom edge is solid
                assert!(grid[bottom][x], "{w}x{h}: bottom edge at ({bottom}, {x})");
                assert_eq!(grid[top][x], x % 2 == 0, "{w}x{h}: top edge at ({top}, {x})");
            }
        }
        for left in (0..w).step_by(rw) {
            let right = left + rw - 1;
            for y in 0..h {
                assert!(grid[y][left], "{w}x{h}: left edge at ({y}, {left})");
                assert_eq!(grid[y][right], (h - 1 - y) % 2 == 0, "{w}x{h}: right edge at ({y}, {right})");
            }
        }
    }
}
