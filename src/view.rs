//! Row/column and string views over an encoded [`Symbol`].
//!
//! Views are snapshots: they copy the modules out of the symbol and stay valid
//! after the symbol is re-encoded or dropped. Every view lists the top row of
//! the symbol first.

use crate::symbol::Symbol;

pub type Grid = Vec<Vec<bool>>;

/// Separator written after every row of a bit string, including the last one.
pub const ROW_SEPARATOR: char = ',';

/// Rows of the symbol from top to bottom.
pub fn rows(symbol: &Symbol) -> impl DoubleEndedIterator<Item = &[bool]> + ExactSizeIterator {
    symbol.bits().chunks_exact(symbol.width()).rev()
}

/// Grid of `height` rows, each `width` modules long.
pub fn to_grid(symbol: &Symbol) -> Grid {
    rows(symbol).map(<[bool]>::to_vec).collect()
}

/// Rows of `'1'` (dark) and `'0'` (light) characters, each followed by
/// [`ROW_SEPARATOR`].
pub fn to_bit_string(symbol: &Symbol) -> String {
    let mut res = String::with_capacity((symbol.width() + 1) * symbol.height());
    for row in rows(symbol) {
        res.extend(row.iter().map(|&dark| if dark { '1' } else { '0' }));
        res.push(ROW_SEPARATOR);
    }
    res
}
