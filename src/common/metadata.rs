// Symbol size
//------------------------------------------------------------------------------

/// One entry of the ECC200 symbol size table.
///
/// Sizes are listed in canonical order, by module count then capacity, and that
/// order is what dimension selection walks.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct SymbolSize {
    w: usize,
    h: usize,
    // Data region dimensions
    rw: usize,
    rh: usize,
    // Data codewords
    cap: usize,
    // Data codewords per interleaved block
    dblock: usize,
    // Error correction codewords per interleaved block
    eblock: usize,
}

impl SymbolSize {
    const fn new(h: usize, w: usize, rh: usize, rw: usize, cap: usize, dblock: usize, eblock: usize) -> Self {
        Self { w, h, rw, rh, cap, dblock, eblock }
    }

    #[rustfmt::skip]
    pub const ALL: [SymbolSize; 30] = [
        Self::new(10, 10, 10, 10, 3, 3, 5),
        Self::new(12, 12, 12, 12, 5, 5, 7),
        Self::new(8, 18, 8, 18, 5, 5, 7),
        Self::new(14, 14, 14, 14, 8, 8, 10),
        Self::new(8, 32, 8, 16, 10, 10, 11),
        Self::new(16, 16, 16, 16, 12, 12, 12),
        Self::new(12, 26, 12, 26, 16, 16, 14),
        Self::new(18, 18, 18, 18, 18, 18, 14),
        Self::new(20, 20, 20, 20, 22, 22, 18),
        Self::new(12, 36, 12, 18, 22, 22, 18),
        Self::new(22, 22, 22, 22, 30, 30, 20),
        Self::new(16, 36, 16, 18, 32, 32, 24),
        Self::new(24, 24, 24, 24, 36, 36, 24),
        Self::new(26, 26, 26, 26, 44, 44, 28),
        Self::new(16, 48, 16, 24, 49, 49, 28),
        Self::new(32, 32, 16, 16, 62, 62, 36),
        Self::new(36, 36, 18, 18, 86, 86, 42),
        Self::new(40, 40, 20, 20, 114, 114, 48),
        Self::new(44, 44, 22, 22, 144, 144, 56),
        Self::new(48, 48, 24, 24, 174, 174, 68),
        Self::new(52, 52, 26, 26, 204, 102, 42),
        Self::new(64, 64, 16, 16, 280, 140, 56),
        Self::new(72, 72, 18, 18, 368, 92, 36),
        Self::new(80, 80, 20, 20, 456, 114, 48),
        Self::new(88, 88, 22, 22, 576, 144, 56),
        Self::new(96, 96, 24, 24, 696, 174, 68),
        Self::new(104, 104, 26, 26, 816, 136, 56),
        Self::new(120, 120, 20, 20, 1050, 175, 68),
        Self::new(132, 132, 22, 22, 1304, 163, 62),
        // 8 blocks of 156 data codewords followed by 2 blocks of 155
        Self::new(144, 144, 24, 24, 1558, 156, 62),
    ];

    pub const MAX_DATA_CAPACITY: usize = 1558;

    pub const fn width(&self) -> usize {
        self.w
    }

    pub const fn height(&self) -> usize {
        self.h
    }

    pub const fn region_width(&self) -> usize {
        self.rw
    }

    pub const fn region_height(&self) -> usize {
        self.rh
    }

    pub const fn module_count(&self) -> usize {
        self.w * self.h
    }

    pub const fn is_square(&self) -> bool {
        self.w == self.h
    }

    /// Maximum number of data codewords the size holds.
    pub const fn data_capacity(&self) -> usize {
        self.cap
    }

    pub const fn block_count(&self) -> usize {
        (self.cap + 2) / self.dblock
    }

    pub const fn ecc_per_block(&self) -> usize {
        self.eblock
    }

    pub const fn ecc_len(&self) -> usize {
        self.block_count() * self.eblock
    }

    pub const fn total_codewords(&self) -> usize {
        self.cap + self.ecc_len()
    }

    // Width and height of the module mapping matrix, i.e. the symbol without
    // finder and clock patterns of each data region
    pub const fn mapping_width(&self) -> usize {
        self.w - 2 * (self.w / self.rw)
    }

    pub const fn mapping_height(&self) -> usize {
        self.h - 2 * (self.h / self.rh)
    }

    pub fn from_dimensions(width: usize, height: usize) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.w == width && s.h == height)
    }

    /// Smallest size, in table order, whose data capacity holds `len` codewords.
    pub fn select(len: usize) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.cap >= len)
    }

    /// First size at or after `self` in table order that holds `len` codewords.
    pub(crate) fn fit_from(self, len: usize) -> Option<Self> {
        Self::ALL.iter().copied().skip_while(|s| *s != self).find(|s| s.cap >= len)
    }
}
