use super::metadata::SymbolSize;

// Slot of the mapping matrix
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Slot {
    Empty,
    // Bit `bit` of codeword `index`, bit 7 being the most significant
    Codeword { index: usize, bit: u8 },
    // Fixed dark module of the unfilled bottom right corner
    Dark,
}

/// ECC200 module placement over the mapping matrix, i.e. the symbol with the
/// finder and clock patterns of every data region removed.
///
/// Row 0 is the top row of the mapping matrix.
#[derive(Debug, Clone)]
pub struct Placement {
    slots: Vec<Slot>,
    nr: isize,
    nc: isize,
}

impl Placement {
    pub fn new(size: SymbolSize) -> Self {
        let nr = size.mapping_height() as isize;
        let nc = size.mapping_width() as isize;
        let mut placement = Self { slots: vec![Slot::Empty; (nr * nc) as usize], nr, nc };
        placement.place_all();
        placement
    }

    pub fn rows(&self) -> usize {
        self.nr as usize
    }

    pub fn cols(&self) -> usize {
        self.nc as usize
    }

    pub fn get(&self, r: usize, c: usize) -> Slot {
        self.slots[r * self.nc as usize + c]
    }

    fn index(&self, r: isize, c: isize) -> usize {
        debug_assert!(0 <= r && r < self.nr, "Row out of mapping matrix: {r}");
        debug_assert!(0 <= c && c < self.nc, "Column out of mapping matrix: {c}");
        (r * self.nc + c) as usize
    }

    fn is_empty(&self, r: isize, c: isize) -> bool {
        self.slots[self.index(r, c)] == Slot::Empty
    }

    // Places one bit, wrapping coordinates that fall off the top or left edge
    fn place_bit(&mut self, mut r: isize, mut c: isize, index: usize, bit: u8) {
        if r < 0 {
            r += self.nr;
            c += 4 - ((self.nr + 4) % 8);
        }
        if c < 0 {
            c += self.nc;
            r += 4 - ((self.nc + 4) % 8);
        }
        let i = self.index(r, c);
        self.slots[i] = Slot::Codeword { index, bit };
    }

    fn place_bits(&mut self, coords: [(isize, isize); 8], index: usize) {
        for (bit, (r, c)) in (0..8).rev().zip(coords) {
            self.place_bit(r, c, index, bit);
        }
    }

    // Standard L shaped "utah" block with its bottom right module at (r, c)
    fn place_utah(&mut self, r: isize, c: isize, index: usize) {
        self.place_bits(
            [
                (r - 2, c - 2),
                (r - 2, c - 1),
                (r - 1, c - 2),
                (r - 1, c - 1),
                (r - 1, c),
                (r, c - 2),
                (r, c - 1),
                (r, c),
            ],
            index,
        );
    }

    fn place_corner_a(&mut self, index: usize) {
        let (nr, nc) = (self.nr, self.nc);
        self.place_bits(
            [(nr - 1, 0), (nr - 1, 1), (nr - 1, 2), (0, nc - 2), (0, nc - 1), (1, nc - 1), (2, nc - 1), (3, nc - 1)],
            index,
        );
    }

    fn place_corner_b(&mut self, index: usize) {
        let (nr, nc) = (self.nr, self.nc);
        self.place_bits(
            [(nr - 3, 0), (nr - 2, 0), (nr - 1, 0), (0, nc - 4), (0, nc - 3), (0, nc - 2), (0, nc - 1), (1, nc - 1)],
            index,
        );
    }

    fn place_corner_c(&mut self, index: usize) {
        let (nr, nc) = (self.nr, self.nc);
        self.place_bits(
            [(nr - 3, 0), (nr - 2, 0), (nr - 1, 0), (0, nc - 2), (0, nc - 1), (1, nc - 1), (2, nc - 1), (3, nc - 1)],
            index,
        );
    }

    fn place_corner_d(&mut self, index: usize) {
        let (nr, nc) = (self.nr, self.nc);
        self.place_bits(
            [(nr - 1, 0), (nr - 1, nc - 1), (0, nc - 3), (0, nc - 2), (0, nc - 1), (1, nc - 3), (1, nc - 2), (1, nc - 1)],
            index,
        );
    }

    // Walks the mapping matrix in diagonal sweeps, alternating up-right and
    // down-left, placing one codeword per empty utah position
    fn place_all(&mut self) {
        let (nr, nc) = (self.nr, self.nc);
        let mut index = 0;
        let (mut r, mut c) = (4, 0);

        loop {
            if r == nr && c == 0 {
                self.place_corner_a(index);
                index += 1;
            }
            if r == nr - 2 && c == 0 && nc % 4 != 0 {
                self.place_corner_b(index);
                index += 1;
            }
            if r == nr - 2 && c == 0 && nc % 8 == 4 {
                self.place_corner_c(index);
                index += 1;
            }
            if r == nr + 4 && c == 2 && nc % 8 == 0 {
                self.place_corner_d(index);
                index += 1;
            }

            // Up and right
            loop {
                if r < nr && c >= 0 && self.is_empty(r, c) {
                    self.place_utah(r, c, index);
                    index += 1;
                }
                r -= 2;
                c += 2;
                if r < 0 || c >= nc {
                    break;
                }
            }
            r += 1;
            c += 3;

            // Down and left
            loop {
                if r >= 0 && c < nc && self.is_empty(r, c) {
                    self.place_utah(r, c, index);
                    index += 1;
                }
                r += 2;
                c -= 2;
                if r >= nr || c < 0 {
                    break;
                }
            }
            r += 3;
            c += 1;

            if r >= nr && c >= nc {
                break;
            }
        }

        let last = self.slots.len() - 1;
        if self.slots[last] == Slot::Empty {
            self.slots[last] = Slot::Dark;
            self.slots[last - self.nc as usize - 1] = Slot::Dark;
        }
    }
}
