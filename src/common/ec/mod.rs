mod galois;

use galois::{mul, EXP_TABLE};

use super::metadata::SymbolSize;

// ECC: Error correction codeword generator
//------------------------------------------------------------------------------

/// Computes the error correction codewords for a full data codeword stream.
///
/// Data codewords are spread over `size.block_count()` blocks, codeword `i`
/// belonging to block `i % blocks`, and the error correction codewords of each
/// block are interleaved back the same way.
pub fn ecc(data: &[u8], size: SymbolSize) -> Vec<u8> {
    debug_assert!(
        data.len() == size.data_capacity(),
        "Data len doesn't match symbol capacity: Data len {}, Capacity {}",
        data.len(),
        size.data_capacity()
    );

    let blocks = size.block_count();
    let ecc_count = size.ecc_per_block();
    let mut res = vec![0; size.ecc_len()];
    for b in 0..blocks {
        let block = data.iter().skip(b).step_by(blocks).copied().collect::<Vec<_>>();
        let block_ecc = ecc_per_block(&block, ecc_count);
        for (k, v) in block_ecc.into_iter().enumerate() {
            res[b + k * blocks] = v;
        }
    }
    res
}

// Generator polynomial (x - a^1)(x - a^2)...(x - a^n), highest degree first.
// The leading coefficient is always 1 and is left out.
fn generator_polynomial(len: usize) -> Vec<u8> {
    let mut poly = vec![1u8];
    for i in 1..=len {
        let root = EXP_TABLE[i];
        let mut next = vec![0; poly.len() + 1];
        for (j, &p) in poly.iter().enumerate() {
            next[j] ^= p;
            next[j + 1] ^= mul(p, root);
        }
        poly = next;
    }
    poly.split_off(1)
}

// Performs polynomial long division with data polynomial(num)
// and generator polynomial(den) to compute remainder polynomial,
// the coefficients of which are the ecc
fn ecc_per_block(block: &[u8], ecc_count: usize) -> Vec<u8> {
    let len = block.len();
    let gen_poly = generator_polynomial(ecc_count);

    let mut res = block.to_vec();
    res.resize(len + ecc_count, 0);

    for i in 0..len {
        let lead_coeff = res[i];
        if lead_coeff == 0 {
            continue;
        }

        for (u, v) in res[i + 1..].iter_mut().zip(gen_poly.iter()) {
            *u ^= mul(*v, lead_coeff);
        }
    }

    res.split_off(len)
}
