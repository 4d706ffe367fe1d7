use tracing::debug;

use super::types::{Scheme, ASCII_DIGIT_PAIR, ASCII_UPPER_SHIFT, PAD, UNLATCH};
use crate::common::error::EncodeFailure;
use crate::common::metadata::SymbolSize;

// Encoded data
//------------------------------------------------------------------------------

/// Data codewords of a payload before padding, together with the scheme
/// letter used for every payload byte.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EncodedData {
    pub codewords: Vec<u8>,
    pub encoding: String,
}

// Encoder
//------------------------------------------------------------------------------

/// Encodes data with the given scheme, or with the scheme yielding the fewest
/// codewords when none is given.
pub fn encode(data: &[u8], scheme: Option<Scheme>) -> Result<EncodedData, EncodeFailure> {
    match scheme {
        Some(s) => encode_with_scheme(data, s),
        None => {
            let best = Scheme::ALL
                .iter()
                .filter_map(|&s| encode_with_scheme(data, s).ok().map(|e| (s, e)))
                .min_by_key(|(_, e)| e.codewords.len());
            match best {
                Some((s, encoded)) => {
                    debug!(scheme = ?s, codewords = encoded.codewords.len(), "Selected encodation scheme");
                    Ok(encoded)
                }
                None => Err(EncodeFailure::DataTooLong),
            }
        }
    }
}

pub fn encode_with_scheme(data: &[u8], scheme: Scheme) -> Result<EncodedData, EncodeFailure> {
    match scheme {
        Scheme::Ascii => Ok(encode_ascii(data)),
        Scheme::C40 | Scheme::Text | Scheme::X12 => encode_triples(data, scheme),
        Scheme::Base256 => encode_base256(data),
    }
}

fn encode_ascii(data: &[u8]) -> EncodedData {
    let mut codewords = Vec::with_capacity(data.len());
    push_ascii(data, &mut codewords);
    EncodedData { codewords, encoding: "A".repeat(data.len()) }
}

fn push_ascii(data: &[u8], codewords: &mut Vec<u8>) {
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        match data.get(i + 1) {
            Some(&next) if b.is_ascii_digit() && next.is_ascii_digit() => {
                codewords.push(ASCII_DIGIT_PAIR + (b - b'0') * 10 + (next - b'0'));
                i += 2;
                continue;
            }
            _ => {}
        }
        if b >= 0x80 {
            codewords.extend([ASCII_UPPER_SHIFT, b - 0x80 + 1]);
        } else {
            codewords.push(b + 1);
        }
        i += 1;
    }
}

// C40, Text and X12 pack three values into two codewords. Only complete
// triples are emitted; the bytes after the last complete triple follow the
// unlatch codeword in ASCII.
fn encode_triples(data: &[u8], scheme: Scheme) -> Result<EncodedData, EncodeFailure> {
    let mut values = Vec::with_capacity(data.len() * 2);
    let mut cut = 0;
    let mut cut_values = 0;
    for (i, &b) in data.iter().enumerate() {
        if !scheme.push_values(b, &mut values) {
            return Err(EncodeFailure::InvalidChar);
        }
        if values.len() % 3 == 0 {
            cut = i + 1;
            cut_values = values.len();
        }
    }

    if cut == 0 {
        return Ok(encode_ascii(data));
    }

    let latch = scheme.latch().ok_or(EncodeFailure::InvalidChar)?;
    let mut codewords = Vec::with_capacity(2 + cut_values * 2 / 3 + (data.len() - cut) * 2);
    codewords.push(latch);
    for t in values[..cut_values].chunks_exact(3) {
        let packed = 1600 * t[0] as u16 + 40 * t[1] as u16 + t[2] as u16 + 1;
        codewords.extend(packed.to_be_bytes());
    }
    codewords.push(UNLATCH);
    push_ascii(&data[cut..], &mut codewords);

    let mut encoding = String::with_capacity(data.len());
    encoding.extend(std::iter::repeat(scheme.letter()).take(cut));
    encoding.extend(std::iter::repeat(Scheme::Ascii.letter()).take(data.len() - cut));
    Ok(EncodedData { codewords, encoding })
}

fn encode_base256(data: &[u8]) -> Result<EncodedData, EncodeFailure> {
    let len = data.len();
    if len > SymbolSize::MAX_DATA_CAPACITY {
        return Err(EncodeFailure::DataTooLong);
    }

    let mut field = Vec::with_capacity(len + 2);
    if len < 250 {
        field.push(len as u8);
    } else {
        field.extend([(len / 250 + 249) as u8, (len % 250) as u8]);
    }
    field.extend_from_slice(data);

    let mut codewords = Vec::with_capacity(field.len() + 1);
    codewords.push(Scheme::Base256.latch().ok_or(EncodeFailure::InvalidChar)?);
    for v in field {
        let pos = codewords.len() + 1;
        codewords.push(randomize_255(v, pos));
    }
    Ok(EncodedData { codewords, encoding: "B".repeat(len) })
}

// Pads
//------------------------------------------------------------------------------

/// Fills the codeword stream up to `capacity` with pad codewords.
pub fn pad(codewords: &mut Vec<u8>, capacity: usize) {
    if codewords.len() < capacity {
        codewords.push(PAD);
    }
    while codewords.len() < capacity {
        let pos = codewords.len() + 1;
        codewords.push(randomize_253(PAD, pos));
    }
}

// Randomising algorithms take the 1-based position of the codeword in the
// data stream
fn randomize_253(value: u8, pos: usize) -> u8 {
    let pseudo_random = (149 * pos) % 253 + 1;
    let res = value as usize + pseudo_random;
    if res <= 254 {
        res as u8
    } else {
        (res - 254) as u8
    }
}

fn randomize_255(value: u8, pos: usize) -> u8 {
    let pseudo_random = (149 * pos) % 255 + 1;
    let res = value as usize + pseudo_random;
    if res <= 255 {
        res as u8
    } else {
        (res - 256) as u8
    }
}
