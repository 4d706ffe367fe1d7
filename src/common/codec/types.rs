// Encodation scheme
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Scheme {
    Ascii,
    C40,
    Text,
    X12,
    Base256,
}

pub(crate) const ASCII_UPPER_SHIFT: u8 = 235;
pub(crate) const ASCII_DIGIT_PAIR: u8 = 130;
pub(crate) const UNLATCH: u8 = 254;
pub(crate) const PAD: u8 = 129;

// C40 and Text shift sets
const SHIFT_1: u8 = 0;
const SHIFT_2: u8 = 1;
const SHIFT_3: u8 = 2;
const UPPER_SHIFT: u8 = 30;

impl Scheme {
    /// Schemes in the order automatic selection prefers them on ties.
    pub const ALL: [Scheme; 5] = [Self::Ascii, Self::C40, Self::Text, Self::X12, Self::Base256];

    /// Letter recorded per payload byte in a symbol's encoding string.
    pub fn letter(&self) -> char {
        match self {
            Self::Ascii => 'A',
            Self::C40 => 'C',
            Self::Text => 'T',
            Self::X12 => 'X',
            Self::Base256 => 'B',
        }
    }

    pub(crate) fn latch(&self) -> Option<u8> {
        match self {
            Self::Ascii => None,
            Self::C40 => Some(230),
            Self::Text => Some(239),
            Self::X12 => Some(238),
            Self::Base256 => Some(231),
        }
    }

    /// Pushes the values a byte takes in the C40, Text or X12 value stream.
    ///
    /// Returns false when the scheme cannot represent the byte.
    pub(crate) fn push_values(&self, byte: u8, values: &mut Vec<u8>) -> bool {
        match self {
            Self::C40 | Self::Text => {
                if byte >= 0x80 {
                    values.extend([SHIFT_2, UPPER_SHIFT]);
                    return self.push_values(byte - 0x80, values);
                }
                let text = *self == Self::Text;
                let vals: &[u8] = match byte {
                    b' ' => &[3],
                    b'0'..=b'9' => &[byte - b'0' + 4],
                    b'A'..=b'Z' if !text => &[byte - b'A' + 14],
                    b'a'..=b'z' if text => &[byte - b'a' + 14],
                    b'A'..=b'Z' => &[SHIFT_3, byte - b'A' + 1],
                    b'`'..=0x7f if !text => &[SHIFT_3, byte - b'`'],
                    b'`' => &[SHIFT_3, 0],
                    b'{'..=0x7f => &[SHIFT_3, byte - b'{' + 27],
                    0..=0x1f => &[SHIFT_1, byte],
                    b'!'..=b'/' => &[SHIFT_2, byte - b'!'],
                    b':'..=b'@' => &[SHIFT_2, byte - b':' + 15],
                    b'['..=b'_' => &[SHIFT_2, byte - b'[' + 22],
                    _ => unreachable!("Byte {byte} has no C40 or Text value"),
                };
                values.extend_from_slice(vals);
                true
            }
            Self::X12 => {
                let val = match byte {
                    b'\r' => 0,
                    b'*' => 1,
                    b'>' => 2,
                    b' ' => 3,
                    b'0'..=b'9' => byte - b'0' + 4,
                    b'A'..=b'Z' => byte - b'A' + 14,
                    _ => return false,
                };
                values.push(val);
                true
            }
            Self::Ascii | Self::Base256 => unreachable!("{self:?} has no value stream"),
        }
    }
}
