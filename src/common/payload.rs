use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

use super::error::{SymbolError, SymbolResult};

// Payload
//------------------------------------------------------------------------------

/// A value that converts to the byte sequence a symbol encodes.
pub trait Payload {
    fn to_bytes(&self) -> SymbolResult<Cow<'_, [u8]>>;
}

impl Payload for [u8] {
    fn to_bytes(&self) -> SymbolResult<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self))
    }
}

impl<const N: usize> Payload for [u8; N] {
    fn to_bytes(&self) -> SymbolResult<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self))
    }
}

impl Payload for Vec<u8> {
    fn to_bytes(&self) -> SymbolResult<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self))
    }
}

impl Payload for str {
    fn to_bytes(&self) -> SymbolResult<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_bytes()))
    }
}

impl Payload for String {
    fn to_bytes(&self) -> SymbolResult<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_bytes()))
    }
}

impl<T: Payload + ?Sized> Payload for &T {
    fn to_bytes(&self) -> SymbolResult<Cow<'_, [u8]>> {
        (**self).to_bytes()
    }
}

// A missing payload is invalid input rather than an empty one
impl<T: Payload> Payload for Option<T> {
    fn to_bytes(&self) -> SymbolResult<Cow<'_, [u8]>> {
        match self {
            Some(p) => p.to_bytes(),
            None => Err(SymbolError::InvalidInput),
        }
    }
}

// Text
//------------------------------------------------------------------------------

/// Text converted to bytes in a chosen character set, UTF-8 by default.
#[derive(Debug, Clone, Copy)]
pub struct Text<'a> {
    text: &'a str,
    charset: &'static Encoding,
}

impl<'a> Text<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, charset: UTF_8 }
    }

    pub fn charset(mut self, charset: &'static Encoding) -> Self {
        self.charset = charset;
        self
    }
}

impl Payload for Text<'_> {
    fn to_bytes(&self) -> SymbolResult<Cow<'_, [u8]>> {
        // UTF-16 and replacement encode as UTF-8 instead of themselves
        if self.charset.output_encoding() != self.charset {
            return Err(SymbolError::InvalidInput);
        }
        let (bytes, _, had_errors) = self.charset.encode(self.text);
        if had_errors {
            return Err(SymbolError::InvalidInput);
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod payload_tests {
    use encoding_rs::{SHIFT_JIS, UTF_16LE, WINDOWS_1252};

    use super::{Payload, Text};
    use crate::common::error::SymbolError;

    #[test]
    fn test_plain_payloads() {
        assert_eq!(&*"HELLO".to_bytes().unwrap(), b"HELLO");
        assert_eq!(&*String::from("HELLO").to_bytes().unwrap(), b"HELLO");
        assert_eq!(&*b"HELLO".to_bytes().unwrap(), b"HELLO");
        assert_eq!(&*vec![0u8, 255].to_bytes().unwrap(), &[0u8, 255]);
        assert_eq!(&*"café".to_bytes().unwrap(), "café".as_bytes());
    }

    #[test]
    fn test_missing_payload() {
        assert_eq!(None::<&str>.to_bytes(), Err(SymbolError::InvalidInput));
        assert_eq!(&*Some("A").to_bytes().unwrap(), b"A");
    }

    #[test]
    fn test_text_charset() {
        assert_eq!(&*Text::new("café").to_bytes().unwrap(), "café".as_bytes());
        assert_eq!(&*Text::new("café").charset(WINDOWS_1252).to_bytes().unwrap(), b"caf\xe9");
        assert_eq!(&*Text::new("日本").charset(SHIFT_JIS).to_bytes().unwrap(), b"\x93\xfa\x96\x7b");
    }

    #[test]
    fn test_text_unmappable() {
        let text = Text::new("日本").charset(WINDOWS_1252);
        assert_eq!(text.to_bytes(), Err(SymbolError::InvalidInput));
        let text = Text::new("abc").charset(UTF_16LE);
        assert_eq!(text.to_bytes(), Err(SymbolError::InvalidInput));
    }
}
