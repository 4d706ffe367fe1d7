//! # semacode
//!
//! A Rust library for encoding ECC200 Data Matrix symbols ("semacodes") with
//! Reed-Solomon error correction.
//!
//! ## Features
//!
//! - **Symbol Encoding**: All 30 ECC200 sizes, square and rectangular, from 10x10 to 144x144
//! - **Encodation Schemes**: ASCII, C40, Text, X12 and Base256, with the shortest picked automatically
//! - **Symbol Store**: Owns one encoded symbol and keeps it consistent across re-encodes and failures
//! - **Views**: Top-row-first module grids and comma separated bit strings
//!
//! ## Quick Start
//!
//! ### Simple Encoding
//!
//! ```rust
//! use semacode::DataMatrix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dm = DataMatrix::new("HELLO")?;
//! assert_eq!((dm.width(), dm.height()), (14, 14));
//!
//! // One group of '0'/'1' per row, each followed by a ','
//! let bits = dm.to_bit_string().unwrap_or_default();
//! assert_eq!(bits.split_terminator(',').count(), dm.height());
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use semacode::{encoding_rs::WINDOWS_1252, Ecc200, Scheme, SymbolStore, Text};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SymbolStore::with_encoder(Ecc200::new().scheme(Scheme::Text)); // Force an encodation scheme
//! store.encode(&Text::new("café").charset(WINDOWS_1252))?; // Encode text in a legacy charset
//!
//! let symbol = store.try_symbol()?;
//! println!("{}x{} symbol, {} of {} data codewords", symbol.width(), symbol.height(),
//!     symbol.raw_encoded_length(), symbol.symbol_capacity());
//!
//! store.destroy();
//! assert!(store.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Symbol Components
//!
//! ### Sizes
//! - **Square**: 24 sizes from 10x10 to 144x144, split into up to 36 data regions
//! - **Rectangular**: 6 sizes from 18x8 to 48x16
//!
//! The store pre-selects the smallest size whose data capacity covers the
//! payload plus one trailing space. The encoder moves to a larger size when the
//! encoded codewords do not fit.
//!
//! ### Encodation Schemes
//! - **ASCII**: One codeword per character, two digits per codeword
//! - **C40 / Text**: Three upper (C40) or lower (Text) case characters per two codewords
//! - **X12**: Three ANSI X12 characters per two codewords
//! - **Base256**: Arbitrary bytes behind a length field

pub(crate) mod common;
pub mod datamatrix;
pub mod encoder;
pub mod store;
pub mod symbol;
pub mod view;

pub use common::codec::Scheme;
pub use common::error::{EncodeFailure, SymbolError, SymbolResult};
pub use common::metadata::SymbolSize;
pub use common::payload::{Payload, Text};
pub use datamatrix::DataMatrix;
pub use encoder::{Ecc200, SymbolEncoder};
pub use encoding_rs;
pub use store::SymbolStore;
pub use symbol::{Symbol, SymbolParts};
pub use view::Grid;
