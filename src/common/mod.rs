pub mod bit_utils;
pub mod codec;
pub mod ec;
pub mod error;
pub mod metadata;
pub mod payload;
pub mod placement;
