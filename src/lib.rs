pub mod alphabet;
pub mod decoder;
pub mod encoder;
mod tables;

pub use alphabet::{Alphabet, ConfigError, Table};
pub use decoder::{CorruptInputError, DecodeError, PartialDecode};
pub use encoder::EncoderOutput;

/// Bits carried by one primary symbol.
pub const BITS_PER_SYMBOL: u32 = 11;
/// Bits in one input byte.
pub const BITS_PER_BYTE: u32 = 8;
/// Number of symbols in the primary table (2^11).
pub const PRIMARY_SIZE: usize = 1 << BITS_PER_SYMBOL;
/// Number of symbols in the trailing table (2^(11 - 8)).
pub const TRAILING_SIZE: usize = 1 << (BITS_PER_SYMBOL - BITS_PER_BYTE);

/// Encode `src` with the standard alphabet.
pub fn encode(src: &[u8]) -> String {
    Alphabet::standard().encode(src)
}

/// Decode `src` with the standard alphabet.
pub fn decode(src: &str) -> Result<Vec<u8>, DecodeError> {
    Alphabet::standard().decode(src)
}
