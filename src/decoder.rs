use crate::alphabet::{Alphabet, is_line_break};
use crate::{BITS_PER_BYTE, BITS_PER_SYMBOL};

/// A symbol that could not be decoded, identified by its index in the input
/// (line breaks included).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("illegal base2048 data at input {position}")]
pub struct CorruptInputError {
    pub position: usize,
}

/// Decoding into a caller-provided buffer stopped at a corrupt symbol.
/// The first `written` bytes of the buffer hold everything decoded before it.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("decoding stopped after {written} bytes")]
pub struct PartialDecode {
    pub written: usize,
    #[source]
    pub error: CorruptInputError,
}

/// Decoding a string stopped at a corrupt symbol. Carries the bytes decoded
/// before it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct DecodeError {
    partial: Vec<u8>,
    error: CorruptInputError,
}

impl DecodeError {
    /// The corrupt symbol that stopped decoding.
    pub fn error(&self) -> CorruptInputError {
        self.error
    }

    /// The bytes decoded before the corrupt symbol.
    pub fn partial(&self) -> &[u8] {
        &self.partial
    }

    /// Take the bytes decoded before the corrupt symbol.
    pub fn into_partial(self) -> Vec<u8> {
        self.partial
    }
}

impl Alphabet {
    /// An upper bound on the number of bytes decoded from `n` symbols. The
    /// actual count may be one less. Saturates at `usize::MAX`.
    pub fn decoded_len(&self, n: usize) -> usize {
        let (symbol_bits, byte_bits) = (BITS_PER_SYMBOL as usize, BITS_PER_BYTE as usize);
        (n / byte_bits)
            .saturating_mul(symbol_bits)
            .saturating_add(n % byte_bits * symbol_bits / byte_bits)
    }

    /// Decode `src` into `dst`, returning the number of bytes written.
    ///
    /// Line breaks (`\r` and `\n`) are skipped wherever they occur. A
    /// trailing-table symbol is only accepted as the last symbol, and only
    /// if its value fits in the bits still missing from the current byte.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than the decoded data; a buffer of
    /// `self.decoded_len(src.len())` bytes is always large enough.
    pub fn decode_to_slice(&self, dst: &mut [u8], src: &[char]) -> Result<usize, PartialDecode> {
        // The last symbol that is not a line break carries the final,
        // possibly partial, group.
        let Some(last) = src.iter().rposition(|&symbol| !is_line_break(symbol)) else {
            return Ok(0);
        };

        let mut written = 0;
        let mut stage: u32 = 0;
        let mut remaining: u32 = 0;
        // Symbol bits seen so far, modulo 8.
        let mut residue: u32 = 0;

        for (position, &symbol) in src[..=last].iter().enumerate() {
            if is_line_break(symbol) {
                continue;
            }

            residue = (residue + BITS_PER_SYMBOL) % BITS_PER_BYTE;

            let (bits, count) = if let Some(value) = self.primary_value(symbol) {
                let count = if position == last {
                    BITS_PER_SYMBOL - residue
                } else {
                    BITS_PER_SYMBOL
                };
                (value, count)
            } else {
                let count = BITS_PER_BYTE - remaining;
                match self.trailing_value(symbol) {
                    Some(value) if position == last && u32::from(value) < (1 << count) => {
                        (value, count)
                    }
                    _ => {
                        log::debug!(
                            "corrupt base2048 input at symbol {position} ({symbol:?}) after {written} bytes"
                        );
                        return Err(PartialDecode {
                            written,
                            error: CorruptInputError { position },
                        });
                    }
                }
            };

            stage = (stage << count) | u32::from(bits);
            remaining += count;

            while remaining >= BITS_PER_BYTE {
                remaining -= BITS_PER_BYTE;
                dst[written] = (stage >> remaining) as u8;
                stage &= (1 << remaining) - 1;
                written += 1;
            }
        }

        Ok(written)
    }

    /// Decode a string of symbols into a new byte vector.
    ///
    /// On corrupt input the error carries the bytes decoded so far, and the
    /// reported position counts `char`s of `src`.
    pub fn decode(&self, src: &str) -> Result<Vec<u8>, DecodeError> {
        let symbols: Vec<char> = src.chars().collect();
        let mut bytes = vec![0; self.decoded_len(symbols.len())];

        match self.decode_to_slice(&mut bytes, &symbols) {
            Ok(written) => {
                bytes.truncate(written);
                Ok(bytes)
            }
            Err(PartialDecode { written, error }) => {
                bytes.truncate(written);
                Err(DecodeError {
                    partial: bytes,
                    error,
                })
            }
        }
    }
}
