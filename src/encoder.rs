use crate::alphabet::Alphabet;
use crate::{BITS_PER_BYTE, BITS_PER_SYMBOL};

/// The symbols encoding one complete byte sequence, produced lazily.
///
/// Created by [`Alphabet::encode_iter`].
#[derive(Debug, Clone)]
pub struct EncoderOutput<'a, I>
where
    I: Iterator<Item = u8>,
{
    input: I,
    alphabet: &'a Alphabet,
    /// Bits read from the input but not yet emitted, right-aligned.
    stage: u16,
    /// Number of valid bits in `stage` (0..11).
    remaining: u32,
    finished: bool,
}

// Encoder Algorithm
//
// stage = 0, remaining = 0
// for each input byte b:
//     need = 11 - remaining
//     if need <= 8:
//         remaining = 8 - need
//         emit primary[(stage << need) | (b >> remaining)]
//         stage = low `remaining` bits of b
//     else:
//         stage = (stage << 8) | b
//         remaining = remaining + 8
// if remaining == 0:
//     done
// elif remaining <= 3:
//     emit trailing[stage]
// else:
//     emit primary[stage]
impl<I: Iterator<Item = u8>> Iterator for EncoderOutput<'_, I> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for byte in self.input.by_ref() {
            let byte = u16::from(byte);
            let need = BITS_PER_SYMBOL - self.remaining;

            if need <= BITS_PER_BYTE {
                self.remaining = BITS_PER_BYTE - need;
                let index = (self.stage << need) | (byte >> self.remaining);
                self.stage = byte & ((1u16 << self.remaining) - 1);
                return Some(self.alphabet.primary()[usize::from(index)]);
            }

            self.stage = (self.stage << BITS_PER_BYTE) | byte;
            self.remaining += BITS_PER_BYTE;
        }

        self.finished = true;
        let stage = usize::from(self.stage);
        match self.remaining {
            0 => None,
            r if r <= BITS_PER_SYMBOL - BITS_PER_BYTE => Some(self.alphabet.trailing()[stage]),
            _ => Some(self.alphabet.primary()[stage]),
        }
    }
}

impl Alphabet {
    /// The exact number of symbols in the encoding of `n` bytes.
    pub fn encoded_len(&self, n: usize) -> usize {
        let (symbol_bits, byte_bits) = (BITS_PER_SYMBOL as usize, BITS_PER_BYTE as usize);
        n / symbol_bits * byte_bits + (n % symbol_bits * byte_bits).div_ceil(symbol_bits)
    }

    /// Encode a complete byte sequence as a lazily produced sequence of
    /// symbols.
    ///
    /// The last symbol is taken from the trailing table when the input's bit
    /// count leaves 1 to 3 bits over, which lets the decoder recognize the
    /// end of the data without padding.
    pub fn encode_iter<I>(&self, input: I) -> EncoderOutput<'_, I::IntoIter>
    where
        I: IntoIterator<Item = u8>,
    {
        EncoderOutput {
            input: input.into_iter(),
            alphabet: self,
            stage: 0,
            remaining: 0,
            finished: false,
        }
    }

    /// Encode `src` into `dst`, returning the number of symbols written,
    /// which is always `self.encoded_len(src.len())`.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than `self.encoded_len(src.len())`.
    pub fn encode_to_slice(&self, dst: &mut [char], src: &[u8]) -> usize {
        let len = self.encoded_len(src.len());
        assert!(
            dst.len() >= len,
            "destination holds {} symbols, encoding needs {len}",
            dst.len()
        );

        for (slot, symbol) in dst.iter_mut().zip(self.encode_iter(src.iter().copied())) {
            *slot = symbol;
        }
        len
    }

    /// Encode `src` into a new string.
    pub fn encode(&self, src: &[u8]) -> String {
        self.encode_iter(src.iter().copied()).collect()
    }
}
