use base2048::{Alphabet, CorruptInputError, PartialDecode};

/// Reference vectors for the standard alphabet: (decoded, encoded).
const VECTORS: &[(&[u8], &str)] = &[
    (b"\x14\xfb\x9c\x03\xd9\x7e", "\u{1ef}\u{e0b}\u{14f}\u{b07}\u{156}"),
    (b"\x14\xfb\x9c\x03\xd9", "\u{1ef}\u{e0b}\u{14f}\u{1a1}"),
    (b"\x14\xfb\x9c\x03", "\u{1ef}\u{e0b}\u{14b}"),
    (b"", ""),
    (b"f", "\u{1ae}"),
    (b"fo", "\u{553}\u{157}"),
    (b"foo", "\u{553}\u{69d}\u{f10}"),
    (b"foob", "\u{553}\u{69d}\u{5d3}"),
    (b"fooba", "\u{553}\u{69d}\u{daa}\u{1a9}"),
    (b"foobar", "\u{553}\u{69d}\u{daa}\u{c28}\u{14a}"),
    (b"foobarb", "\u{553}\u{69d}\u{daa}\u{c28}\u{279}\u{f0d}"),
    (b"foobarba", "\u{553}\u{69d}\u{daa}\u{c28}\u{279}\u{1a9}"),
    (b"foobarbaz", "\u{553}\u{69d}\u{daa}\u{c28}\u{279}\u{39c}\u{182}"),
    (
        b"foobarbazq",
        "\u{553}\u{69d}\u{daa}\u{c28}\u{279}\u{39c}\u{f45}\u{f0e}",
    ),
    (
        b"foobarbazqu",
        "\u{553}\u{69d}\u{daa}\u{c28}\u{279}\u{39c}\u{f45}\u{38a}",
    ),
    (
        b"foobarbazqux",
        "\u{553}\u{69d}\u{daa}\u{c28}\u{279}\u{39c}\u{f45}\u{38a}\u{1c0}",
    ),
];

/// Corrupt inputs: (bytes decoded before the failure, encoded, failing position).
const CORRUPT: &[(&[u8], &str, usize)] = &[
    // unknown symbol
    (b"", "Z", 0),
    // unknown symbol first
    (b"", "Z\u{553}\u{69d}\u{daa}\u{c28}\u{14a}", 0),
    // unknown symbol in the middle
    (b"f", "\u{553}Z\u{69d}\u{daa}\u{c28}\u{14a}", 1),
    (b"fooba", "\u{553}\u{69d}\u{daa}\u{c28}Z\u{14a}", 4),
    // unknown symbol last
    (b"fo", "\u{553}\u{69d}Z", 2),
    // trailing symbol (U+0F10) before the end
    (b"fo", "\u{553}\u{69d}\u{f10}\u{553}", 2),
    // trailing symbol (U+0F11) too large for the bits left
    (b"fo", "\u{553}\u{69d}\u{f11}", 2),
];

/// (bytes, symbols) pairs for the length functions.
const LENGTHS: &[(usize, usize)] = &[
    (0, 0),
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 3),
    (5, 4),
    (6, 5),
    (7, 6),
    (8, 6),
];

#[test_log::test]
fn encode_vectors() {
    for &(decoded, encoded) in VECTORS {
        assert_eq!(base2048::encode(decoded), encoded, "encode({decoded:x?})");
    }
}

#[test_log::test]
fn encode_to_slice_vectors() {
    let alphabet = Alphabet::standard();
    for &(decoded, encoded) in VECTORS {
        let mut dst = vec!['\0'; alphabet.encoded_len(decoded.len())];
        let written = alphabet.encode_to_slice(&mut dst, decoded);
        assert_eq!(written, dst.len());
        assert_eq!(dst.into_iter().collect::<String>(), encoded);
    }
}

#[test_log::test]
fn decode_vectors() {
    for &(decoded, encoded) in VECTORS {
        assert_eq!(base2048::decode(encoded).as_deref(), Ok(decoded));
    }
}

#[test_log::test]
fn decode_to_slice_vectors() {
    let alphabet = Alphabet::standard();
    for &(decoded, encoded) in VECTORS {
        let symbols: Vec<char> = encoded.chars().collect();
        let mut dst = vec![0; alphabet.decoded_len(symbols.len())];
        let written = alphabet.decode_to_slice(&mut dst, &symbols).unwrap();
        assert_eq!(&dst[..written], decoded);
    }
}

#[test_log::test]
fn decode_with_line_breaks() {
    for &(decoded, encoded) in VECTORS {
        for wrapped in [
            format!("\n{encoded}"),
            format!("\r{encoded}"),
            format!("{encoded}\n"),
            format!("{encoded}\r\n"),
            format!("\r\n{encoded}\r\n\r\n"),
        ] {
            assert_eq!(base2048::decode(&wrapped).as_deref(), Ok(decoded));
        }

        // Split after every symbol.
        let split: String = encoded.chars().flat_map(|c| [c, '\n']).collect();
        assert_eq!(base2048::decode(&split).as_deref(), Ok(decoded));
    }
}

#[test_log::test]
fn encoded_len_vectors() {
    let alphabet = Alphabet::standard();
    for &(bytes, symbols) in LENGTHS {
        assert_eq!(alphabet.encoded_len(bytes), symbols, "encoded_len({bytes})");
    }
}

#[test_log::test]
fn decoded_len_vectors() {
    let alphabet = Alphabet::standard();
    for &(bytes, symbols) in LENGTHS {
        // decoded_len may be one greater than the real length
        let len = alphabet.decoded_len(symbols);
        assert!(
            (bytes..=bytes + 1).contains(&len),
            "decoded_len({symbols}) = {len}, want {bytes} or {}",
            bytes + 1
        );
    }
}

#[test_log::test]
fn corrupt_input_vectors() {
    for &(decoded, encoded, position) in CORRUPT {
        let err = base2048::decode(encoded).unwrap_err();
        assert_eq!(err.error(), CorruptInputError { position }, "decode({encoded:?})");
        assert_eq!(err.partial(), decoded, "decode({encoded:?})");
    }
}

#[test_log::test]
fn corrupt_input_into_slice() {
    let alphabet = Alphabet::standard();
    for &(decoded, encoded, position) in CORRUPT {
        let symbols: Vec<char> = encoded.chars().collect();
        let mut dst = vec![0; alphabet.decoded_len(symbols.len())];
        let err = alphabet.decode_to_slice(&mut dst, &symbols).unwrap_err();
        assert_eq!(
            err,
            PartialDecode {
                written: decoded.len(),
                error: CorruptInputError { position }
            }
        );
        assert_eq!(&dst[..err.written], decoded);
    }
}

#[test_log::test]
fn trailing_symbol_with_one_bit_missing() {
    // Five symbols of "foobarb" leave one bit of the last byte missing.
    let prefix = "\u{553}\u{69d}\u{daa}\u{c28}\u{279}";
    for (value, &symbol) in Alphabet::standard().trailing().iter().enumerate() {
        let result = base2048::decode(&format!("{prefix}{symbol}"));
        match value {
            0 => assert_eq!(result.as_deref(), Ok(&b"foobarb"[..])),
            1 => assert_eq!(result.as_deref(), Ok(&b"foobarc"[..])),
            _ => {
                let err = result.unwrap_err();
                assert_eq!(err.error(), CorruptInputError { position: 5 }, "value {value}");
                assert_eq!(err.partial(), b"foobar");
            }
        }
    }
}

#[test_log::test]
fn trailing_symbol_with_three_bits_missing() {
    // Seven symbols of "foobarbazq" leave three bits missing, so every
    // trailing value fits.
    let prefix = "\u{553}\u{69d}\u{daa}\u{c28}\u{279}\u{39c}\u{f45}";
    for (value, &symbol) in Alphabet::standard().trailing().iter().enumerate() {
        let mut expected = b"foobarbaz".to_vec();
        expected.push(b'p' + value as u8);
        assert_eq!(
            base2048::decode(&format!("{prefix}{symbol}")),
            Ok(expected),
            "value {value}"
        );
    }
}

#[test_log::test]
fn corrupt_position_counts_line_breaks() {
    let err = base2048::decode("\u{553}\r\n\u{69d}\nZ").unwrap_err();
    assert_eq!(err.error().position, 5);
    assert_eq!(err.partial(), b"fo");
}

#[test]
fn error_message() {
    let err = base2048::decode("\u{553}\u{69d}Z").unwrap_err();
    assert_eq!(err.to_string(), "illegal base2048 data at input 2");
}
