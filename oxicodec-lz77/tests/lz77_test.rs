//! LZ77 integration tests.

use oxicodec_lz77::{
    DEFAULT_WINDOW, Lz77Codec, Lz77Config, Lz77Decoder, Lz77Token, OxiCodecError, compress,
    decompress,
};
use oxicodec_core::{Codec, ErrorKind};
use proptest::prelude::*;

#[test]
fn test_lz77_abababa_scenario() {
    let tokens = compress(b"ABABABA", 20).expect("compression failed");

    let long_match = tokens
        .iter()
        .find(|t| t.length >= 4)
        .expect("expected a match of length >= 4");
    assert_eq!(long_match.offset, 2);

    let decompressed = decompress(&tokens).expect("decompression failed");
    assert_eq!(decompressed, b"ABABABA");
}

#[test]
fn test_lz77_edge_inputs() {
    let all_distinct: Vec<u8> = (0..=255).collect();
    let cases: Vec<Vec<u8>> = vec![
        Vec::new(),
        b"a".to_vec(),
        vec![b'X'; 1000],
        all_distinct,
        b"The quick brown fox jumps over the lazy dog. ".repeat(40),
        vec![0u8; 64],
    ];

    for case in cases {
        for window in [1, 2, DEFAULT_WINDOW, 4096] {
            let tokens = compress(&case, window).expect("compression failed");
            let decompressed = decompress(&tokens).expect("decompression failed");
            assert_eq!(decompressed, case, "window {}", window);
        }
    }
}

#[test]
fn test_lz77_all_distinct_is_all_literals() {
    let data: Vec<u8> = (0..=255).collect();
    let tokens = compress(&data, DEFAULT_WINDOW).unwrap();
    assert_eq!(tokens.len(), 256);
    assert!(tokens.iter().all(|t| !t.is_match()));
}

#[test]
fn test_lz77_repeated_byte_compresses() {
    let data = vec![b'X'; 1000];
    let tokens = compress(&data, DEFAULT_WINDOW).unwrap();
    // A single literal followed by one overlapping copy.
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].offset, 1);
    assert_eq!(tokens[1].length, 999);
}

#[test]
fn test_lz77_invalid_offset_is_decode_error() {
    let tokens = [Lz77Token::reference(1, 1, None)];
    let err = decompress(&tokens).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(matches!(err, OxiCodecError::InvalidOffset { .. }));
}

#[test]
fn test_lz77_codec_trait() {
    let codec = Lz77Codec::new(Lz77Config::new(32).unwrap());
    assert!(codec.verify(b"mississippi mississippi").unwrap());
}

proptest! {
    #[test]
    fn prop_lz77_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..512), window in 1usize..64) {
        let tokens = compress(&data, window).unwrap();
        prop_assert_eq!(decompress(&tokens).unwrap(), data);
    }

    #[test]
    fn prop_lz77_roundtrip_low_entropy(data in proptest::collection::vec(0u8..3, 0..512)) {
        let tokens = compress(&data, DEFAULT_WINDOW).unwrap();
        prop_assert_eq!(decompress(&tokens).unwrap(), data);
    }

    #[test]
    fn prop_lz77_offsets_never_exceed_output(data in proptest::collection::vec(0u8..4, 0..256), window in 1usize..32) {
        let tokens = compress(&data, window).unwrap();
        let mut decoder = Lz77Decoder::new();
        for token in &tokens {
            if token.is_match() {
                prop_assert!(token.offset <= decoder.output_len());
                prop_assert!(token.offset <= window);
            }
            decoder.apply(token).unwrap();
        }
        prop_assert_eq!(decoder.output_len(), data.len());
    }
}
