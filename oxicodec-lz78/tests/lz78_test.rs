//! LZ78 integration tests.

use oxicodec_core::{Codec, ErrorKind};
use oxicodec_lz78::{Lz78Codec, Lz78Decoder, Lz78Encoder, Lz78Token, compress, decompress};
use proptest::prelude::*;

#[test]
fn test_lz78_abababa_scenario() {
    let tokens = compress(b"ABABABA");
    let mut decoder = Lz78Decoder::new();
    let decompressed = decoder.decode(&tokens).expect("decompression failed");
    assert_eq!(decompressed, b"ABABABA");

    let phrases: Vec<Vec<u8>> = decoder.dictionary().iter().skip(1).map(<[u8]>::to_vec).collect();
    assert_eq!(
        phrases,
        vec![b"A".to_vec(), b"B".to_vec(), b"AB".to_vec(), b"ABA".to_vec()]
    );
    // The last token extends a partial match ("AB").
    assert_eq!(tokens.last(), Some(&Lz78Token::new(3, b'A')));
}

#[test]
fn test_lz78_edge_inputs() {
    let all_distinct: Vec<u8> = (0..=255).collect();
    let cases: Vec<Vec<u8>> = vec![
        Vec::new(),
        b"a".to_vec(),
        vec![b'X'; 1000],
        all_distinct,
        b"This is a test of compression! ".repeat(10),
        vec![0u8; 100],
    ];

    for case in cases {
        let tokens = compress(&case);
        assert_eq!(decompress(&tokens).expect("decompression failed"), case);
    }
}

#[test]
fn test_lz78_repeated_byte_phrases_grow() {
    // Phrases a, aa, aaa, ... so n bytes need about sqrt(2n) tokens.
    let data = vec![b'a'; 1000];
    let tokens = compress(&data);
    assert!(tokens.len() < 50);
    assert_eq!(decompress(&tokens).unwrap(), data);
}

#[test]
fn test_lz78_invalid_index_is_decode_error() {
    let err = decompress(&[Lz78Token::new(5, b'x')]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn test_lz78_encoder_and_decoder_dictionaries_agree() {
    let data = b"abracadabra abracadabra abracadabra";
    let mut encoder = Lz78Encoder::new();
    let tokens = encoder.encode(data);

    let mut decoder = Lz78Decoder::new();
    decoder.decode(&tokens).unwrap();

    // The decoder also records the final flush token, which the encoder
    // never inserts; otherwise the sizes match.
    let flushed = usize::from(encoder.dictionary_len() != tokens.len() + 1);
    assert_eq!(decoder.dictionary_len(), encoder.dictionary_len() + flushed);
}

#[test]
fn test_lz78_codec_trait() {
    assert!(Lz78Codec.verify(b"peter piper picked a peck").unwrap());
}

proptest! {
    #[test]
    fn prop_lz78_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let tokens = compress(&data);
        prop_assert_eq!(decompress(&tokens).unwrap(), data);
    }

    #[test]
    fn prop_lz78_roundtrip_low_entropy(data in proptest::collection::vec(0u8..2, 0..1024)) {
        let tokens = compress(&data);
        prop_assert_eq!(decompress(&tokens).unwrap(), data);
    }

    #[test]
    fn prop_lz78_dictionary_monotonic(data in proptest::collection::vec(0u8..4, 0..256)) {
        let tokens = compress(&data);
        let mut decoder = Lz78Decoder::new();
        for (k, token) in tokens.iter().enumerate() {
            prop_assert_eq!(decoder.dictionary_len(), k + 1);
            prop_assert!(token.index < decoder.dictionary_len());
            decoder.apply(token).unwrap();
        }
        prop_assert_eq!(decoder.dictionary_len(), tokens.len() + 1);
    }
}
