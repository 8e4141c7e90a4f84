use linkcloak::{assembler, cipher};
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 200;

// Strategy for non-empty XOR keys
fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..24)
}

// Strategy for arbitrary plaintext bytes
fn plaintext_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..300)
}

// Strategy for a true permutation of 0..n, derived by argsorting random
// weights so every length in range is exercised
fn permutation_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<u32>(), 1..24).prop_map(|weights| {
        let mut indices: Vec<usize> = (0..weights.len()).collect();
        indices.sort_by_key(|&i| (weights[i], i));
        indices
    })
}

fn encrypt(plain: &[u8], key: &[u8]) -> String {
    let xored: Vec<u8> = plain
        .iter()
        .enumerate()
        .map(|(i, &b)| b ^ key[i % key.len()])
        .collect();
    hex::encode(xored)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn prop_cipher_reverses_repeating_key_xor(
        plain in plaintext_strategy(),
        key in key_strategy(),
    ) {
        let ciphertext = encrypt(&plain, &key);
        let decrypted = cipher::process(&ciphertext, &key);

        let expected: String = plain.iter().map(|&b| char::from(b)).collect();
        prop_assert_eq!(decrypted, expected);
    }

    #[test]
    fn prop_assembled_content_places_every_chunk(seq in permutation_strategy()) {
        let chunks: Vec<String> = (0..seq.len()).map(|j| format!("<c{j}>")).collect();
        let assembled = assembler::assemble(&chunks, &seq).unwrap();

        // walking destinations 0..n in order must reproduce the output,
        // with chunk j appearing at destination seq[j]
        let mut cursor = 0usize;
        for dest in 0..seq.len() {
            let j = seq.iter().position(|&d| d == dest).unwrap();
            let piece = &chunks[j];
            prop_assert_eq!(&assembled[cursor..cursor + piece.len()], piece.as_str());
            cursor += piece.len();
        }
        prop_assert_eq!(cursor, assembled.len());
    }

    #[test]
    fn prop_duplicate_destination_is_rejected(seq in permutation_strategy()) {
        prop_assume!(seq.len() >= 2);
        let chunks: Vec<String> = (0..seq.len()).map(|j| format!("<c{j}>")).collect();

        let mut corrupted = seq.clone();
        corrupted[0] = corrupted[seq.len() - 1];
        prop_assert!(assembler::assemble(&chunks, &corrupted).is_err());
    }
}
