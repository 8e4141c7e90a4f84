use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("packed secret is not valid base64: {0}")]
    Packed(#[from] base64::DecodeError),
    #[error("decoded secret is empty")]
    EmptyKey,
}

/// Decodes the packed secret into raw key bytes. Done once per catalog build.
pub fn decode_secret(packed: &str) -> Result<Vec<u8>, CipherError> {
    let key = STANDARD.decode(packed)?;
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    Ok(key)
}

/// Repeating-key XOR over a hex-encoded ciphertext, decrypt direction only.
///
/// Each decoded byte is combined with `key[i % key.len()]` and widened to the
/// char with that code point, so the output char count equals the byte count.
/// An empty key applies no transform; callers that need a real key are
/// expected to validate it first (see `decode_secret`).
pub fn process(hex_ciphertext: &str, key: &[u8]) -> String {
    decode_hex_lax(hex_ciphertext)
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let k = if key.is_empty() { 0 } else { key[i % key.len()] };
            char::from(b ^ k)
        })
        .collect()
}

/// Lax hex-pair decoding, matching the wire format's decoder: a pair that is
/// not valid hex becomes byte 0 and a trailing odd nibble is dropped. The
/// source format never signals malformed input, so neither do we;
/// garbage in, garbage out.
fn decode_hex_lax(hex: &str) -> Vec<u8> {
    let bytes = hex.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() / 2);
    for pair in bytes.chunks_exact(2) {
        let b = std::str::from_utf8(pair)
            .ok()
            .and_then(|p| u8::from_str_radix(p, 16).ok())
            .unwrap_or(0);
        out.push(b);
    }
    out
}
