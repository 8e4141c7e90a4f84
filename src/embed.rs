use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::config::{EmbedRegistry, ModuleConfig};
use crate::policy;

/// Characters outside the base64 alphabet are decoy noise injected into the
/// stored payload; everything else survives the strip.
static NON_ALPHABET: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9+/=]").unwrap());

// The api key ships pre-split so the assembled value never appears in
// static data. Concatenation order is fragment 1 through 4.
const KEY_FRAGMENTS: [&str; 4] = ["7350", "3d58-f228-", "425f-97f1-", "2d9512f5772c"];

/// Outcome of a successful resolve: the final URL and whether the embedding
/// context must withhold navigation/popup capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub url: String,
    pub restricted: bool,
}

/// Decodes obfuscated embed payloads on demand. Owns the registries and the
/// write-once authorization token; the token is assembled from its fragments
/// on the first successful lookup and the fragments are dropped.
pub struct EmbedResolver {
    registry: EmbedRegistry,
    fragments: Option<[String; 4]>,
    token: Option<String>,
}

impl EmbedResolver {
    pub fn new(registry: EmbedRegistry) -> Self {
        Self::with_fragments(registry, KEY_FRAGMENTS.map(String::from))
    }

    pub fn with_fragments(registry: EmbedRegistry, fragments: [String; 4]) -> Self {
        Self {
            registry,
            fragments: Some(fragments),
            token: None,
        }
    }

    /// First module in listing order, if any.
    pub fn first_module(&self) -> Option<String> {
        self.registry.modules.first().cloned()
    }

    /// Resolves a module key to its final URL plus restriction flag.
    /// Missing registry entries and undecodable payloads yield `None`; no
    /// error escapes this surface.
    pub fn resolve(&mut self, module_key: &str) -> Option<Resolution> {
        if !self.registry.payloads.contains_key(module_key)
            || !self.registry.configs.contains_key(module_key)
        {
            debug!(module_key, "no registry entry; skipping render");
            return None;
        }

        // Token assembly happens as soon as both entries are found, before
        // the payload decode, matching the source ordering: a decode failure
        // still consumes the fragments.
        let token = self.token();

        let payload = self.registry.payloads[module_key].clone();
        let module_cfg = self.registry.configs[module_key].clone();

        let trim = trim_count(&module_cfg)?;
        let decoded = decode_payload(&payload, trim)?;

        let url = policy::augment(&decoded, &token);
        let restricted = policy::requires_sandbox(&url);

        Some(Resolution { url, restricted })
    }

    /// True once the pre-split fragments have been consumed into the token.
    pub fn fragments_consumed(&self) -> bool {
        self.fragments.is_none()
    }

    fn token(&mut self) -> String {
        if let Some(fragments) = self.fragments.take() {
            self.token = Some(fragments.concat());
        }
        self.token.clone().unwrap_or_default()
    }
}

/// Trailing-trim count for a module: decode the packed index key, parse it
/// as an integer, and use that to select from the offset table.
fn trim_count(module_cfg: &ModuleConfig) -> Option<usize> {
    let decoded = STANDARD.decode(&module_cfg.index_key).ok()?;
    let key: i64 = String::from_utf8(decoded).ok()?.trim().parse().ok()?;
    module_cfg.offsets.get(&key).copied()
}

/// Reverses the stored payload, strips the decoy characters, base64-decodes
/// what remains, and trims exactly `trim` trailing characters (saturating
/// at empty). Bytes are widened to chars by code point, matching the
/// decoder the payloads were produced for.
fn decode_payload(payload: &str, trim: usize) -> Option<String> {
    let reversed: String = payload.chars().rev().collect();
    let stripped = NON_ALPHABET.replace_all(&reversed, "");

    let bytes = match STANDARD.decode(stripped.as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(error = %e, "payload did not base64-decode; skipping render");
            return None;
        }
    };

    let text: String = bytes.into_iter().map(char::from).collect();
    let keep = text.chars().count().saturating_sub(trim);
    Some(text.chars().take(keep).collect())
}
