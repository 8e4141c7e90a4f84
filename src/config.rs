use std::collections::HashMap;
use std::fs;

use config as config_rs;
use serde::Deserialize;
use thiserror::Error;

/// External data feeding the download catalog: one packed secret, a declared
/// entry count, and per-index maps of hex-ciphertext chunks, permutation
/// ciphertexts, and opaque auth values. Maps rather than vectors, so a
/// missing index is expressible and aborts the build like the absent page
/// globals it stands in for.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSource {
    pub secret: String,
    pub count: usize,
    pub chunks: HashMap<usize, Vec<String>>,
    pub sequences: HashMap<usize, String>,
    pub auth: HashMap<usize, serde_json::Value>,
}

/// Per-module decode settings: a base64-packed index key and the offset
/// table it selects a trailing-trim count from.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleConfig {
    pub index_key: String,
    pub offsets: HashMap<i64, usize>,
}

/// The embed side keeps two registries, as the source pages did: one for
/// obfuscated payloads, one for decode settings. A module missing from
/// either is skipped silently. `modules` carries the page's listing order
/// so "first listed" stays well defined.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedRegistry {
    pub modules: Vec<String>,
    pub payloads: HashMap<String, String>,
    pub configs: HashMap<String, ModuleConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
}

pub fn load_catalog(path: &str) -> Result<CatalogSource, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn load_registry(path: &str) -> Result<EmbedRegistry, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Resolves the registry file paths: defaults, then environment, then CLI
/// flags take precedence.
pub fn resolve_paths(
    catalog_flag: &str,
    embeds_flag: &str,
) -> Result<(String, String), ConfigError> {
    let mut builder = config_rs::Config::builder();

    if let Ok(path) = std::env::var("LINKCLOAK_CATALOG") {
        builder = builder.set_override("catalog", path)?;
    }
    if let Ok(path) = std::env::var("LINKCLOAK_EMBEDS") {
        builder = builder.set_override("embeds", path)?;
    }

    builder = builder
        .set_override("catalog", catalog_flag.to_string())?
        .set_override("embeds", embeds_flag.to_string())?;

    let cfg = builder.build()?;

    Ok((cfg.get::<String>("catalog")?, cfg.get::<String>("embeds")?))
}
