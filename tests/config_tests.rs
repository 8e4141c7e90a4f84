use std::io::Write;

use linkcloak::config::{load_catalog, load_registry, resolve_paths, ConfigError};
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_catalog_source() {
    let file = write_temp(
        r#"{
            "secret": "azN5",
            "count": 1,
            "chunks": {"0": ["0342", "17"]},
            "sequences": {"0": "685b5e"},
            "auth": {"0": {"ticket": "t-1"}}
        }"#,
    );

    let source = load_catalog(file.path().to_str().unwrap()).unwrap();
    assert_eq!(source.count, 1);
    assert_eq!(source.chunks[&0].len(), 2);
    assert_eq!(source.auth[&0]["ticket"], "t-1");
}

#[test]
fn loads_embed_registry() {
    let file = write_temp(
        r#"{
            "modules": ["alpha", "beta"],
            "payloads": {"alpha": "==Adview", "beta": "==Bdview"},
            "configs": {
                "alpha": {"index_key": "Nw==", "offsets": {"7": 3}},
                "beta": {"index_key": "Mw==", "offsets": {"3": 1}}
            }
        }"#,
    );

    let registry = load_registry(file.path().to_str().unwrap()).unwrap();
    assert_eq!(registry.modules, vec!["alpha", "beta"]);
    assert_eq!(registry.configs["alpha"].offsets[&7], 3);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let file = write_temp("{ not json");
    let err = load_catalog(file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_registry("definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn cli_flags_win_path_resolution() {
    let (catalog, embeds) = resolve_paths("cat.json", "emb.json").unwrap();
    assert_eq!(catalog, "cat.json");
    assert_eq!(embeds, "emb.json");
}
