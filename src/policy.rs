use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use url::Url;

/// The one URL shape that earns a token: literal scheme, literal host,
/// literal path, numeric id, and nothing else. Anything off-shape is used
/// verbatim; this is an allowlist, not an oversight.
static EMBED_URL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https://yonaplay\.org/embed\.php\?id=\d+$").unwrap());

/// Third-party hosts that only get embedded with a reduced capability set
/// (scripts and same-origin, no top navigation, no popups).
const RESTRICTED_HOSTS: [&str; 3] = ["videa.hu", "www.yourupload.com", "www.mp4upload.com"];

pub fn matches_embed_shape(candidate: &str) -> bool {
    EMBED_URL_SHAPE.is_match(candidate)
}

/// Appends the authorization token as an extra query parameter, but only to
/// URLs of the canonical shape.
pub fn augment(decoded: &str, token: &str) -> String {
    if matches_embed_shape(decoded) {
        format!("{decoded}&apiKey={token}")
    } else {
        decoded.to_string()
    }
}

/// Whether the resolved URL's host sits on the sandbox denylist. A URL that
/// does not parse is treated as unrestricted; host inspection failures are
/// never surfaced.
pub fn requires_sandbox(resolved: &str) -> bool {
    match Url::parse(resolved) {
        Ok(url) => url
            .host_str()
            .map(|host| RESTRICTED_HOSTS.contains(&host))
            .unwrap_or(false),
        Err(e) => {
            debug!(error = %e, "unparsable destination; no restriction applied");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_shape_matches() {
        assert!(matches_embed_shape("https://yonaplay.org/embed.php?id=42"));
    }

    #[test]
    fn extra_query_parameter_fails_shape() {
        assert!(!matches_embed_shape(
            "https://yonaplay.org/embed.php?id=42&autoplay=1"
        ));
    }

    #[test]
    fn other_hosts_fail_shape() {
        assert!(!matches_embed_shape("https://example.org/embed.php?id=42"));
    }

    #[test]
    fn augment_appends_token_only_on_shape() {
        let token = "7350abcd";
        assert_eq!(
            augment("https://yonaplay.org/embed.php?id=7", token),
            "https://yonaplay.org/embed.php?id=7&apiKey=7350abcd"
        );
        let off_shape = "https://yonaplay.org/embed.php?id=7&x=1";
        assert_eq!(augment(off_shape, token), off_shape);
    }

    #[test]
    fn denylisted_host_requires_sandbox() {
        assert!(requires_sandbox("https://www.mp4upload.com/embed-abc.html"));
        assert!(requires_sandbox("https://videa.hu/player?v=x"));
        assert!(!requires_sandbox("https://example.org/embed"));
    }

    #[test]
    fn unparsable_url_is_unrestricted() {
        assert!(!requires_sandbox("not a url at all"));
    }
}
