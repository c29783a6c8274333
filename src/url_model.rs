//! Target-URL derivation and export filename handling.
//!
//! The derived URL is the single output everything downstream consumes:
//! the QR render, the clipboard copy and the URL preview all read the
//! string produced by [`derive_url`]. Filenames for exported images are
//! derived here as well, sanitized for Linux filesystems.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::constants::export::{EMPTY_COMPONENT, FILENAME_PREFIX};

/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )` gets
/// percent-encoded on the fallback path.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Normalizes a base URL to exactly one trailing slash.
///
/// All trailing slashes are trimmed before the single one is appended,
/// so `https://x.com`, `https://x.com/` and `https://x.com//` all
/// normalize to the same base. An empty input becomes `/`.
fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    format!("{trimmed}/")
}

/// Derives the target URL carrying `code` and `id` as query parameters.
///
/// The normalized base is parsed as an absolute URL. On success any
/// pre-existing `code`/`id` query pairs are dropped and fresh ones are
/// appended, so repeated derivation never duplicates parameters. When the
/// base does not parse (an empty field normalizes to the bare `/`, which
/// has no scheme), the parameters are attached by literal concatenation
/// with percent-encoded values instead.
///
/// Total and deterministic: every input maps to exactly one output string.
pub fn derive_url(base_url: &str, code: &str, id: &str) -> String {
    let base = normalize_base(base_url);

    match Url::parse(&base) {
        Ok(mut url) => {
            let retained: Vec<(String, String)> = url
                .query_pairs()
                .filter(|(key, _)| key != "code" && key != "id")
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect();

            {
                let mut pairs = url.query_pairs_mut();
                pairs.clear();
                for (key, value) in &retained {
                    pairs.append_pair(key, value);
                }
                pairs.append_pair("code", code);
                pairs.append_pair("id", id);
            }

            url.to_string()
        }
        Err(_) => format!(
            "{base}?code={}&id={}",
            utf8_percent_encode(code, COMPONENT),
            utf8_percent_encode(id, COMPONENT)
        ),
    }
}

/// Derives the filename for an exported QR image: `qr-code-<code>-<id>.png`.
pub fn export_filename(code: &str, id: &str) -> String {
    format!(
        "{FILENAME_PREFIX}-{}-{}.png",
        sanitize_component(code),
        sanitize_component(id)
    )
}

/// Sanitizes one filename component for safe use on Linux.
///
/// Path separators, NUL, control characters and whitespace become `_`;
/// leading/trailing dots, spaces and underscores are trimmed. A component
/// that sanitizes to nothing is replaced with a fixed placeholder so the
/// filename never collapses to `qr-code--.png` fragments.
fn sanitize_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '\0' || c == '/' || c == '\\' || c.is_control() || c.is_whitespace() {
            out.push('_');
        } else {
            out.push(c);
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == ' ' || c == '_');
    if trimmed.is_empty() {
        EMPTY_COMPONENT.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_query_parser() {
        let out = derive_url("https://example.com", "a b&c=d", "x#y");
        let parsed = Url::parse(&out).unwrap();
        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("code".to_string(), "a b&c=d".to_string()),
                ("id".to_string(), "x#y".to_string()),
            ]
        );
    }

    #[test]
    fn test_deterministic() {
        let first = derive_url("https://example.com/path", "abc", "9");
        let second = derive_url("https://example.com/path", "abc", "9");
        assert_eq!(first, second);
    }

    #[test]
    fn test_trailing_slash_normalization() {
        let without = derive_url("https://example.com", "c", "i");
        let with = derive_url("https://example.com/", "c", "i");
        let doubled = derive_url("https://example.com//", "c", "i");
        assert_eq!(without, with);
        assert_eq!(with, doubled);
    }

    #[test]
    fn test_empty_base_falls_back_to_concatenation() {
        assert_eq!(derive_url("", "A&B", "1"), "/?code=A%26B&id=1");
    }

    #[test]
    fn test_fallback_encodes_reserved_characters() {
        let out = derive_url("not a url", "a=b", "c d");
        assert_eq!(out, "not a url/?code=a%3Db&id=c%20d");
    }

    #[test]
    fn test_existing_code_and_id_pairs_are_overwritten() {
        let out = derive_url("https://example.com/?code=OLD&id=OLD", "NEW", "2");
        let parsed = Url::parse(&out).unwrap();
        let codes: Vec<String> = parsed
            .query_pairs()
            .filter(|(k, _)| k == "code")
            .map(|(_, v)| v.into_owned())
            .collect();
        let ids: Vec<String> = parsed
            .query_pairs()
            .filter(|(k, _)| k == "id")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(codes, vec!["NEW".to_string()]);
        assert_eq!(ids, vec!["2".to_string()]);
    }

    #[test]
    fn test_unrelated_query_pairs_survive() {
        let out = derive_url("https://example.com/?lang=en", "c", "i");
        let parsed = Url::parse(&out).unwrap();
        let langs: Vec<String> = parsed
            .query_pairs()
            .filter(|(k, _)| k == "lang")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(langs, vec!["en".to_string()]);
    }

    #[test]
    fn test_default_inputs_end_to_end() {
        assert_eq!(
            derive_url("https://dynamic-key-card-page.vercel.app/", "12345678", "2"),
            "https://dynamic-key-card-page.vercel.app/?code=12345678&id=2"
        );
    }

    #[test]
    fn test_export_filename_plain() {
        assert_eq!(export_filename("12345678", "2"), "qr-code-12345678-2.png");
    }

    #[test]
    fn test_export_filename_sanitizes_separators() {
        assert_eq!(export_filename("a/b", "c\\d"), "qr-code-a_b-c_d.png");
    }

    #[test]
    fn test_export_filename_empty_components() {
        assert_eq!(export_filename("", "..."), "qr-code-blank-blank.png");
    }
}
