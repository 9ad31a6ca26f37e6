//! Best-effort JSON body decoding.
//!
//! [`LenientJson`] never rejects: an unreadable body or invalid JSON yields
//! `T::default()` instead of a 4xx.

use std::{borrow::Cow, convert::Infallible};

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Extractor decoding the body as `T`, falling back to `T::default()`.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                debug!(%rejection, "request body unreadable; using default");
                return Ok(Self(T::default()));
            }
        };
        Ok(Self(decode_or_default(&bytes)))
    }
}

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode `bytes` as JSON, or return `T::default()` when the text is not JSON.
///
/// The body is read the way a browser-style `text()` would: a leading BOM is
/// dropped, invalid UTF-8 becomes U+FFFD, and unpaired surrogate escapes are
/// rewritten to `\uFFFD` so they do not sink the whole document.
pub fn decode_or_default<T>(bytes: &[u8]) -> T
where
    T: DeserializeOwned + Default,
{
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let text = String::from_utf8_lossy(bytes);
    let text = replace_lone_surrogates(&text);

    serde_json::from_str(&text).unwrap_or_else(|err| {
        debug!(error = %err, len = bytes.len(), "body is not valid JSON; using default");
        T::default()
    })
}

/// Rewrite `\uD800`..`\uDFFF` escapes that are not part of a high/low pair.
fn replace_lone_surrogates(text: &str) -> Cow<'_, str> {
    if !text.contains("\\u") {
        return Cow::Borrowed(text);
    }

    let bytes = text.as_bytes();
    let mut out = String::new();
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        match unicode_escape(bytes, i) {
            // Any other escape, including `\\`: skip the escaped byte too.
            None => i += 2,
            Some(0xD800..=0xDBFF)
                if matches!(unicode_escape(bytes, i + 6), Some(0xDC00..=0xDFFF)) =>
            {
                i += 12;
            }
            Some(0xD800..=0xDFFF) => {
                out.push_str(&text[copied..i]);
                out.push_str("\\uFFFD");
                i += 6;
                copied = i;
            }
            Some(_) => i += 6,
        }
    }

    if copied == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[copied..]);
    Cow::Owned(out)
}

/// Code unit of a `\uXXXX` escape starting at `at`.
fn unicode_escape(bytes: &[u8], at: usize) -> Option<u16> {
    if bytes.get(at) != Some(&b'\\') || bytes.get(at + 1) != Some(&b'u') {
        return None;
    }
    let hex = bytes.get(at + 2..at + 6)?;
    if !hex.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    u16::from_str_radix(std::str::from_utf8(hex).ok()?, 16).ok()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Named {
        #[serde(default)]
        name: String,
    }

    #[test]
    fn decodes_valid_json() {
        let p: Named = decode_or_default(br#"{"name":"x"}"#);
        assert_eq!(p.name, "x");
    }

    #[test]
    fn falls_back_on_garbage_and_empty() {
        assert_eq!(decode_or_default::<Named>(b"not-json"), Named::default());
        assert_eq!(decode_or_default::<Named>(b""), Named::default());
        assert_eq!(decode_or_default::<Named>(br#"{"name": 5}"#), Named::default());
        assert_eq!(decode_or_default::<Named>(&[0xEF, 0xBB, 0xBF]), Named::default());
    }

    #[test]
    fn leading_bom_is_dropped() {
        let p: Named = decode_or_default(b"\xEF\xBB\xBF{\"name\":\"x\"}");
        assert_eq!(p.name, "x");
    }

    #[test]
    fn invalid_utf8_becomes_replacement_char() {
        let p: Named = decode_or_default(b"{\"name\":\"a\xffb\"}");
        assert_eq!(p.name, "a\u{FFFD}b");
    }

    #[test]
    fn lone_surrogates_become_replacement_char() {
        let p: Named = decode_or_default(br#"{"name":"x\ud800y\udc00"}"#);
        assert_eq!(p.name, "x\u{FFFD}y\u{FFFD}");

        let p: Named = decode_or_default(br#"{"name":"\udbff"}"#);
        assert_eq!(p.name, "\u{FFFD}");
    }

    #[test]
    fn surrogate_pairs_and_escaped_backslashes_are_kept() {
        let p: Named = decode_or_default(br#"{"name":"\ud83d\ude00"}"#);
        assert_eq!(p.name, "\u{1F600}");

        let p: Named = decode_or_default(br#"{"name":"\\ud800"}"#);
        assert_eq!(p.name, "\\ud800");
    }
}
