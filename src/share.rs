//! Share formatting and the clipboard/browser boundary.
//!
//! The quote is formatted as `"<text>" — <author>` for both the clipboard
//! and the tweet intent link. The [`ShareTarget`] trait keeps the system
//! integration injectable so the app logic runs without a display server
//! under test.

use crate::catalog::Quote;
use thiserror::Error;

const TWEET_INTENT: &str = "https://twitter.com/intent/tweet?text=";

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("failed to open browser: {0}")]
    Browser(String),
}

/// Plain-text form of a quote for copying and sharing.
pub fn share_text(quote: &Quote) -> String {
    format!("\"{}\" — {}", quote.text, quote.author)
}

/// Tweet intent deep link carrying the share text, percent-encoded.
pub fn tweet_url(quote: &Quote) -> String {
    format!("{TWEET_INTENT}{}", percent_encode(&share_text(quote)))
}

// RFC 3986: unreserved characters stay literal, everything else is %XX
// per byte.
fn percent_encode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            other => {
                encoded.push_str(&format!("%{other:02X}"));
            }
        }
    }
    encoded
}

/// Destination for copy and share actions.
pub trait ShareTarget: Send {
    fn copy(&mut self, text: &str) -> Result<(), ShareError>;
    fn open(&mut self, url: &str) -> Result<(), ShareError>;
}

/// System integration: arboard for the clipboard, the default browser for
/// share links. The clipboard handle is opened per call so a headless
/// session only fails when copy is actually requested.
#[derive(Default)]
pub struct SystemShare;

impl SystemShare {
    pub fn new() -> Self {
        Self
    }
}

impl ShareTarget for SystemShare {
    fn copy(&mut self, text: &str) -> Result<(), ShareError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|err| ShareError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|err| ShareError::Clipboard(err.to_string()))
    }

    fn open(&mut self, url: &str) -> Result<(), ShareError> {
        open::that(url).map_err(|err| ShareError::Browser(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn share_text_quotes_and_attributes() {
        let quote = Catalog::builtin().find(8).unwrap();
        assert_eq!(
            share_text(quote),
            "\"Where there is love there is life.\" — Mahatma Gandhi"
        );
    }

    #[test]
    fn tweet_url_encodes_the_share_text() {
        let quote = Catalog::builtin().find(8).unwrap();
        let url = tweet_url(quote);
        assert!(url.starts_with(TWEET_INTENT));
        assert!(!url.contains(' '));
        // `"` is %22, space is %20, the em dash is %E2%80%94
        assert!(url.contains("%22Where%20there%20is%20love"));
        assert!(url.contains("%E2%80%94%20Mahatma%20Gandhi"));
    }

    #[test]
    fn unreserved_characters_stay_literal() {
        assert_eq!(percent_encode("AZaz09-._~"), "AZaz09-._~");
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("it's"), "it%27s");
    }
}
