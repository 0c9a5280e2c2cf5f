//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! The harnesses stick to operations that do not go through the regex
//! engine (trailing slash edits and the default-port table), which keeps
//! them tractable for the model checker.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{DEFAULT_PORTS, Url, default_port};

/// Characters drawn for generated URL text, including the separators.
const URL_CHARS: &[u8] = b"abc019:/?#&=";

/// Generate a URL character
fn arbitrary_url_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % URL_CHARS.len();
    URL_CHARS[idx] as char
}

impl kani::Arbitrary for Url {
    fn any() -> Self {
        // Generate 0-6 chars for tractability
        let len: usize = kani::any();
        let len = len % 7;

        let text: String = (0..len).map(|_| arbitrary_url_char()).collect();
        Url::new(text)
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: Trimming the trailing slash never lengthens the text
#[kani::proof]
#[kani::unwind(8)]
fn proof_trim_never_grows() {
    let url: Url = kani::any();
    let trimmed = url.trim_trailing_slash();
    assert!(trimmed.len() <= url.len());
    assert!(url.starts_with(trimmed.as_str()));
}

/// Proof: Append then trim restores the original text
#[kani::proof]
#[kani::unwind(8)]
fn proof_append_then_trim_roundtrip() {
    let url: Url = kani::any();
    assert_eq!(url.append_trailing_slash().trim_trailing_slash(), url);
}

/// Proof: Appending twice adds exactly two characters
#[kani::proof]
#[kani::unwind(8)]
fn proof_append_is_not_idempotent() {
    let url: Url = kani::any();
    let twice = url.append_trailing_slash().append_trailing_slash();
    assert_eq!(twice.len(), url.len() + 2);
    assert!(twice.ends_with("//"));
}

/// Proof: Default-port lookup ignores ASCII case for every table entry
#[kani::proof]
#[kani::unwind(30)]
fn proof_default_port_case_insensitive() {
    let idx: usize = kani::any();
    kani::assume(idx < DEFAULT_PORTS.len());
    let (scheme, port) = DEFAULT_PORTS[idx];

    assert_eq!(default_port(scheme), Some(port));
    assert_eq!(default_port(&scheme.to_ascii_uppercase()), Some(port));
}
