//! PKCE Generator
//!
//! RFC 7636 Proof Key for Code Exchange: verifier generation and challenge
//! derivation.

use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::fmt;

use crate::errors::{MatchDayError, MatchDayResult};

/// Unreserved URL characters allowed in a verifier.
const VERIFIER_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

/// Default verifier length.
pub const DEFAULT_VERIFIER_LENGTH: usize = 64;

/// Verifier lengths allowed by RFC 7636.
pub const VERIFIER_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 43..=128;

/// PKCE challenge method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PkceMethod {
    /// SHA-256 hash (recommended).
    #[default]
    S256,
    /// Plain text.
    Plain,
}

impl PkceMethod {
    /// Wire name, as sent in `code_challenge_method`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S256 => "S256",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for PkceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// PKCE generator interface (for dependency injection).
pub trait PkceGenerator: Send + Sync {
    /// Generate a verifier of exactly `length` characters.
    fn generate_verifier(&self, length: usize) -> MatchDayResult<String>;

    /// Compute the challenge for `verifier`.
    fn challenge(&self, verifier: &str, method: PkceMethod) -> String {
        challenge_from_verifier(verifier, method)
    }
}

/// Default PKCE generator backed by the operating system RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPkceGenerator;

impl DefaultPkceGenerator {
    /// Create new PKCE generator.
    pub fn new() -> Self {
        Self
    }
}

impl PkceGenerator for DefaultPkceGenerator {
    fn generate_verifier(&self, length: usize) -> MatchDayResult<String> {
        generate_code_verifier(length)
    }
}

/// Mock PKCE generator for testing.
#[derive(Default)]
pub struct MockPkceGenerator {
    next_verifier: std::sync::Mutex<Option<String>>,
    generate_history: std::sync::Mutex<Vec<usize>>,
}

impl MockPkceGenerator {
    /// Create new mock PKCE generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the next verifier to generate.
    pub fn set_next_verifier(&self, verifier: impl Into<String>) -> &Self {
        *self.next_verifier.lock().unwrap_or_else(|e| e.into_inner()) = Some(verifier.into());
        self
    }

    /// Lengths requested so far.
    pub fn generate_history(&self) -> Vec<usize> {
        self.generate_history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl PkceGenerator for MockPkceGenerator {
    fn generate_verifier(&self, length: usize) -> MatchDayResult<String> {
        self.generate_history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(length);

        let next = self
            .next_verifier
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();

        // Without a queued verifier, repeat the alphabet up to `length`.
        Ok(next.unwrap_or_else(|| {
            VERIFIER_ALPHABET
                .iter()
                .cycle()
                .take(length)
                .map(|&b| b as char)
                .collect()
        }))
    }
}

/// Generates a verifier of `length` characters drawn from the unreserved
/// URL alphabet.
///
/// Each character is `byte % 66` of an OS-random byte, so the first 58
/// characters of the alphabet are slightly more likely than the rest.
pub fn generate_code_verifier(length: usize) -> MatchDayResult<String> {
    if !VERIFIER_LENGTH_RANGE.contains(&length) {
        return Err(MatchDayError::configuration(format!(
            "PKCE verifier length must be between 43 and 128, got {}",
            length
        )));
    }

    let mut bytes = vec![0u8; length];
    OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
        MatchDayError::configuration(format!("Failed to read random bytes: {}", e)).with_cause(e)
    })?;

    Ok(bytes
        .into_iter()
        .map(|b| VERIFIER_ALPHABET[b as usize % VERIFIER_ALPHABET.len()] as char)
        .collect())
}

/// Computes the code challenge for `verifier`.
pub fn challenge_from_verifier(verifier: &str, method: PkceMethod) -> String {
    match method {
        PkceMethod::Plain => verifier.to_string(),
        PkceMethod::S256 => {
            // S256: BASE64URL(SHA256(code_verifier))
            let hash = Sha256::digest(verifier.as_bytes());
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash)
        }
    }
}

/// Validate PKCE verifier format.
pub fn is_valid_verifier(verifier: &str) -> bool {
    VERIFIER_LENGTH_RANGE.contains(&verifier.len())
        && verifier.bytes().all(|b| VERIFIER_ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_length_verifier() {
        let verifier = DefaultPkceGenerator::new()
            .generate_verifier(DEFAULT_VERIFIER_LENGTH)
            .unwrap();

        assert_eq!(verifier.len(), 64);
        assert!(is_valid_verifier(&verifier));
    }

    #[test]
    fn test_verifier_length_bounds() {
        assert_eq!(generate_code_verifier(43).unwrap().len(), 43);
        assert_eq!(generate_code_verifier(128).unwrap().len(), 128);
        assert!(generate_code_verifier(42).is_err());
        assert!(generate_code_verifier(129).is_err());
    }

    #[test]
    fn test_verifiers_differ() {
        let a = generate_code_verifier(64).unwrap();
        let b = generate_code_verifier(64).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_pkce_s256_challenge() {
        // RFC 7636 Appendix B
        let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
        let challenge = challenge_from_verifier(verifier, PkceMethod::S256);
        assert_eq!(challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
        assert!(!challenge.contains('='));
    }

    #[test]
    fn test_pkce_plain_challenge() {
        let verifier = "test-verifier";
        assert_eq!(challenge_from_verifier(verifier, PkceMethod::Plain), verifier);
    }

    #[test]
    fn test_method_wire_names() {
        assert_eq!(PkceMethod::S256.as_str(), "S256");
        assert_eq!(PkceMethod::Plain.to_string(), "plain");
    }

    #[test]
    fn test_mock_generator() {
        let generator = MockPkceGenerator::new();
        generator.set_next_verifier("fixed-verifier");

        assert_eq!(generator.generate_verifier(64).unwrap(), "fixed-verifier");
        let fallback = generator.generate_verifier(50).unwrap();
        assert_eq!(fallback.len(), 50);
        assert!(is_valid_verifier(&fallback));
        assert_eq!(generator.generate_history(), vec![64, 50]);
    }

    #[test]
    fn test_is_valid_verifier_rejects_bad_chars() {
        assert!(!is_valid_verifier(&"a".repeat(42)));
        assert!(!is_valid_verifier(&format!("{}+", "a".repeat(50))));
    }
}
