//! Random strings and tokens
//!
//! Delegates entropy to the operating system RNG via `getrandom`; nothing
//! here stretches or mixes the randomness itself.

use anyhow::Context;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use getrandom::fill;

/// Charset used by [`random_string`] when callers have no preference.
pub const DEFAULT_CHARSET: &str = "qwertyuiopasdfghjklzxcvbnm0123456789";

/// Generate `length` characters drawn uniformly from `charset`.
///
/// Selection uses rejection sampling, so every charset character is equally
/// likely regardless of the charset size. Fails if the charset is empty or
/// the OS RNG is unavailable.
pub fn random_string(length: usize, charset: &str) -> anyhow::Result<String> {
    let chars: Vec<char> = charset.chars().collect();
    anyhow::ensure!(!chars.is_empty(), "charset must not be empty");

    let n = chars.len() as u32;
    // Largest multiple of n expressible in u32; draws at or above it are
    // rejected to avoid modulo bias.
    let bound = (u32::MAX / n) * n;

    let mut out = String::with_capacity(length);
    let mut buf = [0u8; 4];
    for _ in 0..length {
        let index = loop {
            fill(&mut buf)
                .map_err(|e| anyhow::anyhow!("system RNG unavailable: {e}"))
                .context("random string generation failed")?;
            let draw = u32::from_le_bytes(buf);
            if draw < bound {
                break (draw % n) as usize;
            }
        };
        out.push(chars[index]);
    }

    Ok(out)
}

/// Generate a URL-safe token from `length` random bytes.
///
/// The bytes are base64-encoded with the URL-safe alphabet and no padding,
/// so the result never contains `+`, `/` or `=`.
pub fn generate_token(length: usize) -> anyhow::Result<String> {
    let mut bytes = vec![0u8; length];
    fill(&mut bytes).map_err(|e| anyhow::anyhow!("system RNG unavailable: {e}"))?;

    Ok(URL_SAFE_NO_PAD.encode(&bytes))
}
