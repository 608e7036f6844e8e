use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("Input cannot be canonically serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Hash an arbitrary serializable value into a stable, URL-safe identifier.
///
/// The value is serialized to compact JSON (struct and tuple fields in
/// declaration order, no whitespace), SHA-256 is computed over the UTF-8
/// bytes, and the digest is encoded as base64url with trailing `=` stripped.
///
/// Identical logical inputs always hash identically within and across
/// process runs. Callers must not hash map types with nondeterministic
/// iteration order; the fixed-shape key tuples used throughout this crate
/// cannot fail here, so an error signals a programming mistake rather than
/// a recoverable runtime condition.
pub fn hash<T: Serialize + ?Sized>(value: &T) -> Result<String, HashError> {
    let canonical = serde_json::to_string(value)?;

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();

    Ok(URL_SAFE_NO_PAD.encode(digest))
}
