//! Signing secret generation for the generated backend.

use base64::{engine::general_purpose::STANDARD, Engine};
use rand::{rngs::OsRng, RngCore};

use crate::constants::SECRET_BYTES;

/// Generates a base64 encoded secret backed by 64 bytes from the operating
/// system's random source.
pub fn generate_secret() -> String {
    let mut bytes = [0u8; SECRET_BYTES];
    OsRng.fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}
