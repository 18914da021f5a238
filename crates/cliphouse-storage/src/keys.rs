//! Collision-resistant object naming shared by storage backends.
//!
//! Names combine a 32-byte random token (URL-safe base64, no padding) with
//! the extension derived from the validated content type. At this entropy
//! the collision probability over a process lifetime is treated as zero, so
//! concurrent uploads need no coordination.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::RngCore;

const NAME_ENTROPY_BYTES: usize = 32;

/// Generate an unguessable object basename with the given extension,
/// e.g. `q2JgfaPZ...Xk.png`.
pub fn random_object_name(extension: &str) -> String {
    let mut bytes = [0u8; NAME_ENTROPY_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    format!("{}.{}", URL_SAFE_NO_PAD.encode(bytes), extension)
}
